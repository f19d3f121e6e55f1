/// Use cases module containing application business logic orchestration
mod add_justification;
mod clean_store;
mod list_justifications;
mod update_store;

pub use add_justification::AddJustificationUseCase;
pub use clean_store::CleanStoreUseCase;
pub use list_justifications::ListJustificationsUseCase;
pub use update_store::UpdateStoreUseCase;
