/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod requests;
mod reports;

pub use reports::{CleanReport, ListReport, UpdateReport};
pub use requests::{AddRequest, ManifestRequest};
