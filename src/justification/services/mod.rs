/// Domain services for justification tracking
mod reconciler;

pub use reconciler::StoreReconciler;
