//! explainer - dependency justification tracker
//!
//! This library keeps a human-written answer to "why do we depend on this?"
//! for every entry in a package.json-shaped manifest, persists the answers
//! in a justification store, and reports which dependencies still lack one.
//! It follows hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`justification`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs, one per command
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use explainer::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let manifest_reader = FileSystemManifestReader::new(false);
//! let store = JsonFileStore::new(PathBuf::from("explainer.json"));
//! let report_sink = ConsoleReportSink::new();
//!
//! // Create use case
//! let use_case = ListJustificationsUseCase::new(manifest_reader, store, report_sink);
//!
//! // Execute
//! let request = ManifestRequest::new(PathBuf::from("package.json"));
//! let report = use_case.execute(&request)?;
//! println!("{} of {} dependencies still need a justification", report.unexplained, report.total);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod justification;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleReportSink, StdinPrompt};
    pub use crate::adapters::outbound::filesystem::{
        EmbeddedManifestStore, FileSystemManifestReader, JsonFileStore,
    };
    pub use crate::application::dto::{
        AddRequest, CleanReport, ListReport, ManifestRequest, UpdateReport,
    };
    pub use crate::application::use_cases::{
        AddJustificationUseCase, CleanStoreUseCase, ListJustificationsUseCase, UpdateStoreUseCase,
    };
    pub use crate::config::{ConfigFile, ExplainerConfig, StoreLocation};
    pub use crate::justification::domain::{
        parse_manifest, DependencySet, JustificationMap, Manifest,
    };
    pub use crate::justification::services::StoreReconciler;
    pub use crate::ports::outbound::{
        DescriptionPrompt, JustificationStore, ManifestReader, ReportKind, ReportSink,
    };
    pub use crate::shared::error::{ExitCode, ExplainerError};
    pub use crate::shared::Result;
}
