use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - including the usage screen for unknown commands
    Success = 0,
    /// The dependency named on the command line is not declared in the manifest
    ValidationFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest or store I/O error, parse error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailure => write!(f, "Validation Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for justification tracking.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ExplainerError {
    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest contains valid JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read justification store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable and you have the required permissions")]
    StoreReadError { path: PathBuf, details: String },

    #[error("Failed to parse justification store: {path}\nDetails: {details}\n\n💡 Hint: The store must be a JSON object mapping dependency names to justification text")]
    StoreParseError { path: PathBuf, details: String },

    #[error("Failed to write justification store: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    StoreWriteError { path: PathBuf, details: String },

    #[error("\"{name}\" is not a declared dependency\n\n💡 Hint: Run `explainer list` to see the dependencies declared in the manifest")]
    UnknownDependency { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ValidationFailure.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ValidationFailure),
            "Validation Failure (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = ExplainerError::ManifestNotFound {
            path: PathBuf::from("/test/path/package.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Manifest file not found"));
        assert!(display.contains("/test/path/package.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let error = ExplainerError::ManifestParseError {
            path: PathBuf::from("/test/package.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse manifest file"));
        assert!(display.contains("/test/package.json"));
        assert!(display.contains("expected value at line 1"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_store_write_error_display() {
        let error = ExplainerError::StoreWriteError {
            path: PathBuf::from("/test/explainer.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write justification store"));
        assert!(display.contains("/test/explainer.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_unknown_dependency_display() {
        let error = ExplainerError::UnknownDependency {
            name: "left-pad".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("\"left-pad\""));
        assert!(display.contains("not a declared dependency"));
        assert!(display.contains("explainer list"));
    }
}
