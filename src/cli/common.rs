//! Shared CLI error and exit code types.

use crate::services::ScanError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input did not pass validation (bad filenames, strict-mode warnings)
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
}

/// Error returned by CLI command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Numeric exit code for `std::process::exit`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ScanError> for CliError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NoLayouts { .. } => Self::validation(err.to_string()),
            ScanError::Io { .. } | ScanError::Other(_) => {
                Self::io(format!("{:#}", anyhow::Error::from(err)))
            }
        }
    }
}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
        assert_eq!(ExitCode::Success as i32, 0);
    }

    #[test]
    fn test_from_scan_error() {
        let err = CliError::from(ScanError::NoLayouts {
            keyboard: "kbd4".to_string(),
            dir: PathBuf::from("cfg/kbd4"),
        });
        assert_eq!(err.code, ExitCode::Validation);
        assert_eq!(err.message, "wrong file names in kbd4");

        let err = CliError::from(ScanError::Io {
            path: PathBuf::from("cfg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.code, ExitCode::Io);
        assert!(err.message.contains("Failed to read directory: cfg"));
        assert!(err.message.contains("gone"));
    }
}
