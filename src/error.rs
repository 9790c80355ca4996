//! Error types for Folio
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// IO error (terminal setup, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// JSON serialization error (export)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failed or was aborted
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Required input missing and no terminal to prompt on
    #[error("missing required input '{field}' and stdin is not a terminal")]
    MissingInput { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_config() {
        let err = FolioError::Config {
            file: PathBuf::from("folio.toml"),
            message: "expected table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in folio.toml: expected table"
        );
    }

    #[test]
    fn test_error_display_missing_input() {
        let err = FolioError::MissingInput { field: "email" };
        assert_eq!(
            err.to_string(),
            "missing required input 'email' and stdin is not a terminal"
        );
    }
}
