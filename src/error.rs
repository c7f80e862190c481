//! Error handling for MLP Explorer
//!
//! Every failure surfaced by the library carries an error code and, where a
//! caller can act on it, recovery suggestions for the presentation layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Main error type for explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    // Lookup Errors
    #[error("Design key not found: {key}")]
    KeyNotFound { key: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: u32 },

    #[error("Feature not found: {feature}")]
    FeatureNotFound { feature: String },

    // Computation Errors
    #[error("Undefined arithmetic: {reason}")]
    UndefinedArithmetic { reason: String },

    #[error("Invalid topology: {reason}")]
    InvalidTopology { reason: String },

    // Table Errors
    #[error("Invalid {table} table: {reason}")]
    InvalidTable { table: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExplorerError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ExplorerError::KeyNotFound { .. } => "KEY_NOT_FOUND",
            ExplorerError::EventNotFound { .. } => "EVENT_NOT_FOUND",
            ExplorerError::FeatureNotFound { .. } => "FEATURE_NOT_FOUND",
            ExplorerError::UndefinedArithmetic { .. } => "UNDEFINED_ARITHMETIC",
            ExplorerError::InvalidTopology { .. } => "INVALID_TOPOLOGY",
            ExplorerError::InvalidTable { .. } => "INVALID_TABLE",
            ExplorerError::InvalidConfig { .. } => "INVALID_CONFIG",
            ExplorerError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ExplorerError::FileReadError { .. } => "FILE_READ_ERROR",
            ExplorerError::Io(_) => "IO_ERROR",
            ExplorerError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can recover by changing its selection
    ///
    /// Lookup misses and the zero-background boundary are display states
    /// ("N/A", disabled panel); table and file errors are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExplorerError::KeyNotFound { .. }
                | ExplorerError::EventNotFound { .. }
                | ExplorerError::FeatureNotFound { .. }
                | ExplorerError::UndefinedArithmetic { .. }
                | ExplorerError::InvalidTopology { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ExplorerError::KeyNotFound { .. } => vec![
                "Only evaluated network designs can be looked up",
                "Pick hidden layer sizes that were part of the training grid",
            ],
            ExplorerError::EventNotFound { .. } => vec![
                "Select an event from the shortlist",
                "Run 'mlp-explorer-cli events' to list available ids",
            ],
            ExplorerError::FeatureNotFound { .. } => vec![
                "Check the feature name against the scatter table header",
            ],
            ExplorerError::UndefinedArithmetic { .. } => vec![
                "The selection contains no background weight",
                "Lower the cut threshold or enable the background category",
            ],
            ExplorerError::InvalidTopology { .. } => vec![
                "Use 1 to 3 hidden layers",
                "Use 1 to 10 nodes per hidden layer",
            ],
            ExplorerError::FileNotFound { .. } => vec![
                "Check the data directory path",
                "Set 'data_dir' in the configuration file",
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ExplorerError::KeyNotFound {
            key: "(4,)".to_string(),
        };
        assert_eq!(err.error_code(), "KEY_NOT_FOUND");
        assert_eq!(err.to_string(), "Design key not found: (4,)");
    }

    #[test]
    fn test_recovery_suggestions() {
        let err = ExplorerError::UndefinedArithmetic {
            reason: "zero background".to_string(),
        };
        assert!(!err.recovery_suggestions().is_empty());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_table_errors_are_not_recoverable() {
        let err = ExplorerError::InvalidTable {
            table: "probability".to_string(),
            reason: "ragged columns".to_string(),
        };
        assert!(!err.is_recoverable());
        assert!(err.recovery_suggestions().is_empty());
    }
}
