use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests, transforms, or emits data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the CSV reader and writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when an importer is run before the matching exporter has
    /// produced its CSV file.
    #[error("required CSV file not found: {} (run `foodswap-tools {}` first)", .path.display(), .producer)]
    MissingCsv {
        path: PathBuf,
        producer: &'static str,
    },

    /// Raised when a swap references a food id absent from the store.
    #[error("swap references unknown food id '{0}'")]
    MissingTarget(String),

    /// Raised when numeric parsing fails when rebuilding typed values.
    #[error("invalid literal value '{value}' in column {column}")]
    InvalidLiteral { column: String, value: String },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
