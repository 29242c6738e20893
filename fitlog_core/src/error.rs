//! Error types for the fitlog_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Import source does not exist
    #[error("File {} not found!", .0.display())]
    FileNotFound(PathBuf),

    /// XML import source is not a well-formed document
    #[error("Error parsing the XML file {}: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// A single imported record could not be turned into an entry
    #[error("record {row}: {reason}")]
    RowParse { row: usize, reason: String },

    /// Operation on a username with no profile in the store
    #[error("No profile for user '{0}'")]
    UnknownProfile(String),
}
