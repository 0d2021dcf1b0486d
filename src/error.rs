//! Error handling for SWPC feed processing.
//!
//! Provides error types with enough context (data line numbers, offending
//! text, column names) to locate a problem in the source file. Parse
//! failures are deterministic and are never retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwpcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("file does not begin with a recognizable bulletin header")]
    MalformedHeader,

    #[error("record parse failed at data line {line}: {reason}\n{text}")]
    RecordParse {
        line: usize,
        reason: String,
        text: String,
    },

    #[error("requested column '{name}' not present in file header")]
    UnknownColumn { name: String },

    #[error("data row {line} has {found} fields but column '{column}' is at index {index}")]
    TruncatedRow {
        line: usize,
        column: String,
        index: usize,
        found: usize,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl SwpcError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SwpcError>;
