//! Error types for the file adapters and JSON entry points.
//!
//! Queries and rendering never fail; only reading, parsing, and writing can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, parsing, or saving a value tree.
#[derive(Error, Debug)]
pub enum HjsonxError {
    /// The input was not valid JSON, or a value could not be converted
    /// into a `serde_json::Value`.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input was not valid Hjson text.
    #[error("Hjson parse error: {0}")]
    HjsonParse(#[from] deser_hjson::Error),

    /// Reading or writing a file (or creating its directory) failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file bytes were not valid in the encoding its byte-order mark declared.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Convenience alias used throughout hjsonx-core.
pub type Result<T> = std::result::Result<T, HjsonxError>;
