//! Error types for scraping and exporting.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a scrape before any record is extracted.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP client could not be built
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed or timed out
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK
    #[error("status code error: {status}")]
    Status { status: reqwest::StatusCode },

    /// CSS selector parsing failed
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

impl ScrapeError {
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }
}

/// Failures while producing a single export file.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unknown format: {0}")]
    UnrecognizedFormat(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
