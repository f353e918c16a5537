//! Error types for input parsing, configuration and report output

use thiserror::Error;

/// Failure to turn a text field into a usable number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Field was empty or whitespace
    #[error("{field} is missing")]
    Missing { field: &'static str },

    /// Text could not be parsed as a number
    #[error("{field} is not a number: {text:?}")]
    NotANumber { field: &'static str, text: String },

    /// Parsed, but NaN or infinite
    #[error("{field} is not finite: {text:?}")]
    NonFinite { field: &'static str, text: String },
}

/// Failure while writing a rendered projection
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while loading calculator settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
