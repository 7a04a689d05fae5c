// ABOUTME: Error types for the slideas converter
// ABOUTME: Provides structured error handling for parsing, conversion and file bookkeeping

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch remote resource: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unterminated code fence on page {page}, line {line}")]
    UnterminatedFence { page: usize, line: usize },

    #[error("More than one split layout on page {page} (second directive at line {line})")]
    MultipleSplitLayouts { page: usize, line: usize },

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Failed to convert {path}: {source}")]
    DocumentError {
        path: PathBuf,
        #[source]
        source: Box<SlideasError>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl SlideasError {
    /// Wrap an error with the document it happened in.
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        SlideasError::DocumentError {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

// Implement conversion from anyhow::Error to our SlideasError
impl From<anyhow::Error> for SlideasError {
    fn from(err: anyhow::Error) -> Self {
        SlideasError::UnknownError(err.to_string())
    }
}

impl From<glob::PatternError> for SlideasError {
    fn from(err: glob::PatternError) -> Self {
        SlideasError::ConfigError(format!("Invalid glob pattern: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SlideasError>;
