use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these aborts the run with a non-zero exit status.
#[derive(Error, Debug)]
pub enum CardFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory creation failed at {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Catalog validation failed: {details}")]
    CatalogValidation { details: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Download cancelled by user")]
    Cancelled,

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

impl CardFetchError {
    /// The line shown to the operator when the run aborts.
    pub fn fatal_message(&self) -> String {
        match self {
            CardFetchError::Cancelled => self.to_string(),
            other => format!("Fatal error: {other}"),
        }
    }
}

/// Failure of a single entry. Recorded in the batch report, never propagated.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
