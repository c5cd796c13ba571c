// Error types surfaced to the entry point

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported OS: {0}")]
    UnsupportedOs(String),

    /// A report section the console renderer expects was not collected.
    #[error("Missing key: '{0}'")]
    MissingField(&'static str),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
