//! Errors raised while loading payout files

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON payout table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported payout file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to list payout files: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
