//! Error types for configuration and persistence.
//!
//! Everything that reaches the user is turned into a reply by the list
//! service; only these two families may stop the process at startup.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("bot token is not set (expected BOT_TOKEN or TELOXIDE_TOKEN)")]
    MissingToken,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read list store at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("list store at {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write list store at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("list database error")]
    Database(#[from] sqlx::Error),
}
