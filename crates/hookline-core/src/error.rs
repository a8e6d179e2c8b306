//! Error types for hookline-core.

use std::path::PathBuf;

/// The sanitized payload could not be read as a message.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload is JSON but not an object")]
    NotAnObject,
}

/// A sink could not accept an event.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to serialize event {id}: {source}")]
    Serialize {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sink lock poisoned by a panicked writer")]
    Poisoned,
    #[error("sink rejected event: {0}")]
    Rejected(String),
}

/// Configuration could not be loaded or is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("auth.token_sha256 is not set")]
    MissingTokenDigest,
    #[error("auth.token_sha256 must be a 64-digit hex SHA-256 digest")]
    InvalidTokenDigest,
}
