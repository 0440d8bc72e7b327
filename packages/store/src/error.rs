//! Error types for storage backends and config loading.
//!
//! State managers never surface these to their callers; they log and fall
//! back to defaults. The errors exist so that backends and
//! [`crate::StateConfig::load`] can be used and tested on their own.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    #[error("local storage error: {0}")]
    Web(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("session and language records share the storage key {0:?}")]
    DuplicateKey(String),
}
