//! Error types for startup-time failures
//!
//! Gameplay never fails: crashes and empty tanks are outcomes, not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read, parse or write a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Failure to load a texture asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("texture not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to decode texture {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}
