//! Error types for the dcmeta library

use std::path::PathBuf;
use thiserror::Error;

use crate::compat::IncompatibleHost;

/// Result type alias for dcmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the dcmeta library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse stored settings: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Host Errors
    // -------------------------------------------------------------------------
    /// The host platform is older than this plugin supports. Fatal to the
    /// current admin request; the plugin has already been deactivated when
    /// this is returned.
    #[error(transparent)]
    IncompatibleHost(#[from] IncompatibleHost),

    #[error("Unparseable host version '{value}': {source}")]
    InvalidVersion {
        value: String,
        #[source]
        source: semver::Error,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this error is fatal to the current admin request
    ///
    /// Only the version-incompatibility gate produces fatal errors; everything
    /// else is recoverable by the embedding host.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::IncompatibleHost(_))
    }
}
