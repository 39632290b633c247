//! Error and warning types for flatten operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a whole flatten invocation.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed writing the output document.
    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Traversal failed in a way that is not tied to one file.
    #[error("Walk failed: {message}")]
    Walk { message: String },
}

impl FlattenError {
    /// Create an I/O error with path context, classified by kind.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Why a file was skipped instead of flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipKind {
    /// Permission was denied opening or reading the file.
    PermissionDenied,
    /// The file disappeared between listing and reading.
    Vanished,
    /// Any other error reading the file or walking into a directory.
    ReadError,
}

/// Structured record of one skipped file. Never fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenWarning {
    /// Path where the skip occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Why the file was skipped.
    pub kind: SkipKind,
}

impl FlattenWarning {
    /// Create a new warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: SkipKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Classify a read failure into a warning.
    pub fn read_failure(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        let kind = match error.kind() {
            std::io::ErrorKind::PermissionDenied => SkipKind::PermissionDenied,
            std::io::ErrorKind::NotFound => SkipKind::Vanished,
            _ => SkipKind::ReadError,
        };
        Self {
            message: format!("Read error: {error}"),
            path,
            kind,
        }
    }

    /// The file name portion of the skipped path, for diagnostics.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}
