//! Error types for line storage operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::mode::OpenMode;

/// Errors that can occur during line storage operations.
///
/// None of these leave the file partially mutated by the failing call:
/// capability and open-state checks happen before any I/O.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The handle is closed.
    #[error("no file opened for {operation}: {path}")]
    NotOpen {
        path: PathBuf,
        operation: &'static str,
    },

    /// The handle lacks the capability the operation needs.
    #[error("{operation} failed, {path} not opened in {required} mode (opened as {mode})")]
    CapabilityDenied {
        path: PathBuf,
        operation: &'static str,
        required: OpenMode,
        mode: OpenMode,
    },

    /// Failed to open the file.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from the file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy file contents to an output stream.
    #[error("failed to echo {path}: {source}")]
    Echo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the cursor.
    #[error("failed to seek in {path}: {source}")]
    Seek {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns true if the error is a missing open-mode capability.
    pub fn is_capability_denied(&self) -> bool {
        matches!(self, StoreError::CapabilityDenied { .. })
    }

    /// Returns true if the error is an operation on a closed handle.
    pub fn is_not_open(&self) -> bool {
        matches!(self, StoreError::NotOpen { .. })
    }
}

/// Result type alias for line storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
