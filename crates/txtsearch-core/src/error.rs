//! Error types for txtsearch core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while the binary uses `anyhow` for convenient
//! error handling at the top level.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using TxtSearchError
pub type Result<T> = std::result::Result<T, TxtSearchError>;

/// Core error types for txtsearch operations.
///
/// Every variant is terminal for the current invocation: nothing is retried
/// and no partial result is returned alongside an error.
#[derive(Error, Debug)]
pub enum TxtSearchError {
    // === Search Errors ===
    /// The input directory is missing, not a directory, or unreadable
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be opened or failed mid-scan
    #[error("cannot read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A search was requested without any target words
    #[error("at least one search word is required")]
    EmptyWords,

    /// The target words could not be compiled into a matcher
    #[error("invalid search words: {reason}")]
    InvalidPattern { reason: String },

    // === Output Errors ===
    /// The output directory already exists or could not be created
    #[error("cannot create output directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched file could not be copied into the output directory
    #[error(
        "cannot copy {} to {}: {source}",
        source_path.display(),
        dest_path.display()
    )]
    FileCopy {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TxtSearchError {
    /// The path this error refers to, if any.
    ///
    /// For copy failures this is the source file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TxtSearchError::DirectoryRead { path, .. }
            | TxtSearchError::FileRead { path, .. }
            | TxtSearchError::DirectoryCreate { path, .. } => Some(path),
            TxtSearchError::FileCopy { source_path, .. } => Some(source_path),
            _ => None,
        }
    }

    /// Create a directory read error
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TxtSearchError::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TxtSearchError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TxtSearchError::DirectoryCreate {
            path: path.into(),
            source,
        }
    }
}
