//! Crate-wide error type.
//!
//! Per-file problems (unreadable tags, colliding destinations, folders that
//! cannot be removed) are recorded in the `IssueLog` instead of being
//! returned; only failures that stop a whole step end up here.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tag(#[from] TagError),

    /// Settings that loaded but cannot be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured noise term produced an invalid pattern.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to serialize issue log: {0}")]
    Log(#[from] serde_json::Error),

    #[error("Library root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Failed to read tags from {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("Failed to write tags to {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}
