//! Common error types.

use thiserror::Error;

/// Main error type for the shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Surface error: {0}")]
    Surface(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

impl ShellError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}
