//! Common types shared across the shell.

pub mod error;

pub use error::{ShellError, ShellResult};
