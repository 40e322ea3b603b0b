//! Copilot Shell - a minimal desktop shell for GitHub Copilot.
//!
//! This crate hosts the embedded browser surface and wires it to the policy
//! and injection crates:
//! - Surface configuration and construction
//! - The page-to-host IPC bridge
//! - JavaScript dialog presentation
//! - External-open (default browser) handoff
//! - Profile storage lifecycle

pub mod bridge;
pub mod dialog;
pub mod platform;
pub mod storage;
pub mod surface;

pub use surface::{Surface, SurfaceConfig};

/// The sole top-level address ever loaded directly by the application.
pub const ENTRY_URL: &str = "https://github.com/copilot";

/// Shell version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
