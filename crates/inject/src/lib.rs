//! Cosmetic DOM-cleanup script construction.
//!
//! This crate builds the JavaScript payloads the shell pushes into the page:
//! - A hide pass over fixed presentational page regions (headers, footers,
//!   navigation chrome), applied via inline style mutation.
//! - A button finder that tags interactive elements with a marker attribute
//!   and keeps re-tagging them as the page's markup changes.
//!
//! The selector and label lists are immutable configuration built once at
//! startup; the host never consumes a return value from any payload.

pub mod buttons;
pub mod cleanup;

pub use buttons::ButtonFinderConfig;
pub use cleanup::CleanupConfig;
