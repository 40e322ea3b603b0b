//! Navigation and content policy.
//!
//! This crate implements the shell's policy decisions:
//! - Link-activation routing (in-app vs. external browser)
//! - New-window request handling
//! - JavaScript dialog semantics
//!
//! All decisions are stateless: each is a pure function of the event and the
//! immutable configuration built at startup.

pub mod dialog;
pub mod navigation;

pub use dialog::{confirm_result, ConfirmChoice, DialogKind, DialogRequest};
pub use navigation::{NavigationDecision, NavigationKind, NewWindowDecision, PolicyConfig};
