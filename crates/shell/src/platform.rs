//! External-open handoff to the operating system.

use std::process::Command;
use tracing::{debug, warn};

/// Hands a URL to the OS default handler. No return value is consumed.
pub trait ExternalOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Opens URLs with the platform's default-handler command.
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) {
        debug!("External open: {}", url);
        if let Err(err) = spawn_default_handler(url) {
            warn!("External open failed for {}: {}", url, err);
        }
    }
}

#[cfg(target_os = "macos")]
fn spawn_default_handler(url: &str) -> std::io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn spawn_default_handler(url: &str) -> std::io::Result<()> {
    Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn spawn_default_handler(url: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}
