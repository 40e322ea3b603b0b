//! Profile storage lifecycle.
//!
//! Resolves and creates the on-disk profile directory backing the webview's
//! persistent data store. Kept separate from surface construction: storage is
//! fail-fast at startup, with no retry and no degraded mode.

use std::path::{Path, PathBuf};

use common::{ShellError, ShellResult};
use wry::WebContext;

/// Directory name under the platform data dir.
const PROFILE_DIR: &str = "copilot-shell";

/// The data store backing the embedded surface.
pub struct ProfileStorage {
    data_dir: Option<PathBuf>,
}

impl ProfileStorage {
    /// Persistent storage in the platform data directory, or an explicit
    /// override. Creates the directory; any failure aborts startup.
    pub fn persistent(override_dir: Option<PathBuf>) -> ShellResult<Self> {
        let dir = match override_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| ShellError::storage("no platform data directory"))?
                .join(PROFILE_DIR),
        };
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            data_dir: Some(dir),
        })
    }

    /// Ephemeral storage: nothing persists across runs.
    pub fn ephemeral() -> Self {
        Self { data_dir: None }
    }

    /// The profile directory, if persistent.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn is_persistent(&self) -> bool {
        self.data_dir.is_some()
    }

    /// The web context handed to the surface builder.
    pub fn web_context(&self) -> WebContext {
        WebContext::new(self.data_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistent_creates_directory() {
        let dir = std::env::temp_dir().join("copilot-shell-test-profile");
        let _ = std::fs::remove_dir_all(&dir);

        let storage = ProfileStorage::persistent(Some(dir.clone())).unwrap();
        assert!(storage.is_persistent());
        assert_eq!(storage.data_dir(), Some(dir.as_path()));
        assert!(dir.is_dir());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_ephemeral_has_no_directory() {
        let storage = ProfileStorage::ephemeral();
        assert!(!storage.is_persistent());
        assert!(storage.data_dir().is_none());
    }
}
