//! File-backed [`SessionStorage`]: a single JSON object of key to value.
//!
//! Writes go to a sibling temp file that is then renamed over the target, so
//! a crash mid-write leaves the previous contents intact.
//!
//! Backs a client-side `IdentityStore`; the API server does not persist
//! sessions to disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use onboardpro_core::error::CoreError;
use onboardpro_core::session_storage::SessionStorage;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(CoreError::Internal(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            CoreError::Internal(format!("Corrupt storage file {}: {e}", self.path.display()))
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::Internal(format!("Failed to encode storage: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)
            .and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                CoreError::Internal(format!("Failed to write {}: {e}", self.path.display()))
            })
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        // An unreadable file is replaced rather than blocking new writes.
        let mut entries = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable storage file");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        match self.load() {
            Ok(mut entries) => {
                if entries.remove(key).is_some() {
                    self.save(&entries)?;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable storage file");
                self.save(&BTreeMap::new())
            }
        }
    }
}
