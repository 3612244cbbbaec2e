//! Key-value storage layer for homefront
//!
//! The engagement core persists membership sets under fixed string keys,
//! the same shape browser local storage gives the original website. The
//! trait keeps the surface infallible: a missing or unreadable backend
//! behaves like an empty one, and writes are best-effort.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Flat string-keyed storage the engagement core is injected with.
///
/// Failures never surface to callers. A read that cannot be served
/// returns `None` and a write that cannot be served is dropped, so the
/// core stays total over its inputs.
pub trait KeyValueStore {
    /// Get the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key` and its value.
    fn remove(&mut self, key: &str);
}

/// File-backed store: a single JSON object file under the profile
/// directory, one property per key.
///
/// The file is re-read before every operation so concurrent writers are
/// last-write-wins, matching the accepted cross-tab behavior of the
/// original storage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file unreadable, treating as empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file malformed, treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn save(&self, map: &BTreeMap<String, String>) {
        let raw = match serde_json::to_string_pretty(map) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to serialize store");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create store directory");
                return;
            }
        }

        if let Err(e) = fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), error = %e, "failed to write store file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut map = self.load();
        map.insert(key.to_string(), value.to_string());
        self.save(&map);
        debug!(key, "store write");
    }

    fn remove(&mut self, key: &str) {
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.save(&map);
        }
    }
}

/// In-memory store for tests and embedding without a filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with a stored membership set.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
