// crates/server/src/notes.rs
//! File-backed note storage.
//!
//! The frontend keeps free-form annotations per user or repository. The
//! store is an external key-value collaborator with explicit get/set:
//! one JSON file mirror, loaded on startup, rewritten on save, no expiry.
//! Keys follow the composite `note:user:<handle>` /
//! `note:repo:<handle>:<repo>` format.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;

/// Errors from the note store.
#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error("IO error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed note file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value note store mirrored to a JSON file.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl NoteStore {
    /// Open a store, loading existing notes when the file is present.
    /// A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, NoteStoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| NoteStoreError::Malformed {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => {
                return Err(NoteStoreError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Default on-disk location under the user's home directory.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".octolens")
            .join("notes.json")
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("note lock poisoned")
            .get(key)
            .cloned()
    }

    /// Insert or replace a note and rewrite the mirror file.
    pub fn set(&self, key: &str, text: &str) -> Result<(), NoteStoreError> {
        let mut entries = self.entries.write().expect("note lock poisoned");
        entries.insert(key.to_string(), text.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| NoteStoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let raw =
            serde_json::to_string_pretty(&*entries).expect("string map always serializes");
        fs::write(&self.path, raw).map_err(|source| NoteStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Validate the composite key shape: `note:user:<handle>` or
/// `note:repo:<handle>:<repo>`. No segment may be empty.
pub fn valid_key(key: &str) -> bool {
    let mut parts = key.split(':');
    if parts.next() != Some("note") {
        return false;
    }
    match parts.next() {
        Some("user") => {
            matches!(parts.next(), Some(handle) if !handle.is_empty()) && parts.next().is_none()
        }
        Some("repo") => {
            let handle_ok = matches!(parts.next(), Some(h) if !h.is_empty());
            let repo_ok = matches!(parts.next(), Some(r) if !r.is_empty());
            handle_ok && repo_ok && parts.next().is_none()
        }
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_keys() {
        assert!(valid_key("note:user:octocat"));
        assert!(valid_key("note:repo:octocat:hello-world"));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!valid_key(""));
        assert!(!valid_key("note"));
        assert!(!valid_key("note:user:"));
        assert!(!valid_key("note:repo:octocat"));
        assert!(!valid_key("note:repo:octocat:"));
        assert!(!valid_key("note:user:octocat:extra"));
        assert!(!valid_key("memo:user:octocat"));
        assert!(!valid_key("note:team:octocat"));
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::open(dir.path().join("notes.json")).unwrap();
        assert_eq!(store.get("note:user:octocat"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::open(dir.path().join("notes.json")).unwrap();
        store.set("note:user:octocat", "great avatars").unwrap();
        assert_eq!(
            store.get("note:user:octocat").as_deref(),
            Some("great avatars")
        );
    }

    #[test]
    fn test_notes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let store = NoteStore::open(&path).unwrap();
        store.set("note:repo:octocat:hello-world", "check the CI setup").unwrap();
        drop(store);

        let reopened = NoteStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("note:repo:octocat:hello-world").as_deref(),
            Some("check the CI setup")
        );
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::open(dir.path().join("notes.json")).unwrap();
        store.set("note:user:octocat", "v1").unwrap();
        store.set("note:user:octocat", "v2").unwrap();
        assert_eq!(store.get("note:user:octocat").as_deref(), Some("v2"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = NoteStore::open(&path).unwrap_err();
        assert!(matches!(err, NoteStoreError::Malformed { .. }));
    }
}
