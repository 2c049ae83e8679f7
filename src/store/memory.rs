//! In-memory file store

use super::{mask_matcher, FileEntry, FileStore};
use crate::error::{Error, Result};
use crate::utils::{file_name, normalize_path};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// File store holding configuration text in memory.
///
/// Paths are keyed in normalized (forward-slash) form. Files added with a
/// relative path are placed under the root.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    root: PathBuf,
    files: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), files: BTreeMap::new() }
    }

    /// Builder-style [`MemoryStore::insert`].
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let full = self.root.join(path);
        self.files.insert(key_for(&full), contents.into());
    }
}

fn key_for(path: &Path) -> String {
    normalize_path(&path.to_string_lossy())
}

impl FileStore for MemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self, mask: &str, recursive: bool) -> Result<Vec<FileEntry>> {
        let matcher = mask_matcher(mask)?;
        let root = key_for(&self.root);
        let prefix = format!("{}/", root.trim_end_matches('/'));

        let entries = self
            .files
            .keys()
            .filter_map(|key| {
                let rest = key.strip_prefix(&prefix)?;
                if !recursive && rest.contains('/') {
                    return None;
                }
                let path = PathBuf::from(key);
                let matched = matcher.is_match(file_name(&path));
                matched.then(|| FileEntry::new(path))
            })
            .collect();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&key_for(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(&key_for(path))
            .cloned()
            .ok_or_else(|| Error::io(path, io::Error::from(io::ErrorKind::NotFound)))
    }
}
