//! Filesystem-backed file store

use super::{mask_matcher, FileEntry, FileStore};
use crate::error::{Error, Result};
use crate::utils::read_text;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A configuration root on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn is_dir(&self) -> bool {
        self.root.is_dir()
    }

    /// Number of regular files directly in the root.
    pub fn file_count(&self) -> Result<usize> {
        Ok(self.list("*", false)?.len())
    }
}

impl FileStore for LocalDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self, mask: &str, recursive: bool) -> Result<Vec<FileEntry>> {
        let matcher = mask_matcher(mask)?;
        let mut walker = WalkDir::new(&self.root).min_depth(1);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                Error::io(path, source)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if matcher.is_match(entry.file_name()) {
                entries.push(FileEntry::new(entry.into_path()));
            }
        }
        entries.sort();

        tracing::debug!(
            "Found {} files matching configuration mask '{}' in '{}'",
            entries.len(),
            mask,
            self.root.display()
        );
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        read_text(path).map_err(|err| Error::io(path, err))
    }
}
