//! File storage abstraction for configuration roots
//!
//! The resolution engine only needs to list mask-matching files in a root
//! directory and read them as text. `LocalDirectory` does this against the
//! filesystem, `MemoryStore` against an in-memory table.

use crate::error::Result;
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};

pub mod local;
pub mod memory;

pub use local::LocalDirectory;
pub use memory::MemoryStore;

/// A file found by [`FileStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileEntry {
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub trait FileStore {
    /// Directory that namespace paths are built under.
    fn root(&self) -> &Path;

    /// Files whose name matches `mask`, ordered by path.
    ///
    /// Only the root itself is searched unless `recursive` is set.
    fn list(&self, mask: &str, recursive: bool) -> Result<Vec<FileEntry>>;

    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;
}

impl<S: FileStore + ?Sized> FileStore for &S {
    fn root(&self) -> &Path {
        (**self).root()
    }

    fn list(&self, mask: &str, recursive: bool) -> Result<Vec<FileEntry>> {
        (**self).list(mask, recursive)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }
}

/// Compile an fnmatch-style mask that is matched against file names only.
pub(crate) fn mask_matcher(mask: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(mask)?.compile_matcher())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_matches_file_names() {
        let matcher = mask_matcher("CM_FSD_FLOW_GEN_*.prm").unwrap();
        assert!(matcher.is_match("CM_FSD_FLOW_GEN_SALES.prm"));
        assert!(!matcher.is_match("CM_FSD_FLOW_SALES.prm"));
        assert!(!matcher.is_match("cm_fsd_flow_gen_sales.prm"));
    }

    #[test]
    fn invalid_mask_is_an_error() {
        assert!(matches!(mask_matcher("CM_[.prm"), Err(crate::Error::Glob(_))));
    }
}
