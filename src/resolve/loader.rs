//! Namespace loading with required/optional semantics.

use super::layout::namespace_path;
use crate::error::{Error, Result};
use crate::source::ConfigSource;
use crate::store::FileStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Loaded sources keyed by upper-cased namespace. Iteration order is the
/// stacking order.
pub type Sources = BTreeMap<String, ConfigSource>;

pub struct NamespaceLoader<'a, S: FileStore> {
    store: &'a S,
}

impl<'a, S: FileStore> NamespaceLoader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Path of the file backing `namespace`.
    pub fn path_for(&self, namespace: &str) -> PathBuf {
        namespace_path(self.store.root(), namespace)
    }

    /// Load every namespace in `namespaces`.
    ///
    /// With `required`, any namespace that is missing or fails to parse aborts
    /// the whole load with [`Error::NotFound`]. Otherwise such namespaces are
    /// skipped.
    pub fn load<I, N>(&self, namespaces: I, required: bool) -> Result<Sources>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut loaded = Sources::new();
        for namespace in namespaces {
            let namespace = namespace.as_ref().to_uppercase();
            let path = self.path_for(&namespace);

            match ConfigSource::load(self.store, &path, required) {
                Ok(Some(source)) => {
                    tracing::debug!("Loaded namespace '{}' from '{}'", namespace, path.display());
                    loaded.insert(namespace, source);
                }
                outcome => {
                    if required {
                        if let Err(cause) = &outcome {
                            tracing::debug!("Load of '{}' failed: {}", path.display(), cause);
                        }
                        let err = Error::NotFound { namespace, path };
                        tracing::error!("{}", err);
                        return Err(err);
                    }
                    match outcome {
                        Err(cause) => tracing::info!(
                            "Configuration file for namespace '{}' could not be loaded from '{}': {}",
                            namespace,
                            path.display(),
                            cause
                        ),
                        _ => tracing::info!(
                            "Configuration file for namespace '{}' not found at path '{}'",
                            namespace,
                            path.display()
                        ),
                    }
                }
            }
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store() -> MemoryStore {
        MemoryStore::new("/conf")
            .with_file("CM_FSD_A.prm", "k = a")
            .with_file("CM_FSD_B.prm", "[s]\nk = b\n")
            .with_file("CM_FSD_BROKEN.prm", "[s]\nnot a pair\n")
    }

    #[test]
    fn test_load_uppercases_namespaces() {
        let store = store();
        let loaded = NamespaceLoader::new(&store).load(["cm_fsd_a", "CM_FSD_B"], true).unwrap();
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["CM_FSD_A", "CM_FSD_B"]);
    }

    #[test]
    fn test_required_missing_fails_whole_load() {
        let store = store();
        let err = NamespaceLoader::new(&store).load(["CM_FSD_A", "CM_FSD_MISSING"], true).unwrap_err();
        match err {
            Error::NotFound { namespace, path } => {
                assert_eq!(namespace, "CM_FSD_MISSING");
                assert_eq!(path, PathBuf::from("/conf/CM_FSD_MISSING.prm"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_required_unparseable_is_not_found() {
        let store = store();
        let err = NamespaceLoader::new(&store).load(["CM_FSD_BROKEN"], true).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_optional_skips_missing_and_broken() {
        let store = store();
        let loaded =
            NamespaceLoader::new(&store).load(["CM_FSD_MISSING", "CM_FSD_BROKEN", "CM_FSD_A"], false).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("CM_FSD_A"));
    }

    #[test]
    fn test_empty_request_loads_nothing() {
        let store = store();
        let loaded = NamespaceLoader::new(&store).load(Vec::<String>::new(), true).unwrap();
        assert!(loaded.is_empty());
    }
}
