//! Cascading merge of loaded namespaces.

use super::loader::Sources;
use crate::domain::{ConfigView, MergedConfig};

/// Merge `sources` into one configuration.
///
/// Namespaces are applied in lexicographic order, so a namespace that sorts
/// later overwrites overlapping keys of one that sorts earlier. Only
/// unqualified sections take part; `SIMPLE` sources land in section `""`.
pub fn stack(sources: &Sources) -> MergedConfig {
    let mut merged = MergedConfig::new();
    for (namespace, source) in sources {
        let before = merged.len();
        merged.extend(source.entries().collect());
        tracing::debug!(
            "Stacked namespace '{}' ({} style, {} new keys)",
            namespace,
            source.style(),
            merged.len() - before
        );
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::NamespaceLoader;
    use crate::store::MemoryStore;

    #[test]
    fn test_later_namespace_wins_regardless_of_request_order() {
        let store = MemoryStore::new("/conf")
            .with_file("A.prm", "[sec]\nk = from-a\nonly_a = 1\n")
            .with_file("B.prm", "[SEC]\nK = from-b\n");
        let loaded = NamespaceLoader::new(&store).load(["B", "A"], true).unwrap();

        let merged = stack(&loaded);
        assert_eq!(merged.get("sec", "k"), Some("from-b"));
        assert_eq!(merged.get("sec", "only_a"), Some("1"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_simple_sources_use_empty_section() {
        let store = MemoryStore::new("/conf").with_file("CM_FSD_BASE.prm", "env = prod\n");
        let loaded = NamespaceLoader::new(&store).load(["CM_FSD_BASE"], true).unwrap();

        let merged = stack(&loaded);
        assert_eq!(merged.get("", "ENV"), Some("prod"));
    }

    #[test]
    fn test_qualified_sections_are_left_out() {
        let store = MemoryStore::new("/conf").with_file("A.prm", "[x]\ny = 1\n[x::flow]\ny = 2\nz = 3\n");
        let loaded = NamespaceLoader::new(&store).load(["A"], true).unwrap();

        let merged = stack(&loaded);
        assert_eq!(merged.get("x", "y"), Some("1"));
        assert!(!merged.contains("x", "z"));
    }

    #[test]
    fn test_empty_sources_give_empty_config() {
        assert!(stack(&Sources::new()).is_empty());
    }
}
