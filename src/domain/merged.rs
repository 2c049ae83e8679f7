//! The merged `(section, key) -> value` configuration.

use super::casemap::{CaseInsensitiveMap, SectionKey};
use std::collections::BTreeMap;

/// Read-only mapping interface shared by merged configurations and the
/// `ConfigManager` facade.
pub trait ConfigView {
    fn get(&self, section: &str, key: &str) -> Option<&str>;

    /// All `(section, key)` addresses, ordered case-insensitively.
    fn keys(&self) -> Vec<SectionKey>;

    fn len(&self) -> usize;

    fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keys of one section, case-insensitive.
pub type SectionView = CaseInsensitiveMap<String, String>;

/// Flat, case-insensitive configuration produced by stacking sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedConfig {
    entries: CaseInsensitiveMap<SectionKey, String>,
}

impl MergedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.entries.insert(SectionKey::new(section, key), value.into());
    }

    /// Layer `other` on top of `self`; `other` wins on every collision.
    pub fn extend(&mut self, other: MergedConfig) {
        let mut layered: Vec<_> = other.entries.iter_with_seq().collect();
        layered.sort_by_key(|(_, _, seq)| *seq);
        for (key, value, _) in layered {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Sub-mapping for one section, `None` when the section has no entries.
    pub fn section(&self, section: &str) -> Option<SectionView> {
        let wanted = section.to_lowercase();
        let view: SectionView = self
            .entries
            .iter()
            .filter(|(k, _)| k.section.to_lowercase() == wanted)
            .map(|(k, v)| (k.key.clone(), v.clone()))
            .collect();
        (!view.is_empty()).then_some(view)
    }

    /// Sorted section names, de-duplicated case-insensitively. The casing
    /// reported for a section is the one used by its most recent write.
    pub fn sections(&self) -> Vec<String> {
        let mut latest: BTreeMap<String, (u64, &str)> = BTreeMap::new();
        for (key, _, seq) in self.entries.iter_with_seq() {
            let slot = latest.entry(key.section.to_lowercase()).or_insert((seq, key.section.as_str()));
            if seq >= slot.0 {
                *slot = (seq, key.section.as_str());
            }
        }
        latest.into_values().map(|(_, name)| name.to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl ConfigView for MergedConfig {
    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.entries.get(&SectionKey::new(section, key)).map(String::as_str)
    }

    fn keys(&self) -> Vec<SectionKey> {
        self.entries.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(SectionKey, String)> for MergedConfig {
    fn from_iter<I: IntoIterator<Item = (SectionKey, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
