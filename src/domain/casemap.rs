//! Case-insensitive keyed storage.
//!
//! Keys are folded to lowercase for comparison and ordering. Each entry keeps
//! the casing of its most recent write plus a write sequence number, so callers
//! can report "the casing last written" across different keys.

use std::collections::BTreeMap;
use std::fmt;

/// A key type that can be folded to a canonical case.
pub trait CaseFold: Clone {
    type Folded: Ord + Clone + fmt::Debug;

    fn fold(&self) -> Self::Folded;
}

impl CaseFold for String {
    type Folded = String;

    fn fold(&self) -> String {
        self.to_lowercase()
    }
}

/// A `(section, key)` address into a merged configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub section: String,
    pub key: String,
}

impl SectionKey {
    pub fn new(section: impl Into<String>, key: impl Into<String>) -> Self {
        Self { section: section.into(), key: key.into() }
    }
}

impl CaseFold for SectionKey {
    type Folded = (String, String);

    fn fold(&self) -> (String, String) {
        (self.section.to_lowercase(), self.key.to_lowercase())
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.section, self.key)
    }
}

#[derive(Debug, Clone)]
struct Slot<K, V> {
    key: K,
    value: V,
    seq: u64,
}

/// Map whose keys compare case-insensitively.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveMap<K: CaseFold, V> {
    slots: BTreeMap<K::Folded, Slot<K, V>>,
    next_seq: u64,
}

impl<K: CaseFold, V> Default for CaseInsensitiveMap<K, V> {
    fn default() -> Self {
        Self { slots: BTreeMap::new(), next_seq: 0 }
    }
}

impl<K: CaseFold, V> CaseInsensitiveMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. The stored casing becomes that of `key`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.insert(key.fold(), Slot { key, value, seq }).map(|old| old.value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.slots.get(&key.fold()).map(|slot| &slot.value)
    }

    /// Mutable access to a value. The stored key casing is left untouched.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.slots.get_mut(&key.fold()).map(|slot| &mut slot.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.slots.contains_key(&key.fold())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Entries ordered by folded key, with their original casing.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.values().map(|slot| (&slot.key, &slot.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.slots.values().map(|slot| &slot.key)
    }

    /// Entries with the sequence number of their last write.
    pub(crate) fn iter_with_seq(&self) -> impl Iterator<Item = (&K, &V, u64)> {
        self.slots.values().map(|slot| (&slot.key, &slot.value, slot.seq))
    }
}

impl<V> CaseInsensitiveMap<String, V> {
    /// Lookup by borrowed name.
    pub fn get_str(&self, key: &str) -> Option<&V> {
        self.slots.get(key.to_lowercase().as_str()).map(|slot| &slot.value)
    }

    pub fn contains_str(&self, key: &str) -> bool {
        self.slots.contains_key(key.to_lowercase().as_str())
    }
}

impl<K: CaseFold, V: PartialEq> PartialEq for CaseInsensitiveMap<K, V> {
    /// Equality ignores key casing and write order.
    fn eq(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .all(|(folded, slot)| other.slots.get(folded).is_some_and(|o| o.value == slot.value))
    }
}

impl<K: CaseFold, V> FromIterator<(K, V)> for CaseInsensitiveMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: CaseFold, V> Extend<(K, V)> for CaseInsensitiveMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
