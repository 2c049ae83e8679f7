//! Parsed configuration files
//!
//! A `ConfigSource` is one `.prm` file, either flat (`SIMPLE`) or sectioned
//! (`FULL`). Section headers may carry a `::qualifier` naming the flow the
//! section applies to; those are kept verbatim in `headers()`.

use crate::domain::{CaseInsensitiveMap, SectionKey, SectionView};
use crate::error::{Error, Result};
use crate::store::FileStore;
use std::fmt;
use std::path::{Path, PathBuf};

pub mod parser;

pub use parser::parse_source;

/// Delimiter between a section name and its namespace qualifier.
pub const QUALIFIER_SEP: &str = "::";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStyle {
    /// Flat `key = value` pairs, no sections
    Simple,
    /// `[section]` and `[section::qualifier]` blocks
    Full,
}

impl fmt::Display for ParseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStyle::Simple => f.write_str("simple"),
            ParseStyle::Full => f.write_str("full"),
        }
    }
}

/// Split a raw header into its base section name and first qualifier.
///
/// `"x::flow"` gives `("x", Some("flow"))`; anything after a second `::` is
/// ignored.
pub fn split_header(header: &str) -> (&str, Option<&str>) {
    let mut parts = header.split(QUALIFIER_SEP);
    let base = parts.next().unwrap_or("");
    (base, parts.next())
}

/// One parsed configuration file. Immutable once built.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
    style: ParseStyle,
    headers: Vec<String>,
    sections: CaseInsensitiveMap<String, SectionView>,
}

impl ConfigSource {
    /// Read and parse `path` through `store`.
    ///
    /// A missing file is `Ok(None)` unless `must_exist` is set, in which case
    /// it is an I/O error. Parse failures are always errors.
    pub fn load<S: FileStore>(store: &S, path: &Path, must_exist: bool) -> Result<Option<Self>> {
        if !store.exists(path) {
            if must_exist {
                return Err(Error::io(path, std::io::Error::from(std::io::ErrorKind::NotFound)));
            }
            return Ok(None);
        }
        let text = store.read_to_string(path)?;
        parse_source(path, &text).map(Some)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn style(&self) -> ParseStyle {
        self.style
    }

    /// Raw section headers in first-appearance order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Keys of one raw header (e.g. `"x::myflow"`), case-insensitive.
    /// `SIMPLE` sources expose their keys under `""`.
    pub fn section(&self, header: &str) -> Option<&SectionView> {
        self.sections.get_str(header)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get_str(key).map(String::as_str)
    }

    /// Base entries: every key of an unqualified section, or every key under
    /// section `""` for a `SIMPLE` source.
    pub fn entries(&self) -> impl Iterator<Item = (SectionKey, String)> + '_ {
        self.sections
            .iter()
            .filter(|(header, _)| split_header(header).1.is_none())
            .flat_map(|(header, keys)| {
                keys.iter().map(move |(key, value)| (SectionKey::new(header.as_str(), key.as_str()), value.clone()))
            })
    }

    /// Total number of keys across every section, qualified ones included.
    pub fn key_count(&self) -> usize {
        self.sections.iter().map(|(_, keys)| keys.len()).sum()
    }
}
