//! Core data types: case-insensitive maps and merged configurations

pub mod casemap;
pub mod merged;

pub use casemap::{CaseFold, CaseInsensitiveMap, SectionKey};
pub use merged::{ConfigView, MergedConfig, SectionView};
