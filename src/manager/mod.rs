//! The `ConfigManager` facade
//!
//! Construction loads the required namespaces, stacks them, and (when a flow
//! is requested) layers the flow's flattened configuration on top. The result
//! is read-only.

use crate::domain::{ConfigView, MergedConfig, SectionKey, SectionView};
use crate::error::{Error, Result};
use crate::resolve::layout::NAMESPACE_MASK;
use crate::resolve::{flatten, flow_id, stack, FlowResolver, NamespaceLoader};
use crate::source::ConfigSource;
use crate::store::{FileEntry, FileStore};
use crate::utils::{parse_bool, parse_list};
use std::collections::BTreeSet;
use std::path::PathBuf;

pub mod render;
pub mod shortcut;

pub use shortcut::{resolve_key, ShortcutKey, ShortcutTarget};

/// How the flow layer of a `ConfigManager` is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowRequest {
    /// An explicit flow ID
    Id(String),
    /// A filename the flow ID is derived from
    Filename(String),
}

/// Builder for [`ConfigManager`].
pub struct ConfigManagerBuilder<S: FileStore> {
    store: S,
    namespaces: Vec<String>,
    flow: Option<FlowRequest>,
}

impl<S: FileStore> ConfigManagerBuilder<S> {
    /// Add one required namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    /// Add several required namespaces.
    pub fn namespaces<I, N>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.namespaces.extend(namespaces.into_iter().map(Into::into));
        self
    }

    /// Scope to an explicit flow ID. A blank ID means no flow.
    pub fn flow(mut self, flow: impl Into<String>) -> Self {
        self.flow = Some(FlowRequest::Id(flow.into()));
        self
    }

    /// Scope to the flow derived from `filename`.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.flow = Some(FlowRequest::Filename(filename.into()));
        self
    }

    pub fn flow_request(mut self, request: Option<FlowRequest>) -> Self {
        self.flow = request;
        self
    }

    /// Load everything. Any required-namespace or flow-resolution failure
    /// aborts construction.
    pub fn load(self) -> Result<ConfigManager<S>> {
        let Self { store, namespaces, flow } = self;
        tracing::debug!(
            "ConfigManager object loading with {} specified namespaces ({})",
            namespaces.len(),
            namespaces.join(",")
        );

        let required = NamespaceLoader::new(&store).load(&namespaces, true)?;
        let mut merged = stack(&required);
        let mut sources: Vec<ConfigSource> = required.into_values().collect();

        let flow_id = match flow {
            Some(FlowRequest::Id(id)) if !id.trim().is_empty() => Some(id.trim().to_uppercase()),
            Some(FlowRequest::Filename(name)) => Some(flow_id(&name)?),
            _ => None,
        };

        if let Some(id) = &flow_id {
            let source = FlowResolver::new(&store).resolve(id)?;
            merged.extend(flatten(&source, id));
            sources.push(source);
        }

        tracing::info!("ConfigManager object loaded {} configurations", sources.len());
        Ok(ConfigManager { store, sources, flow_id, merged })
    }
}

/// Read-only, merged view over one or more configuration namespaces and an
/// optional flow.
pub struct ConfigManager<S: FileStore> {
    store: S,
    sources: Vec<ConfigSource>,
    flow_id: Option<String>,
    merged: MergedConfig,
}

impl<S: FileStore> ConfigManager<S> {
    pub fn builder(store: S) -> ConfigManagerBuilder<S> {
        ConfigManagerBuilder { store, namespaces: Vec::new(), flow: None }
    }

    /// All keys of `section`, or [`Error::MissingKey`] if it has none.
    pub fn section(&self, section: &str) -> Result<SectionView> {
        self.merged.section(section).ok_or_else(|| Error::MissingKey(section.to_string()))
    }

    /// The value at `(section, key)`, or [`Error::MissingKey`].
    pub fn value(&self, section: &str, key: &str) -> Result<&str> {
        self.merged
            .get(section, key)
            .ok_or_else(|| Error::MissingKey(SectionKey::new(section, key).to_string()))
    }

    /// The value at `(section, key)` split as a comma-separated list.
    pub fn list(&self, section: &str, key: &str) -> Result<Vec<String>> {
        self.value(section, key).map(parse_list)
    }

    /// The value at `(section, key)` read as a `TRUE`/other flag.
    pub fn flag(&self, section: &str, key: &str) -> Result<bool> {
        self.value(section, key).map(parse_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionKey, &str)> {
        self.merged.iter()
    }

    /// Sorted, de-duplicated section names.
    pub fn sections(&self) -> Vec<String> {
        self.merged.sections()
    }

    /// Paths of every file that contributed, flow file included.
    pub fn files(&self) -> Vec<PathBuf> {
        let unique: BTreeSet<PathBuf> = self.sources.iter().map(|s| s.path().to_path_buf()).collect();
        unique.into_iter().collect()
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Normalized ID of the flow layer, if one was requested.
    pub fn flow_id(&self) -> Option<&str> {
        self.flow_id.as_deref()
    }

    pub fn config(&self) -> &MergedConfig {
        &self.merged
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mask-matching files directly under the store root.
    pub fn config_files(&self, mask: Option<&str>) -> Result<Vec<FileEntry>> {
        self.store.list(mask.unwrap_or(NAMESPACE_MASK), false)
    }
}

impl<S: FileStore> ConfigView for ConfigManager<S> {
    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.merged.get(section, key)
    }

    fn keys(&self) -> Vec<SectionKey> {
        self.merged.keys()
    }

    fn len(&self) -> usize {
        self.merged.len()
    }
}
