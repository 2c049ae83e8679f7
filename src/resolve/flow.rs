//! Flow ID to configuration source resolution.

use super::layout::{flow_namespace, GENERIC_MASK};
use super::loader::NamespaceLoader;
use crate::error::{Error, Result};
use crate::source::ConfigSource;
use crate::store::FileStore;

/// Section and key of a generic file's flow membership list.
pub const FLOW_SETUP_SECTION: &str = "flow_setup";
pub const FOR_FLOWS_KEY: &str = "for_flows";

pub struct FlowResolver<'a, S: FileStore> {
    store: &'a S,
}

impl<'a, S: FileStore> FlowResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Find the one source responsible for `flow_id`.
    ///
    /// A dedicated `CM_FSD_FLOW_<FLOWID>.prm` always wins. Otherwise exactly
    /// one generic file must list the flow in `flow_setup.for_flows`; none is
    /// [`Error::FlowNotFound`] and several is [`Error::AmbiguousFlow`].
    pub fn resolve(&self, flow_id: &str) -> Result<ConfigSource> {
        let flow_id = flow_id.to_uppercase();
        let namespace = flow_namespace(&flow_id);
        tracing::debug!("Rewrote flow_id '{}' as conforming namespace '{}'", flow_id, namespace);

        let dedicated = NamespaceLoader::new(self.store).load([namespace.as_str()], false)?;
        if let Some(source) = dedicated.into_values().next() {
            tracing::debug!(
                "Found configuration file '{}' for handling flow_id '{}'",
                source.path().display(),
                flow_id
            );
            return Ok(source);
        }

        let mut matches: Vec<ConfigSource> =
            self.generic_candidates()?.filter(|source| declares_flow(source, &flow_id)).collect();

        match matches.len() {
            1 => {
                let source = matches.remove(0);
                tracing::info!(
                    "Genconf file '{}' provides configuration for flow ID '{}'",
                    source.path().display(),
                    flow_id
                );
                Ok(source)
            }
            0 => {
                let err = Error::FlowNotFound { flow: flow_id };
                tracing::error!("{}", err);
                Err(err)
            }
            _ => {
                let paths = matches.iter().map(|source| source.path().to_path_buf()).collect();
                let err = Error::AmbiguousFlow { flow: flow_id, paths };
                tracing::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Generic files that parse, in path order. Files that fail to load are
    /// logged and skipped as the iterator reaches them.
    pub fn generic_candidates(&self) -> Result<impl Iterator<Item = ConfigSource> + 'a> {
        let store = self.store;
        let files = store.list(GENERIC_MASK, false)?;
        Ok(files.into_iter().filter_map(move |file| match ConfigSource::load(store, &file.path, true) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!("Failed parsing presumed CM file at location '{}'", file.path.display());
                tracing::warn!("Parsing failed with exception {}", err);
                None
            }
        }))
    }
}

/// Whether `source` lists `flow_id` in its `flow_setup.for_flows` value.
pub fn declares_flow(source: &ConfigSource, flow_id: &str) -> bool {
    source
        .get(FLOW_SETUP_SECTION, FOR_FLOWS_KEY)
        .unwrap_or("")
        .split(',')
        .any(|name| name.trim().eq_ignore_ascii_case(flow_id))
}
