//! `cm:` shortcut keys.
//!
//! ```text
//! cm:flow:<flowid>:<section>:<key>
//! cm:filename:<name>:<section>:<key>
//! cm:<namespace>:<section>:<key>
//! ```
//!
//! Keys are case-insensitive. Section and key are always the last two
//! segments.

use super::{ConfigManager, FlowRequest};
use crate::error::{Error, Result};
use crate::store::FileStore;
use std::str::FromStr;

const TAG: &str = "cm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutTarget {
    Flow(String),
    Filename(String),
    Namespace(String),
}

/// A parsed shortcut key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutKey {
    pub target: ShortcutTarget,
    pub section: String,
    pub key: String,
}

impl FromStr for ShortcutKey {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedKey { key: raw.to_string(), reason: reason.to_string() };

        let lowered = raw.to_lowercase();
        let parts: Vec<&str> = lowered.split(':').collect();
        tracing::debug!("Processing CM shortcut key as [{}]", parts.join(", "));

        if parts[0] != TAG {
            return Err(malformed("missing leading 'cm' tag"));
        }
        let Some(&directive) = parts.get(1) else {
            return Err(malformed("missing namespace or directive"));
        };

        let (target, rest) = match directive {
            "flow" | "filename" => {
                let Some(&value) = parts.get(2) else {
                    return Err(malformed("missing directive value"));
                };
                let target = if directive == "flow" {
                    ShortcutTarget::Flow(value.to_uppercase())
                } else {
                    ShortcutTarget::Filename(value.to_string())
                };
                (target, &parts[3..])
            }
            namespace => (ShortcutTarget::Namespace(namespace.to_string()), &parts[2..]),
        };

        let [.., section, key] = rest else {
            return Err(malformed("expected trailing <section>:<key>"));
        };
        Ok(Self { target, section: section.to_string(), key: key.to_string() })
    }
}

impl ShortcutKey {
    /// Build the `ConfigManager` this key addresses.
    pub fn manager<S: FileStore>(&self, store: S) -> Result<ConfigManager<S>> {
        let builder = ConfigManager::builder(store);
        match &self.target {
            ShortcutTarget::Flow(flow) => {
                tracing::debug!("Key specifies flow ID '{}'", flow);
                builder.flow_request(Some(FlowRequest::Id(flow.clone()))).load()
            }
            ShortcutTarget::Filename(name) => {
                tracing::debug!("Key specifies file '{}'", name);
                builder.filename(name.clone()).load()
            }
            ShortcutTarget::Namespace(namespace) => {
                tracing::debug!("Loading CM object '{}' directly (namespace processing will be BYPASSED)", namespace);
                builder.namespace(namespace.clone()).load()
            }
        }
    }

    /// Look the key up against `store`.
    pub fn resolve<S: FileStore>(&self, store: S) -> Result<String> {
        let cm = self.manager(store)?;
        cm.value(&self.section, &self.key).map(str::to_string)
    }
}

/// Parse and resolve a shortcut key in one step.
pub fn resolve_key<S: FileStore>(store: S, key: &str) -> Result<String> {
    key.parse::<ShortcutKey>()?.resolve(store)
}
