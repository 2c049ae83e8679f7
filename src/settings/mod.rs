//! Settings for the configuration tool itself
//!
//! Where the configuration root lives, with layered precedence
//! (CLI > Env > File > Defaults).

use crate::store::LocalDirectory;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::load_settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Filesystem environment name used to build the default root
    pub env: String,
    /// Explicit configuration root, overriding the env-derived one
    pub root: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { env: "dev".to_string(), root: None }
    }
}

impl Settings {
    /// Apply command-line overrides.
    pub fn with_overrides(mut self, env: Option<String>, root: Option<PathBuf>) -> Self {
        if let Some(env) = env {
            self.env = env;
        }
        if root.is_some() {
            self.root = root;
        }
        self
    }

    /// Effective configuration root.
    pub fn root(&self) -> PathBuf {
        match &self.root {
            Some(root) => root.clone(),
            None => PathBuf::from(format!("/datalakebin/{}/fsd/consumption/conf/", self.env)),
        }
    }

    pub fn store(&self) -> LocalDirectory {
        LocalDirectory::new(self.root())
    }
}
