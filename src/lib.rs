//! flow-config: resolution of namespace-partitioned pipeline configuration
//!
//! Configuration lives in a single root directory of `.prm` files, one per
//! namespace. A [`ConfigManager`] loads a set of namespaces, stacks them in
//! name order, and can layer the configuration of one data flow on top,
//! either from a dedicated flow file or from the single generic file that
//! declares the flow in its `flow_setup` section.
//!
//! ```no_run
//! use flow_config::{ConfigManager, LocalDirectory};
//!
//! # fn main() -> flow_config::Result<()> {
//! let cm = ConfigManager::builder(LocalDirectory::new("/srv/conf"))
//!     .namespace("CM_FSD_BASE")
//!     .filename("/landing/sales_20240101.csv")
//!     .load()?;
//! println!("{}", cm.value("load", "mode")?);
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod manager;
pub mod resolve;
pub mod settings;
pub mod source;
pub mod store;
pub mod utils;

pub use domain::{ConfigView, MergedConfig, SectionKey};
pub use error::{Error, Result};
pub use manager::{resolve_key, ConfigManager, ConfigManagerBuilder, FlowRequest, ShortcutKey};
pub use resolve::flow_id;
pub use settings::{load_settings, Settings};
pub use source::{ConfigSource, ParseStyle};
pub use store::{FileStore, LocalDirectory, MemoryStore};
