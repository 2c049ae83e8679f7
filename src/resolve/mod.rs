//! Namespace loading, stacking and flow resolution
//!
//! Pipeline:
//! 1. [`NamespaceLoader`] turns namespace names into parsed sources
//! 2. [`stack`] merges them, later-sorted namespaces winning
//! 3. [`FlowResolver`] finds the dedicated or generic file of a flow
//! 4. [`flatten`] reduces that file to the flow's view

pub mod flow;
pub mod flow_id;
pub mod genconf;
pub mod layout;
pub mod loader;
pub mod stack;

pub use flow::{declares_flow, FlowResolver};
pub use flow_id::flow_id;
pub use genconf::flatten;
pub use loader::{NamespaceLoader, Sources};
pub use stack::stack;
