//! File naming conventions under a configuration root.

use std::path::{Path, PathBuf};

/// Extension of every configuration file.
pub const CONF_EXTENSION: &str = "prm";

/// Every configuration file.
pub const NAMESPACE_MASK: &str = "CM_FSD_*.prm";

/// Files dedicated to one flow: `CM_FSD_FLOW_<FLOWID>.prm`.
pub const FLOW_MASK: &str = "CM_FSD_FLOW_*.prm";

/// Generic files serving several flows.
pub const GENERIC_MASK: &str = "CM_FSD_FLOW_GEN_*.prm";

/// `<root>/<NAMESPACE>.prm`, namespace upper-cased.
pub fn namespace_path(root: &Path, namespace: &str) -> PathBuf {
    root.join(format!("{}.{}", namespace.to_uppercase(), CONF_EXTENSION))
}

/// Namespace of the file dedicated to `flow_id`.
pub fn flow_namespace(flow_id: &str) -> String {
    FLOW_MASK.replace('*', &flow_id.to_uppercase()).trim_end_matches(".prm").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_path_uppercases() {
        assert_eq!(namespace_path(Path::new("/conf"), "cm_fsd_base"), PathBuf::from("/conf/CM_FSD_BASE.prm"));
    }

    #[test]
    fn test_flow_namespace() {
        assert_eq!(flow_namespace("myflow"), "CM_FSD_FLOW_MYFLOW");
    }
}
