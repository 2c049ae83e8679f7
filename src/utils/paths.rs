//! Path normalization

use std::path::Path;

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Final component of `path` as UTF-8, or an empty string.
pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_converts_backslashes() {
        assert_eq!(normalize_path(r"conf\CM_FSD_A.prm"), "conf/CM_FSD_A.prm");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/conf/CM_FSD_A.prm")), "CM_FSD_A.prm");
        assert_eq!(file_name(Path::new("/")), "");
    }
}
