//! Integration tests for resolution against a real configuration root

use flow_config::{resolve_key, ConfigManager, ConfigView, Error, LocalDirectory};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn conf_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "CM_FSD_BASE.prm", "[db]\nhost = base-host\nport = 5432\n[load]\nmode = append\n");
    write(dir.path(), "CM_FSD_SITE.prm", "[DB]\nHOST = site-host\n");
    write(
        dir.path(),
        "CM_FSD_FLOW_GEN_RETAIL.prm",
        "[flow_setup]\nfor_flows = SALES, RETURNS\n[load]\nmode = merge\n[load::returns]\nmode = replace\n",
    );
    write(
        dir.path(),
        "CM_FSD_FLOW_GEN_FINANCE.prm",
        "[flow_setup]\nfor_flows = LEDGER\n[load]\nmode = merge\n",
    );
    dir
}

#[test]
fn test_repeated_loads_are_identical() {
    let dir = conf_root();
    let load = || {
        ConfigManager::builder(LocalDirectory::new(dir.path()))
            .namespaces(["CM_FSD_SITE", "CM_FSD_BASE"])
            .flow("returns")
            .load()
            .unwrap()
    };
    let (first, second) = (load(), load());
    assert_eq!(first.config(), second.config());
    assert_eq!(first.files(), second.files());
}

#[test]
fn test_later_namespace_wins_case_insensitively() {
    let dir = conf_root();
    let cm = ConfigManager::builder(LocalDirectory::new(dir.path()))
        .namespaces(["cm_fsd_site", "cm_fsd_base"])
        .load()
        .unwrap();
    assert_eq!(cm.value("db", "host").unwrap(), "site-host");
    assert_eq!(cm.value("Db", "Port").unwrap(), "5432");
}

#[test]
fn test_dedicated_file_beats_generic() {
    let dir = conf_root();
    write(dir.path(), "CM_FSD_FLOW_SALES.prm", "[load]\nmode = overwrite\n");
    let cm = ConfigManager::builder(LocalDirectory::new(dir.path())).flow("SALES").load().unwrap();
    assert_eq!(cm.value("load", "mode").unwrap(), "overwrite");
    assert_eq!(cm.files(), vec![dir.path().join("CM_FSD_FLOW_SALES.prm")]);
}

#[test]
fn test_generic_flow_qualified_override() {
    let dir = conf_root();
    let store = LocalDirectory::new(dir.path());
    assert_eq!(resolve_key(&store, "cm:flow:returns:load:mode").unwrap(), "replace");
    assert_eq!(resolve_key(&store, "cm:flow:sales:load:mode").unwrap(), "merge");
}

#[test]
fn test_flow_declared_twice_is_ambiguous() {
    let dir = conf_root();
    write(dir.path(), "CM_FSD_FLOW_GEN_OTHER.prm", "[flow_setup]\nfor_flows = ledger\n");
    let err = ConfigManager::builder(LocalDirectory::new(dir.path())).flow("LEDGER").load().err().unwrap();
    match err {
        Error::AmbiguousFlow { flow, paths } => {
            assert_eq!(flow, "LEDGER");
            assert_eq!(paths.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_undeclared_flow_is_not_found() {
    let dir = conf_root();
    let err = ConfigManager::builder(LocalDirectory::new(dir.path())).flow("PAYROLL").load().err().unwrap();
    assert!(matches!(err, Error::FlowNotFound { .. }));
}

#[test]
fn test_iteration_matches_lookup() {
    let dir = conf_root();
    let cm = ConfigManager::builder(LocalDirectory::new(dir.path()))
        .namespace("CM_FSD_BASE")
        .filename("/landing/sales_20240101.csv")
        .load()
        .unwrap();
    assert_eq!(cm.flow_id(), Some("SALES"));
    assert_eq!(cm.keys().len(), cm.len());
    for (key, value) in cm.iter() {
        assert_eq!(cm.get(&key.section, &key.key), Some(value));
    }
}

#[test]
fn test_config_files_lists_masked_files() {
    let dir = conf_root();
    write(dir.path(), "README.txt", "ignored\n");
    let cm = ConfigManager::builder(LocalDirectory::new(dir.path())).load().unwrap();
    let names: Vec<String> = cm
        .config_files(None)
        .unwrap()
        .into_iter()
        .map(|entry| entry.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["CM_FSD_BASE.prm", "CM_FSD_FLOW_GEN_FINANCE.prm", "CM_FSD_FLOW_GEN_RETAIL.prm", "CM_FSD_SITE.prm"]
    );
}
