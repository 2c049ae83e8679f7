//! Settings file discovery and layered loading

use super::Settings;
use crate::error::Result;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `FSD_CM_ROOT`, `FSD_CM_ENV`.
pub const ENV_PREFIX: &str = "FSD_CM_";

/// Load settings: defaults, then a settings file, then `FSD_CM_*` variables.
///
/// An explicit `settings_path` must exist and parse. Without one, the first
/// known settings file found in `search_dir` is used; if that auto-discovered
/// file is invalid it is skipped with a warning.
pub fn load_settings(search_dir: &Path, settings_path: Option<&Path>) -> Result<Settings> {
    let explicit = settings_path.is_some();
    let file = match settings_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(search_dir),
    };

    let Some(file) = file else {
        return Ok(layered(None)?.extract()?);
    };

    match layered(Some(&file)).and_then(|figment| figment.extract::<Settings>()) {
        Ok(settings) => Ok(settings),
        Err(err) if !explicit => {
            tracing::warn!("Failed to load auto-discovered settings {}: {}", file.display(), err);
            Ok(layered(None)?.extract()?)
        }
        Err(err) => Err(err.into()),
    }
}

fn layered(file: Option<&Path>) -> std::result::Result<Figment, figment::Error> {
    let mut figment = Figment::from(Serialized::defaults(Settings::default()));
    if let Some(file) = file {
        if !file.is_file() {
            return Err(figment::Error::from(format!("Settings file not found: {}", file.display())));
        }
        let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        figment = match ext.as_str() {
            "toml" => figment.merge(Toml::file(file)),
            "yaml" | "yml" => figment.merge(Yaml::file(file)),
            other => {
                return Err(figment::Error::from(format!(
                    "Unsupported settings extension '.{}' for file {}",
                    other,
                    file.display()
                )))
            }
        };
    }
    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

fn discover_settings(search_dir: &Path) -> Option<PathBuf> {
    let candidates = ["flow-config.toml", ".flow-config.toml", "flow-config.yaml", "flow-config.yml"];

    for candidate in candidates {
        let path = search_dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_when_nothing_configured() {
        Jail::expect_with(|jail| {
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.root(), PathBuf::from("/datalakebin/dev/fsd/consumption/conf/"));
            Ok(())
        });
    }

    #[test]
    fn test_discovered_toml_sets_env() {
        Jail::expect_with(|jail| {
            jail.create_file("flow-config.toml", "env = \"prod\"\n")?;
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.env, "prod");
            assert_eq!(settings.root(), PathBuf::from("/datalakebin/prod/fsd/consumption/conf/"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_yaml_root() {
        Jail::expect_with(|jail| {
            jail.create_file("site.yaml", "root: /srv/conf\n")?;
            let path = jail.directory().join("site.yaml");
            let settings = load_settings(jail.directory(), Some(&path)).expect("settings");
            assert_eq!(settings.root(), PathBuf::from("/srv/conf"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("flow-config.toml", "env = \"prod\"\nroot = \"/from/file\"\n")?;
            jail.set_env("FSD_CM_ROOT", "/from/env");
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.env, "prod");
            assert_eq!(settings.root(), PathBuf::from("/from/env"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_invalid_settings_is_error() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "env = [1, 2]\n")?;
            let path = jail.directory().join("bad.toml");
            assert!(load_settings(jail.directory(), Some(&path)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_unsupported_extension_is_error() {
        Jail::expect_with(|jail| {
            jail.create_file("settings.ini", "env = prod\n")?;
            let path = jail.directory().join("settings.ini");
            assert!(load_settings(jail.directory(), Some(&path)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nope.toml");
            assert!(load_settings(jail.directory(), Some(&path)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_auto_discovered_invalid_settings_falls_back() {
        Jail::expect_with(|jail| {
            jail.create_file("flow-config.toml", "env = [1, 2]\n")?;
            let settings = load_settings(jail.directory(), None).expect("should not error on auto-discovery");
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }
}
