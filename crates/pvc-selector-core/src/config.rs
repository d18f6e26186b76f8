use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the XDG config/state homes.
pub const APP_NAME: &str = "pvc-remove-selector";

/// Process configuration loaded from `~/.config/pvc-remove-selector/config.toml`.
///
/// Only ambient behaviour (logging, output formatting) is configurable; the
/// transform and its resource filter are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Tracing filter used when `RUST_LOG` is unset (e.g. "info,pvc_selector_core=debug").
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Write logs to the XDG state dir instead of stderr.
    #[serde(default = "default_true")]
    pub log_to_file: bool,
    /// Pretty-print JSON written to stdout.
    #[serde(default = "default_true")]
    pub pretty_output: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            log_to_file: true,
            pretty_output: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.get_config_home().join(APP_NAME).join("config.toml"))
}

/// Load configuration from the default path; a missing file yields defaults.
pub fn load_or_default() -> Result<PluginConfig> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<PluginConfig> {
    if !path.exists() {
        return Ok(PluginConfig::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PluginConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = PluginConfig::default();
        assert!(cfg.log_filter.is_none());
        assert!(cfg.log_to_file);
        assert!(cfg.pretty_output);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: PluginConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PluginConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            log_filter = "debug"
            log_to_file = false
            pretty_output = false
        "#;
        let cfg: PluginConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
        assert!(!cfg.log_to_file);
        assert!(!cfg.pretty_output);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PluginConfig {
            log_filter: Some("warn".into()),
            ..PluginConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PluginConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, PluginConfig::default());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"log_to_file = false\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert!(!cfg.log_to_file);
        assert!(cfg.pretty_output);
    }

    #[test]
    fn load_from_bad_toml_errors() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"log_to_file = \"maybe\"\n").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
