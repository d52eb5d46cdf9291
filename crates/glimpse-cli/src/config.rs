//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`GLIMPSE_FLUTTER_BIN`)
//! 2. Config file (`--config FILE`, else the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Flutter toolchain settings.
    pub flutter: FlutterConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlutterConfig {
    /// Binary invoked for `pub get` and `run`. A bare name resolves through
    /// PATH; an absolute path pins a specific toolchain.
    pub bin: String,
}

impl Default for FlutterConfig {
    fn default() -> Self {
        Self {
            bin: "flutter".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` file must exist; the default-location
    /// file is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(explicit) => Some(explicit.clone()),
            None => {
                let default = Self::config_path();
                default.exists().then_some(default)
            }
        };

        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(bin) = std::env::var("GLIMPSE_FLUTTER_BIN") {
            if !bin.is_empty() {
                config.flutter.bin = bin;
            }
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.glimpse.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "glimpse", "glimpse")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".glimpse.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flutter_bin() {
        assert_eq!(AppConfig::default().flutter.bin, "flutter");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.flutter.bin, "flutter");
    }

    #[test]
    fn toml_overrides_flutter_bin() {
        let cfg: AppConfig = toml::from_str("[flutter]\nbin = \"/opt/flutter/bin/flutter\"\n").unwrap();
        assert_eq!(cfg.flutter.bin, "/opt/flutter/bin/flutter");
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/config.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "[flutter]\nbin = \"fvm\"\n").unwrap();

        let cfg = AppConfig::load(Some(&file)).unwrap();
        assert_eq!(cfg.flutter.bin, "fvm");
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
