//! Configuration loading for the hermes CLI.
//!
//! Configuration is layered, lowest priority first:
//!
//! 1. `~/.config/hermes/config.toml` (missing file is fine)
//! 2. Environment variables (`GEMINI_API_KEY`)
//! 3. CLI flags, applied as [`ConfigOverrides`]
//!
//! The resolved [`HermesConfig`] is built once at startup and passed down
//! explicitly; nothing in this crate keeps process-global state.

pub mod api_keys;
pub mod constants;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::defaults;

/// Resolved application configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct HermesConfig {
    /// Gemini API key for command generation and explanation
    pub gemini_api_key: Option<String>,
    /// Model override; defaults to [`constants::models::DEFAULT_MODEL`]
    pub model: Option<String>,
    /// Verbose diagnostics on stderr
    pub debug: bool,
    /// Static command returned instead of calling the provider
    pub mock_response: Option<String>,
    /// Forces the safety engine through the deterministic test seam
    pub mock_exit_code: Option<i32>,
}

/// Highest-priority configuration layer, populated from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub gemini_api_key: Option<String>,
    pub model: Option<String>,
    pub debug: bool,
    pub mock_response: Option<String>,
    pub mock_exit_code: Option<i32>,
}

impl HermesConfig {
    /// Default location of the user configuration file.
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME)
        })
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load the layered configuration from the default file location.
    pub fn load(overrides: ConfigOverrides) -> Self {
        Self::load_from(Self::config_file_path().as_deref(), overrides)
    }

    /// Load the layered configuration from an explicit file location.
    ///
    /// A missing file yields defaults; a malformed file is reported as a
    /// warning and skipped rather than aborting the CLI.
    pub fn load_from(path: Option<&Path>, overrides: ConfigOverrides) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => match Self::from_file(path) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("ignoring config file: {err:#}");
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.gemini_api_key =
            api_keys::resolve_gemini_api_key(config.gemini_api_key.as_deref());
        config.apply(overrides);
        config
    }

    /// Apply CLI flag overrides on top of file and environment values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(key) = overrides.gemini_api_key {
            self.gemini_api_key = Some(key);
        }
        if let Some(model) = overrides.model {
            self.model = Some(model);
        }
        if overrides.debug {
            self.debug = true;
        }
        if let Some(response) = overrides.mock_response {
            self.mock_response = Some(response);
        }
        if let Some(code) = overrides.mock_exit_code {
            self.mock_exit_code = Some(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn parses_config_file() {
        let file = write_config(
            r#"
gemini_api_key = "file-key"
model = "gemini-2.5-pro"
debug = true
"#,
        );
        let config = HermesConfig::from_file(file.path()).unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("file-key"));
        assert_eq!(config.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(config.debug);
        assert_eq!(config.mock_exit_code, None);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let file = write_config("gemini_api_key = [not toml");
        let config = HermesConfig::load_from(Some(file.path()), ConfigOverrides::default());
        assert_eq!(config.model, None);
        assert!(!config.debug);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = HermesConfig::load_from(
            Some(Path::new("/nonexistent/hermes/config.toml")),
            ConfigOverrides::default(),
        );
        // The API key field is environment-sensitive; everything else must
        // come back as the default.
        assert_eq!(config.model, None);
        assert_eq!(config.mock_response, None);
        assert_eq!(config.mock_exit_code, None);
        assert!(!config.debug);
    }

    #[test]
    fn overrides_beat_file_values() {
        let file = write_config(r#"model = "gemini-2.5-flash""#);
        let config = HermesConfig::load_from(
            Some(file.path()),
            ConfigOverrides {
                model: Some("gemini-2.5-pro".to_string()),
                debug: true,
                mock_exit_code: Some(10),
                ..ConfigOverrides::default()
            },
        );
        assert_eq!(config.model.as_deref(), Some("gemini-2.5-pro"));
        assert!(config.debug);
        assert_eq!(config.mock_exit_code, Some(10));
    }

    #[test]
    fn apply_keeps_existing_values_when_override_is_empty() {
        let mut config = HermesConfig {
            model: Some("gemini-2.5-flash".to_string()),
            debug: true,
            ..HermesConfig::default()
        };
        config.apply(ConfigOverrides::default());
        assert_eq!(config.model.as_deref(), Some("gemini-2.5-flash"));
        assert!(config.debug);
    }
}
