//! Configuration module for Folio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, resolved in `ui::context`)
//! 2. Environment variables (FOLIO_*)
//! 3. Project config (./folio.toml)
//! 4. User config (~/.config/folio/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation mode for smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the standard locations, lowest priority first.
    pub fn load() -> FolioResult<Self> {
        let mut config = Config::default();

        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                config = Self::load_from(&user_path)?;
            }
        }

        let project_path = Path::new("folio.toml");
        if project_path.exists() {
            config = Self::load_from(project_path)?;
        }

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a single config file. A malformed file is a hard error; a
    /// missing file never reaches this point.
    pub fn load_from(path: &Path) -> FolioResult<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| FolioError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply FOLIO_* environment overrides. Unrecognized values are ignored
    /// rather than fatal, matching how the CLI treats unknown terminals.
    fn apply_env(&mut self, get_env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get_env("FOLIO_COLOR") {
            match v.to_lowercase().as_str() {
                "always" => self.output.color = ColorMode::Always,
                "never" => self.output.color = ColorMode::Never,
                "auto" => self.output.color = ColorMode::Auto,
                _ => {}
            }
        }
        if let Some(v) = get_env("FOLIO_ANIMATION") {
            match v.to_lowercase().as_str() {
                "always" => self.output.animation = AnimationMode::Always,
                "never" => self.output.animation = AnimationMode::Never,
                "auto" => self.output.animation = AnimationMode::Auto,
                _ => {}
            }
        }
        if let Some(v) = get_env("FOLIO_UNICODE") {
            match v.to_lowercase().as_str() {
                "true" | "1" => self.output.unicode = true,
                "false" | "0" => self.output.unicode = false,
                _ => {}
            }
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_are_auto_with_unicode() {
        let config = Config::default();
        assert_eq!(config.output.color, ColorMode::Auto);
        assert_eq!(config.output.animation, AnimationMode::Auto);
        assert!(config.output.unicode);
    }

    #[test]
    fn toml_round_trip() {
        let parsed: Config = toml::from_str(
            r#"
            [output]
            color = "never"
            animation = "always"
            unicode = false
            "#,
        )
        .unwrap();
        assert_eq!(parsed.output.color, ColorMode::Never);
        assert_eq!(parsed.output.animation, AnimationMode::Always);
        assert!(!parsed.output.unicode);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.output.color, ColorMode::Auto);
        assert!(parsed.output.unicode);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        config.apply_env(env(&[("FOLIO_COLOR", "never"), ("FOLIO_UNICODE", "0")]));
        assert_eq!(config.output.color, ColorMode::Never);
        assert!(!config.output.unicode);
    }

    #[test]
    fn env_ignores_unrecognized_values() {
        let mut config = Config::default();
        config.apply_env(env(&[("FOLIO_COLOR", "sometimes")]));
        assert_eq!(config.output.color, ColorMode::Auto);
    }
}
