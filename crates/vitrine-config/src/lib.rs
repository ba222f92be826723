//! Configuration for the vitrine terminal portfolio.
//!
//! Settings load from `config.toml` in the platform config directory
//! (e.g. `~/.config/vitrine/` on Linux). A missing file yields the
//! defaults; a malformed file is an error rather than a silent reset.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::{AnimationSpeed, Palette};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Number of background particles.
    pub particle_count: usize,
    /// Color palette for the particle background.
    pub palette: Palette,
    /// Global animation speed preset.
    pub speed: AnimationSpeed,
    /// Phrases the headline typewriter cycles through.
    pub headline: Vec<String>,
    /// Milliseconds between typed characters.
    pub type_ms: u64,
    /// Milliseconds between deleted characters.
    pub delete_ms: u64,
    /// Milliseconds a completed phrase is held.
    pub hold_ms: u64,
    /// Whether the headline loops forever.
    pub cycle: bool,
    /// Capture mouse movement to perturb the particle field.
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 150,
            palette: Palette::default(),
            speed: AnimationSpeed::default(),
            headline: vec![
                "Software Engineer".to_string(),
                "AI Enthusiast".to_string(),
                "Content Creator".to_string(),
                "Problem Solver".to_string(),
            ],
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            cycle: true,
            mouse_capture: true,
        }
    }
}

impl Config {
    /// Load the config from the platform config directory. A missing
    /// directory or file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path. A missing file yields
    /// defaults; unreadable or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// The platform-specific config file location.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vitrine").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.particle_count, 150);
        assert!(config.cycle);
        assert!(!config.headline.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            particle-count = 400
            palette = "ocean"
            "#,
        )
        .unwrap();
        assert_eq!(config.particle_count, 400);
        assert_eq!(config.palette, Palette::Ocean);
        assert_eq!(config.hold_ms, 2000);
    }

    #[test]
    fn test_full_roundtrip() {
        let config = Config {
            particle_count: 42,
            palette: Palette::Ember,
            speed: AnimationSpeed::Fast,
            headline: vec!["One".into(), "Two".into()],
            cycle: false,
            ..Config::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/vitrine/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let dir = std::env::temp_dir().join("vitrine-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        fs::write(&path, "particle-count = \"lots\"").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
        fs::remove_file(&path).ok();
    }
}
