//! Startup configuration
//!
//! Read from `hungry_bird.ron` in the working directory when it exists.
//! Only presentation settings live here; gameplay tuning is fixed in
//! `game::constants`.
//!
//! ```ron
//! (
//!     asset_dir: "assets/clouds",
//!     fps_limit: Fps60,
//!     seed: Some(1234),
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "hungry_bird.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Tick rate cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    /// Physics constants are tuned for this rate
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Root folder holding Background/, Bird_Objects/ and Font/
    pub asset_dir: String,
    pub fps_limit: FpsLimit,
    /// Fixed seed for item placement; taken from the clock when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            asset_dir: "assets/clouds".to_string(),
            fps_limit: FpsLimit::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load from a file. A missing file is not an error and yields `None`.
    pub fn load_from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_ron_str(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Config for this run: the file if present and valid, defaults otherwise
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(Some(config)) => {
                log::info!("Using config from {}", path.display());
                config
            }
            Ok(None) => {
                log::info!("No {} found, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.asset_dir, "assets/clouds");
        assert_eq!(config.fps_limit, FpsLimit::Fps60);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = GameConfig::from_ron_str("(seed: Some(42))").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.asset_dir, "assets/clouds");
        assert_eq!(config.fps_limit, FpsLimit::Fps60);
    }

    #[test]
    fn test_full_config() {
        let config = GameConfig::from_ron_str(
            r#"(asset_dir: "data/sky", fps_limit: Unlocked, seed: None)"#,
        )
        .unwrap();
        assert_eq!(config.asset_dir, "data/sky");
        assert_eq!(config.fps_limit, FpsLimit::Unlocked);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(
            GameConfig::from_ron_str("(fps_limit: Fps144)"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "(fps_limit: Fps30)").unwrap();

        let config = GameConfig::load_from_file(&path).unwrap().unwrap();
        assert_eq!(config.fps_limit, FpsLimit::Fps30);
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert!(GameConfig::load_from_file(&path).unwrap().is_none());
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not ron at all").unwrap();
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn test_frame_time() {
        assert_eq!(FpsLimit::Fps60.frame_time(), Some(1.0 / 60.0));
        assert_eq!(FpsLimit::Fps30.frame_time(), Some(1.0 / 30.0));
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        assert_eq!(FpsLimit::Unlocked.label(), "Unlocked");
    }
}
