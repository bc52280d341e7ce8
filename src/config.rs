use std::path::Path;

use tracing::warn;

use crate::ai::SearchConfig;
use crate::arena::ArenaConfig;
use crate::error::ConfigError;
use crate::game::{BoardConfig, SUPPORTED_SIZES};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_SIZES.contains(&self.board.size) {
            return Err(ConfigError::Validation(format!(
                "board.size must be one of {SUPPORTED_SIZES:?}"
            )));
        }

        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.wall_radius == 0 {
            return Err(ConfigError::Validation(
                "search.wall_radius must be >= 1".into(),
            ));
        }
        // NaN fails every comparison, so check for the valid range.
        let aggression = self.search.aggression;
        if !(aggression.is_finite() && aggression > 0.0) {
            return Err(ConfigError::Validation(
                "search.aggression must be finite and > 0".into(),
            ));
        }
        let wall_weight = self.search.wall_weight;
        if !(wall_weight.is_finite() && wall_weight >= 0.0) {
            return Err(ConfigError::Validation(
                "search.wall_weight must be finite and >= 0".into(),
            ));
        }
        let win_score = self.search.win_score;
        if !(win_score.is_finite() && win_score > 0.0) {
            return Err(ConfigError::Validation(
                "search.win_score must be finite and > 0".into(),
            ));
        }
        if self.search.unreachable_distance == 0 {
            return Err(ConfigError::Validation(
                "search.unreachable_distance must be > 0".into(),
            ));
        }

        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be >= 1".into(),
            ));
        }
        if self.arena.max_turns == 0 {
            return Err(ConfigError::Validation(
                "arena.max_turns must be >= 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.size, 9);
        assert_eq!(config.search.depth, 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 3
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 3);
        // Other fields should be defaults
        assert_eq!(config.search.wall_radius, 2);
        assert_eq!(config.board.walls_per_player, 10);
        assert_eq!(config.arena.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.board.size, default.board.size);
        assert!((config.search.aggression - default.search.aggression).abs() < 1e-9);
    }

    #[test]
    fn test_validation_rejects_unsupported_size() {
        let mut config = AppConfig::default();
        config.board.size = 8;
        assert!(config.validate().is_err());
        config.board.size = 3;
        assert!(config.validate().is_err());
        config.board.size = 11;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_wall_radius() {
        let mut config = AppConfig::default();
        config.search.wall_radius = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_weights() {
        let mut config = AppConfig::default();
        config.search.aggression = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.search.wall_weight = -1.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.search.win_score = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_weights() {
        let mut config = AppConfig::default();
        config.search.aggression = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.search.wall_weight = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.search.win_score = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_nan_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nan.toml");
        std::fs::write(&path, "[search]\naggression = nan\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.arena.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.size, 9);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
size = 7

[arena]
seed = 42
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.size, 7);
        assert_eq!(config.arena.seed, Some(42));
        // Others are defaults
        assert_eq!(config.search.depth, 2);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
