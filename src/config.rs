//! Configuration management for the readiness analyzer

use crate::error::{ReadinessError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub recommender: RecommenderConfig,
    pub roles: RolesConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Award +1 point per matched preferred skill (capped at 100).
    /// Off unless explicitly enabled.
    pub include_preferred_bonus: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Upper bound on suggested resources per missing skill.
    pub max_resources_per_skill: usize,

    /// Optional JSON file with curated resources; the built-in catalog is
    /// used when unset.
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    /// Optional JSON file with role profiles; built-in roles are used when
    /// unset.
    pub roles_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_resources_per_skill: 3,
            catalog_path: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the config at `path`, writing defaults there first when the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| {
                ReadinessError::Configuration(format!("Failed to parse config: {}", e))
            })?
        } else {
            let config = Self::default();
            config.save_to(path)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ReadinessError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn reset() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    /// Reject settings no run could honor sensibly.
    pub fn validate(&self) -> Result<()> {
        if self.recommender.max_resources_per_skill == 0 {
            return Err(ReadinessError::Configuration(
                "recommender.max_resources_per_skill must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("readiness-analyzer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert!(!config.scoring.include_preferred_bonus);
        assert_eq!(config.recommender.max_resources_per_skill, 3);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml).unwrap();
        assert_eq!(
            back.recommender.max_resources_per_skill,
            config.recommender.max_resources_per_skill
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[scoring]\ninclude_preferred_bonus = true\n").unwrap();
        assert!(config.scoring.include_preferred_bonus);
        assert_eq!(config.recommender.max_resources_per_skill, 3);
    }

    #[test]
    fn test_save_and_load_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        // Nested path exercises directory creation in save_to.
        let path = dir.path().join("readiness-analyzer").join("config.toml");

        let mut config = Config::default();
        config.scoring.include_preferred_bonus = true;
        config.recommender.max_resources_per_skill = 5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.scoring.include_preferred_bonus);
        assert_eq!(loaded.recommender.max_resources_per_skill, 5);
    }

    #[test]
    fn test_load_from_creates_default_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(!path.exists());

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.recommender.max_resources_per_skill, 3);
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ReadinessError::Configuration(_)));
    }

    #[test]
    fn test_zero_resource_cap_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recommender]\nmax_resources_per_skill = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ReadinessError::Configuration(_)));
    }
}
