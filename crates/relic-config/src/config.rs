//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain world settings.
    pub world: WorldConfig,
    /// Relic scattering settings.
    pub scatter: ScatterConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Noise algorithm family, mirrored into `relic_terrain::NoiseKind` by the
/// application when constructing the field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoiseKind {
    /// Smooth gradient noise (the default, matching OpenSimplex terrain).
    #[default]
    OpenSimplex,
    /// Classic Perlin gradient noise.
    Perlin,
    /// Interpolated value noise.
    Value,
}

/// Terrain world configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Grid side length in cells; the mesh has `(grid_size + 1)^2` vertices.
    pub grid_size: u32,
    /// Multiplier from noise value to world-space height.
    pub vertical_scale: f32,
    /// Noise algorithm family.
    pub noise_kind: NoiseKind,
    /// Noise sampling frequency; must be positive.
    pub noise_frequency: f32,
    /// World seed; drives both the noise field and the scatter generator.
    pub seed: u64,
}

/// Relic scattering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    /// Total number of relic instances to place.
    pub count: u32,
    /// Uniform scale applied to every instance.
    pub scale_factor: f32,
    /// Vertical offset embedding instances into the surface.
    pub embed_offset: f32,
    /// Number of asset variants to round-robin instances across.
    pub variant_count: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 128,
            vertical_scale: 10.0,
            noise_kind: NoiseKind::OpenSimplex,
            noise_frequency: 0.05,
            seed: 1337,
        }
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: 60,
            scale_factor: 0.4,
            embed_offset: 0.5,
            variant_count: 2,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(2))
                .unwrap();
        assert!(ron_str.contains("grid_size: 128"));
        assert!(ron_str.contains("variant_count: 2"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(world: (grid_size: 16))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.world.grid_size, 16);
        assert_eq!(config.scatter, ScatterConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.grid_size = 64;
        config.world.seed = 9000;
        config.scatter.count = 10;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let created = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(created, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
