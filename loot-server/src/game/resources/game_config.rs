use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config json")]
    Json(#[from] serde_json::Error),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{0} must be finite and not negative")]
    Negative(&'static str),
}

#[derive(Clone, Debug, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub ttl_ms: u64,
    pub pickup_range: f32,
    pub max_capacity: usize,
    pub sweep_interval_ms: u64,
    pub spawn_jitter_radius: f32,
    pub spawn_lift: f32,
    pub inventory_slots: usize,
    pub tick_rate_hz: u32,

    /// Caps live pickup entities when running headless, unlimited when absent.
    pub entity_limit: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 300000,
            pickup_range: 2.0,
            max_capacity: 1000,
            sweep_interval_ms: 30000,
            spawn_jitter_radius: 1.0,
            spawn_lift: 0.5,
            inventory_slots: 30,
            tick_rate_hz: 60,
            entity_limit: None,
        }
    }
}

fn check_distance(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(name))
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_ms == 0 {
            return Err(ConfigError::Zero("ttlMs"));
        }

        if self.max_capacity == 0 {
            return Err(ConfigError::Zero("maxCapacity"));
        }

        if self.sweep_interval_ms == 0 {
            return Err(ConfigError::Zero("sweepIntervalMs"));
        }

        if self.tick_rate_hz == 0 {
            return Err(ConfigError::Zero("tickRateHz"));
        }

        if self.entity_limit == Some(0) {
            return Err(ConfigError::Zero("entityLimit"));
        }

        check_distance("pickupRange", self.pickup_range)?;
        check_distance("spawnJitterRadius", self.spawn_jitter_radius)?;
        check_distance("spawnLift", self.spawn_lift)?;
        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = GameConfig::from_json_str(r#"{ "ttlMs": 1000, "pickupRange": 3.5 }"#).unwrap();

        assert_eq!(config.ttl(), Duration::from_secs(1));
        assert_eq!(config.pickup_range, 3.5);
        assert_eq!(config.max_capacity, 1000);
        assert_eq!(config.sweep_interval(), Duration::from_secs(30));
        assert_eq!(config.tick_rate_hz, 60);
        assert_eq!(config.entity_limit, None);
    }

    #[test]
    fn entity_limit_is_optional() {
        let config = GameConfig::from_json_str(r#"{ "entityLimit": 500 }"#).unwrap();
        assert_eq!(config.entity_limit, Some(500));

        assert!(matches!(
            GameConfig::from_json_str(r#"{ "entityLimit": 0 }"#),
            Err(ConfigError::Zero("entityLimit"))
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "ttlMs": 0 }"#),
            Err(ConfigError::Zero("ttlMs"))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "maxCapacity": 0 }"#),
            Err(ConfigError::Zero("maxCapacity"))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "pickupRange": -1.0 }"#),
            Err(ConfigError::Negative("pickupRange"))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{ "ttlMs": "soon" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sweepIntervalMs": 500, "tickRateHz": 20 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.sweep_interval(), Duration::from_millis(500));
        assert_eq!(config.tick_duration(), Duration::from_millis(50));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            GameConfig::load(Path::new("does/not/exist.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
