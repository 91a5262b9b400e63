// crates/swarm_game/src/config.rs
//! Tunables for the swarm demo. Defaults are the compiled-in values; a TOML
//! file may override any subset of them.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::rng::Lcg;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    /// Playable rectangle, `[0, w) x [0, h)`.
    pub world_size: IVec2,
    pub viewport_size: IVec2,
    pub player_size: i32,
    /// Pixels per tick along each held axis.
    pub player_speed: i32,
    /// Maximum concurrent enemies.
    pub capacity: usize,
    /// Distance beyond the viewport edge where enemies appear.
    pub spawn_margin: i32,
    pub speed_min: i32,
    pub speed_max: i32,
    /// Ticks between spawns at the start of a session.
    pub initial_interval: i32,
    pub floor_interval: i32,
    /// Ticks between interval decrements.
    pub decay_period: u64,
    pub seed: u32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            world_size: IVec2::new(3000, 3000),
            viewport_size: IVec2::new(800, 600),
            player_size: 20,
            player_speed: 4,
            capacity: 300,
            spawn_margin: 40,
            speed_min: 2,
            speed_max: 4,
            initial_interval: 40,
            floor_interval: 10,
            decay_period: 120,
            seed: Lcg::DEFAULT_SEED,
        }
    }
}

impl SwarmConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SwarmConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.world_size.min_element() <= 0 || self.viewport_size.min_element() <= 0 {
            return invalid("world and viewport sizes must be positive".into());
        }
        if self.viewport_size.x > self.world_size.x || self.viewport_size.y > self.world_size.y {
            return invalid(format!(
                "viewport {} does not fit inside world {}",
                self.viewport_size, self.world_size
            ));
        }
        if self.player_size <= 0 || self.player_size > self.viewport_size.min_element() {
            return invalid(format!("player size {} is out of range", self.player_size));
        }
        if self.player_speed < 0 {
            return invalid("player speed must not be negative".into());
        }
        if self.capacity == 0 {
            return invalid("enemy capacity must be at least 1".into());
        }
        if self.spawn_margin <= 0 {
            return invalid("spawn margin must be positive".into());
        }
        if self.speed_min < 1 || self.speed_min > self.speed_max {
            return invalid(format!(
                "enemy speed range {}..={} is empty or below 1",
                self.speed_min, self.speed_max
            ));
        }
        if self.floor_interval < 1 || self.floor_interval > self.initial_interval {
            return invalid(format!(
                "spawn interval floor {} must be in 1..={}",
                self.floor_interval, self.initial_interval
            ));
        }
        if self.decay_period == 0 {
            return invalid("decay period must be at least one tick".into());
        }
        Ok(())
    }
}
