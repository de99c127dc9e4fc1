//! Data-driven spawn and gameplay tuning
//!
//! Loadable from JSON; missing fields fall back to the compile-time defaults
//! in [`crate::consts`]. Validated once at spawner construction, never at use
//! time.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Spawn and gameplay tuning. Immutable after the spawner is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Asteroid pool size; hard cap on concurrent active asteroids
    pub pool_capacity: usize,
    /// Minimum delay between spawns (seconds)
    pub min_spawn_delay: f32,
    /// Maximum delay between spawns (seconds)
    pub max_spawn_delay: f32,
    /// Probability that a spawn is a large (size 2) asteroid
    pub large_chance: f32,
    /// Horizontal spawn band
    pub spawn_x_min: f32,
    pub spawn_x_max: f32,
    /// Fixed spawn height (top of the band)
    pub spawn_y: f32,
    /// Fall speed range (straight down)
    pub min_velocity: f32,
    pub max_velocity: f32,
    /// Rotational speed cap (degrees/sec, either direction)
    pub max_rot_velocity: f32,
    /// Y value below which an asteroid counts as missed
    pub boundary_y: f32,
    /// Horizontal offset for each half of a split asteroid
    pub split_offset: f32,
    /// Particles per destroyed asteroid (read by the effects layer)
    pub explosion_particles: u32,
    /// Number of sprite variants to draw from
    pub sprite_count: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            pool_capacity: POOL_CAPACITY,
            min_spawn_delay: MIN_SPAWN_DELAY,
            max_spawn_delay: MAX_SPAWN_DELAY,
            large_chance: LARGE_ASTEROID_CHANCE,
            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            spawn_y: SPAWN_Y,
            min_velocity: MIN_VELOCITY,
            max_velocity: MAX_VELOCITY,
            max_rot_velocity: MAX_ROT_VELOCITY,
            boundary_y: BOUNDARY_Y,
            split_offset: SPLIT_OFFSET,
            explosion_particles: EXPLOSION_PARTICLES,
            sprite_count: SPRITE_COUNT,
        }
    }
}

impl SpawnConfig {
    /// Parse from JSON and validate in one step.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::InvalidConfig {
                field: "json",
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its valid range.
    pub fn validate(&self) -> Result<(), SimError> {
        fn reject(field: &'static str, reason: String) -> Result<(), SimError> {
            Err(SimError::InvalidConfig { field, reason })
        }

        if self.pool_capacity == 0 {
            return reject("pool_capacity", "must be at least 1".into());
        }
        if self.min_spawn_delay < 0.0 {
            return reject("min_spawn_delay", format!("is negative: {}", self.min_spawn_delay));
        }
        if self.min_spawn_delay > self.max_spawn_delay {
            return reject(
                "min_spawn_delay",
                format!("{} exceeds max_spawn_delay {}", self.min_spawn_delay, self.max_spawn_delay),
            );
        }
        if !(0.0..=1.0).contains(&self.large_chance) {
            return reject("large_chance", format!("{} not in [0, 1]", self.large_chance));
        }
        if self.spawn_x_min > self.spawn_x_max {
            return reject(
                "spawn_x_min",
                format!("{} exceeds spawn_x_max {}", self.spawn_x_min, self.spawn_x_max),
            );
        }
        if self.min_velocity < 0.0 {
            return reject("min_velocity", format!("is negative: {}", self.min_velocity));
        }
        if self.min_velocity > self.max_velocity {
            return reject(
                "min_velocity",
                format!("{} exceeds max_velocity {}", self.min_velocity, self.max_velocity),
            );
        }
        if self.max_rot_velocity < 0.0 {
            return reject("max_rot_velocity", format!("is negative: {}", self.max_rot_velocity));
        }
        if self.split_offset < 0.0 {
            return reject("split_offset", format!("is negative: {}", self.split_offset));
        }
        if self.sprite_count == 0 {
            return reject("sprite_count", "must be at least 1".into());
        }
        if self.spawn_y <= self.boundary_y {
            return reject(
                "spawn_y",
                format!("{} must be above boundary_y {}", self.spawn_y, self.boundary_y),
            );
        }
        Ok(())
    }
}
