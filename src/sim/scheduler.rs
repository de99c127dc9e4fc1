//! Spawn timing and parameter sampling
//!
//! A single scheduled-time value decides when the next asteroid appears; the
//! same seeded RNG decides what it looks like. No history is kept.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::SpawnConfig;

/// Complete description of one asteroid to spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub size: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub rot_vel: f32,
    pub sprite: usize,
}

/// Decides when the next asteroid spawns and with what parameters.
#[derive(Debug)]
pub struct SpawnScheduler {
    /// Absolute sim time of the next spawn; None until scheduled
    next_spawn: Option<f32>,
    rng: Pcg32,
}

impl SpawnScheduler {
    pub fn new(seed: u64) -> Self {
        Self {
            next_spawn: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Schedule the next spawn at `now` plus a uniform delay from
    /// `[min_delay, max_delay]`. Called after every spawn and on re-enable.
    pub fn schedule_next(&mut self, now: f32, min_delay: f32, max_delay: f32) {
        self.next_spawn = Some(now + self.rng.random_range(min_delay..=max_delay));
    }

    /// True iff a spawn is scheduled and its time has been reached or passed.
    pub fn is_due(&self, now: f32) -> bool {
        self.next_spawn.is_some_and(|t| t <= now)
    }

    /// Draw one set of spawn parameters. All draws are independent and
    /// uniform over the configured ranges.
    pub fn sample(&mut self, config: &SpawnConfig) -> SpawnParams {
        let x = self.rng.random_range(config.spawn_x_min..=config.spawn_x_max);
        let speed = self.rng.random_range(config.min_velocity..=config.max_velocity);
        let rot_vel = self
            .rng
            .random_range(-config.max_rot_velocity..=config.max_rot_velocity);
        let size = if self.rng.random::<f32>() < config.large_chance {
            2
        } else {
            1
        };
        let sprite = self.rng.random_range(0..config.sprite_count);
        SpawnParams {
            size,
            pos: Vec2::new(x, config.spawn_y),
            vel: Vec2::new(0.0, -speed),
            rot_vel,
            sprite,
        }
    }
}
