//! Asteroid Rain - a falling-asteroid tap arcade game
//!
//! Asteroids drop from the top of the play field at random intervals. Tapping
//! one scores a point (large asteroids split into two smaller ones); letting
//! one fall past the bottom boundary costs a life. The run ends on a timer or
//! when lives reach zero.
//!
//! Core modules:
//! - `sim`: Simulation core (object pool, spawn scheduling, tick loop)
//! - `config`: Data-driven spawn/gameplay tuning
//! - `game`: Match orchestration (mode, lives, score, timer)
//! - `error`: Simulation error types
//!
//! The crate is headless: rendering, audio and input hit-testing live in the
//! host. The host reads asteroid state each frame through
//! [`sim::AsteroidSpawner::asteroids`] and receives gameplay events through
//! the [`sim::GameEvents`] collaborator it supplies at construction.

pub mod config;
pub mod error;
pub mod game;
pub mod sim;

pub use config::SpawnConfig;
pub use error::SimError;
pub use game::{Game, GameMode};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Asteroid object pool size; also the hard cap on concurrent asteroids
    pub const POOL_CAPACITY: usize = 30;

    /// Spawn delay range (seconds between consecutive spawns)
    pub const MIN_SPAWN_DELAY: f32 = 0.2;
    pub const MAX_SPAWN_DELAY: f32 = 0.8;

    /// Chance to spawn a large (size 2) asteroid instead of a regular one
    pub const LARGE_ASTEROID_CHANCE: f32 = 0.2;

    /// Horizontal spawn band and fixed spawn height
    pub const SPAWN_X_MIN: f32 = -2.0;
    pub const SPAWN_X_MAX: f32 = 2.0;
    pub const SPAWN_Y: f32 = 4.0;

    /// Fall speed range (world units/sec, straight down)
    pub const MIN_VELOCITY: f32 = 1.0;
    pub const MAX_VELOCITY: f32 = 3.0;
    /// Rotational speed cap (degrees/sec, either direction)
    pub const MAX_ROT_VELOCITY: f32 = 3.0;

    /// Y value below which an asteroid is removed and a life is lost
    pub const BOUNDARY_Y: f32 = -4.0;

    /// Horizontal offset applied to each half of a split large asteroid
    pub const SPLIT_OFFSET: f32 = 0.5;

    /// Particles the effects layer should emit per player-destroyed asteroid
    pub const EXPLOSION_PARTICLES: u32 = 20;

    /// Number of asteroid sprite variants the host provides
    pub const SPRITE_COUNT: usize = 4;

    /// Lives at the start of a match
    pub const STARTING_LIVES: u32 = 5;
    /// Match length in seconds
    pub const GAME_DURATION: f32 = 60.0;
}
