//! Asteroid lifecycle orchestration
//!
//! Owns the pool, the active set and the spawn scheduler. Runs the tick loop,
//! applies boundary and tap outcomes (including split-on-destroy) and reports
//! life/score deltas to the [`GameEvents`] collaborator.
//!
//! Single-threaded and frame-stepped: the host calls `tick` once per
//! simulation frame; `on_interaction` may arrive between ticks and mutates
//! synchronously.

use std::collections::HashMap;

use glam::Vec2;

use crate::config::SpawnConfig;
use crate::error::SimError;

use super::asteroid::Asteroid;
use super::events::GameEvents;
use super::pool::AsteroidPool;
use super::scheduler::{SpawnParams, SpawnScheduler};

/// Manages active asteroids and spawns new ones at random intervals.
/// Inactive asteroids are kept in an object pool for re-use.
pub struct AsteroidSpawner {
    config: SpawnConfig,
    pool: AsteroidPool,
    active: HashMap<u32, Asteroid>,
    scheduler: SpawnScheduler,
    events: Box<dyn GameEvents>,
    enabled: bool,
}

impl AsteroidSpawner {
    /// Validates `config` and pre-fills the pool. Starts disabled; call
    /// [`set_enabled`](Self::set_enabled) to begin spawning.
    pub fn new(
        config: SpawnConfig,
        seed: u64,
        events: Box<dyn GameEvents>,
    ) -> Result<Self, SimError> {
        config.validate()?;
        let pool = AsteroidPool::new(config.pool_capacity);
        let active = HashMap::with_capacity(config.pool_capacity);
        Ok(Self {
            config,
            pool,
            active,
            scheduler: SpawnScheduler::new(seed),
            events,
            enabled: false,
        })
    }

    /// Advance the simulation by one frame.
    ///
    /// Spawns a random asteroid if one is due, then advances every active
    /// asteroid. Boundary crossers are collected during the pass and handled
    /// after it completes - the active set is never mutated mid-iteration.
    /// No-op while disabled.
    pub fn tick(&mut self, dt: f32, now: f32) -> Result<(), SimError> {
        if !self.enabled {
            return Ok(());
        }

        if self.scheduler.is_due(now) {
            self.spawn_random()?;
            self.scheduler
                .schedule_next(now, self.config.min_spawn_delay, self.config.max_spawn_delay);
        }

        let mut crossed: Vec<u32> = Vec::new();
        for roid in self.active.values_mut() {
            if roid.advance(dt, self.config.boundary_y) {
                crossed.push(roid.id);
            }
        }
        // Stable handling order regardless of map iteration order
        crossed.sort_unstable();
        for id in crossed {
            self.on_boundary(id);
        }
        Ok(())
    }

    /// Spawn one asteroid with freshly drawn random parameters.
    pub fn spawn_random(&mut self) -> Result<u32, SimError> {
        let params = self.scheduler.sample(&self.config);
        self.spawn(params)
    }

    /// Take an asteroid from the pool, activate it with `params` and add it
    /// to the active set. Returns the asteroid's id.
    ///
    /// Propagates [`SimError::PoolExhausted`] untouched - running out of
    /// instances means capacity is misconfigured for the spawn rate.
    pub fn spawn(&mut self, params: SpawnParams) -> Result<u32, SimError> {
        let mut roid = self.pool.acquire()?;
        roid.activate(params.size, params.pos, params.vel, params.rot_vel, params.sprite);
        let id = roid.id;
        self.active.insert(id, roid);
        Ok(id)
    }

    /// The player tapped asteroid `id`.
    ///
    /// Removes it from play, splits it into two size-1-lower children if it
    /// was large (children inherit velocity, rotational velocity and sprite,
    /// offset horizontally in opposite directions), returns it to the pool
    /// and reports one score plus one destroy event.
    ///
    /// A tap on an id that is no longer active is a benign race (the
    /// asteroid was recycled under the player's finger): nothing is mutated,
    /// no events fire, and [`SimError::InvalidInteraction`] is returned so
    /// the caller can observe it.
    pub fn on_interaction(&mut self, id: u32) -> Result<(), SimError> {
        let Some(roid) = self.active.remove(&id) else {
            return Err(SimError::InvalidInteraction { id });
        };

        // Children derive from the tapped asteroid's state at removal time,
        // not from fresh random draws.
        let mut split_result = Ok(());
        if roid.size > 1 {
            let offset = Vec2::new(self.config.split_offset, 0.0);
            for child_pos in [roid.pos + offset, roid.pos - offset] {
                split_result = self
                    .spawn(SpawnParams {
                        size: roid.size - 1,
                        pos: child_pos,
                        vel: roid.vel,
                        rot_vel: roid.rot_vel,
                        sprite: roid.sprite,
                    })
                    .map(|_| ());
                if split_result.is_err() {
                    log::warn!("pool exhausted while splitting asteroid {id}");
                    break;
                }
            }
        }

        let (pos, vel) = (roid.pos, roid.vel);
        self.pool.release(roid);
        self.events.on_scored();
        self.events.on_asteroid_destroyed(pos, vel);
        split_result
    }

    /// Remove every active asteroid back into the pool with no life or score
    /// events. Used on match reset, not gameplay.
    pub fn clear_all(&mut self) {
        // drain takes ownership of the whole set up front, so there is no
        // removal-during-iteration hazard
        for (_, roid) in self.active.drain() {
            self.pool.release(roid);
        }
    }

    /// Pause or resume simulation without touching membership: while
    /// disabled, `tick` neither advances positions nor spawns, and the board
    /// stays frozen in place. Re-enabling schedules the next spawn relative
    /// to `now`.
    pub fn set_enabled(&mut self, enabled: bool, now: f32) {
        if enabled && !self.enabled {
            self.scheduler
                .schedule_next(now, self.config.min_spawn_delay, self.config.max_spawn_delay);
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Read-only view of the active asteroids, for rendering.
    pub fn asteroids(&self) -> impl Iterator<Item = &Asteroid> {
        self.active.values()
    }

    /// Whether `id` is currently in play.
    pub fn contains(&self, id: u32) -> bool {
        self.active.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn free_count(&self) -> usize {
        self.pool.free_count()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// An asteroid fell past the bottom boundary: recycle it and report the
    /// lost life.
    fn on_boundary(&mut self, id: u32) {
        if let Some(roid) = self.active.remove(&id) {
            log::debug!("asteroid {id} crossed the boundary at x={:.2}", roid.pos.x);
            self.pool.release(roid);
            self.events.on_life_lost();
        }
    }
}
