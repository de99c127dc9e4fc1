//! Match orchestration: mode, lives, score, timer
//!
//! Asteroids fall from the top of the screen and the player taps to destroy
//! them. Any asteroid hit adds one point; large asteroids split into smaller
//! ones. Any asteroid that passes the bottom of the screen removes one life.
//! The game is over when the player is out of lives or the timer runs out.
//!
//! Presentation (menu, score text, damage overlay, clock hand) belongs to the
//! host; it reads [`Game::lives`]/[`Game::score`]/[`Game::time_remaining`]
//! each frame and drains destroy effects via [`Game::drain_fx`].

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::config::SpawnConfig;
use crate::consts::STARTING_LIVES;
use crate::error::SimError;
use crate::sim::{AsteroidSpawner, GameEvents};

/// Current phase of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
}

/// One destroy effect for the presentation layer (explosion position and the
/// velocity to bias particle spray with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestroyFx {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[derive(Debug, Default)]
struct PlayerStats {
    lives: u32,
    score: u64,
    fx_queue: Vec<DestroyFx>,
}

/// Event sink wired into the spawner; shares the stats cell with [`Game`].
struct StatsSink(Rc<RefCell<PlayerStats>>);

impl GameEvents for StatsSink {
    fn on_life_lost(&mut self) {
        let mut stats = self.0.borrow_mut();
        stats.lives = stats.lives.saturating_sub(1);
        log::debug!("life lost, {} remaining", stats.lives);
    }

    fn on_scored(&mut self) {
        self.0.borrow_mut().score += 1;
    }

    fn on_asteroid_destroyed(&mut self, position: Vec2, velocity: Vec2) {
        self.0.borrow_mut().fx_queue.push(DestroyFx {
            pos: position,
            vel: velocity,
        });
    }
}

/// A full game: spawner plus mode/lives/score/timer bookkeeping.
pub struct Game {
    pub spawner: AsteroidSpawner,
    stats: Rc<RefCell<PlayerStats>>,
    mode: GameMode,
    /// Match length in seconds
    duration: f32,
    game_start: f32,
}

impl Game {
    /// Build a game in menu mode. Fails on invalid `config`.
    pub fn new(config: SpawnConfig, duration: f32, seed: u64) -> Result<Self, SimError> {
        let stats = Rc::new(RefCell::new(PlayerStats::default()));
        let spawner =
            AsteroidSpawner::new(config, seed, Box::new(StatsSink(Rc::clone(&stats))))?;
        Ok(Self {
            spawner,
            stats,
            mode: GameMode::Menu,
            duration,
            game_start: 0.0,
        })
    }

    /// Start a match at sim time `now`: reset lives and score, clear any
    /// leftover asteroids from the previous match, enable spawning.
    pub fn start(&mut self, now: f32) {
        {
            let mut stats = self.stats.borrow_mut();
            stats.lives = STARTING_LIVES;
            stats.score = 0;
            stats.fx_queue.clear();
        }
        self.spawner.clear_all();
        self.spawner.set_enabled(true, now);
        self.game_start = now;
        self.mode = GameMode::Playing;
        log::info!("match started");
    }

    /// Per-frame update. Ticks the simulation while playing and ends the
    /// match when the timer expires or lives run out.
    pub fn update(&mut self, dt: f32, now: f32) -> Result<(), SimError> {
        if self.mode != GameMode::Playing {
            return Ok(());
        }
        self.spawner.tick(dt, now)?;
        if self.lives() == 0 || now - self.game_start > self.duration {
            self.game_over(now);
        }
        Ok(())
    }

    /// The player tapped asteroid `id`. Stale taps (asteroid already
    /// recycled) are logged and ignored; pool exhaustion during a split
    /// propagates.
    pub fn tap(&mut self, id: u32) -> Result<(), SimError> {
        if self.mode != GameMode::Playing {
            return Ok(());
        }
        match self.spawner.on_interaction(id) {
            Err(SimError::InvalidInteraction { id }) => {
                log::debug!("stale tap on asteroid {id}, ignoring");
                Ok(())
            }
            other => other,
        }
    }

    /// Take the pending destroy effects; called once per render frame.
    pub fn drain_fx(&mut self) -> Vec<DestroyFx> {
        std::mem::take(&mut self.stats.borrow_mut().fx_queue)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn lives(&self) -> u32 {
        self.stats.borrow().lives
    }

    pub fn score(&self) -> u64 {
        self.stats.borrow().score
    }

    /// Seconds left on the match clock (0 outside a match).
    pub fn time_remaining(&self, now: f32) -> f32 {
        if self.mode != GameMode::Playing {
            return 0.0;
        }
        (self.duration - (now - self.game_start)).max(0.0)
    }

    /// Freeze the board in place and return to the menu. Asteroids stay
    /// visible where they stopped; the next `start` clears them.
    fn game_over(&mut self, now: f32) {
        self.spawner.set_enabled(false, now);
        self.mode = GameMode::Menu;
        log::info!("game over, final score {}", self.score());
    }
}
