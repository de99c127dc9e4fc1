//! One falling asteroid's per-instance state and advance behavior

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A recyclable falling asteroid.
///
/// Instances are created once by the pool at startup and cycle between the
/// pool (inactive) and the spawner's active set for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    /// Stable slot identity, assigned at pool pre-fill
    pub id: u32,
    /// Size tier (1 = regular, 2 = large); also the render scale
    pub size: u32,
    pub pos: Vec2,
    /// Constant for the active lifetime; no acceleration
    pub vel: Vec2,
    /// Rotational velocity, degrees/sec
    pub rot_vel: f32,
    /// Accumulated rotation in degrees, for rendering
    pub rotation: f32,
    /// Index into the host's sprite variant set
    pub sprite: usize,
    active: bool,
}

impl Asteroid {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            size: 1,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rot_vel: 0.0,
            rotation: 0.0,
            sprite: 0,
            active: false,
        }
    }

    /// Set all per-spawn fields and mark the asteroid live. Constraints
    /// (size >= 1, sprite in range) are the caller's responsibility.
    pub fn activate(&mut self, size: u32, pos: Vec2, vel: Vec2, rot_vel: f32, sprite: usize) {
        self.size = size;
        self.pos = pos;
        self.vel = vel;
        self.rot_vel = rot_vel;
        self.rotation = 0.0;
        self.sprite = sprite;
        self.active = true;
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether this asteroid is live (in the active set, simulated, visible).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Euler step: integrate position and rotation over `dt` seconds.
    ///
    /// Returns true if the asteroid has crossed below `boundary_y`. Pure
    /// query; the spawner decides what to do about a crossing.
    pub fn advance(&mut self, dt: f32, boundary_y: f32) -> bool {
        self.pos += self.vel * dt;
        self.rotation += self.rot_vel * dt;
        self.pos.y < boundary_y
    }
}
