//! Gameplay event interface to the host
//!
//! The spawner reports life/score deltas and destroy effects through this
//! trait instead of reaching into game state directly. The implementation is
//! supplied at spawner construction; there is no global lookup.

use glam::Vec2;

/// Collaborator notified of gameplay outcomes.
///
/// Guarantees: exactly one `on_life_lost` per boundary-crossing asteroid;
/// exactly one `on_scored` and one `on_asteroid_destroyed` per direct tap.
/// Split children report nothing at creation - each scores independently if
/// tapped later.
pub trait GameEvents {
    /// An asteroid fell past the bottom boundary.
    fn on_life_lost(&mut self) {}

    /// The player destroyed an asteroid.
    fn on_scored(&mut self) {}

    /// Where and how fast the destroyed asteroid was moving, for explosion
    /// effects and audio. Not fired for boundary removals.
    fn on_asteroid_destroyed(&mut self, _position: Vec2, _velocity: Vec2) {}
}

/// Sink that discards every event. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullEvents;

impl GameEvents for NullEvents {}
