//! Simulation core
//!
//! All gameplay state management lives here, free of rendering or platform
//! dependencies:
//! - Fixed-capacity object pool; asteroids are recycled, never dropped
//! - Randomized spawn scheduling (seeded RNG)
//! - Frame-stepped tick loop; single-threaded, no internal timing
//! - Gameplay reported through the [`GameEvents`] collaborator

pub mod asteroid;
pub mod events;
pub mod pool;
pub mod scheduler;
pub mod spawner;

pub use asteroid::Asteroid;
pub use events::{GameEvents, NullEvents};
pub use pool::AsteroidPool;
pub use scheduler::{SpawnParams, SpawnScheduler};
pub use spawner::AsteroidSpawner;
