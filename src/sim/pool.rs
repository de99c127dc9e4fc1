//! Fixed-capacity asteroid object pool
//!
//! All asteroid instances are created here at startup and recycled for the
//! life of the process; no allocation happens after `new`. The pool holds
//! only inactive instances - active ones are owned by the spawner.

use crate::error::SimError;

use super::asteroid::Asteroid;

/// Reserve of inactive, reusable asteroid instances.
#[derive(Debug)]
pub struct AsteroidPool {
    // LIFO: the most recently released instance is reused first
    inactive: Vec<Asteroid>,
    capacity: usize,
}

impl AsteroidPool {
    /// Pre-fill the pool with `capacity` inactive asteroids, ids
    /// `0..capacity`. Capacity is fixed for the pool's lifetime.
    pub fn new(capacity: usize) -> Self {
        let inactive = (0..capacity as u32).map(Asteroid::new).collect();
        Self { inactive, capacity }
    }

    /// Take one inactive instance out of the pool.
    ///
    /// Fails with [`SimError::PoolExhausted`] when every instance is active;
    /// the pool never grows to cover the shortfall.
    pub fn acquire(&mut self) -> Result<Asteroid, SimError> {
        self.inactive.pop().ok_or(SimError::PoolExhausted {
            capacity: self.capacity,
        })
    }

    /// Deactivate `roid` and return it to the pool. The caller must already
    /// have removed it from the active set.
    pub fn release(&mut self, mut roid: Asteroid) {
        debug_assert!(self.inactive.len() < self.capacity);
        roid.deactivate();
        self.inactive.push(roid);
    }

    /// Number of instances currently available to acquire.
    pub fn free_count(&self) -> usize {
        self.inactive.len()
    }

    /// Fixed total instance count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn inactive_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.inactive.iter().map(|r| r.id)
    }
}
