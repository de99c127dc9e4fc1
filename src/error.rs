//! Simulation error types
//!
//! Failures are either configuration faults surfaced at construction, a
//! capacity fault (spawning past the pool ceiling), or a benign stale-input
//! race that callers can safely ignore. Nothing here is retryable.

use thiserror::Error;

/// Errors produced by the simulation core.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// A spawn was requested with every pooled asteroid already active.
    /// The pool never grows; this indicates spawn rate x lifetime exceeds
    /// the configured capacity.
    #[error("asteroid pool exhausted: all {capacity} instances are active")]
    PoolExhausted {
        /// Configured pool capacity.
        capacity: usize,
    },

    /// An interaction referenced an asteroid that is not in the active set,
    /// usually a tap landing after the asteroid was recycled. Safe to ignore;
    /// no state was mutated.
    #[error("interaction targets inactive asteroid {id}")]
    InvalidInteraction {
        /// Identity of the referenced asteroid slot.
        id: u32,
    },

    /// A configuration value was outside its valid range. Rejected at
    /// construction so the simulation never runs on bad tuning.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}
