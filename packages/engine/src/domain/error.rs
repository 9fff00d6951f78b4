//! Error type for the recoverable surfaces of the engine.
//!
//! Most failures inside the physics core are programming errors and panic
//! (unsupported shape pairs, out-of-range handles). Capacity exhaustion panics
//! through `spawn_*` as well, but is also reachable as a value through the
//! `try_spawn_*` variants.

use std::fmt;

use crate::core::handle::PoolTag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhysicsError {
    /// A fixed-capacity pool is full
    CapacityExceeded {
        pool: PoolTag,
        limit: usize,
    },
    /// A configuration value is out of range
    InvalidConfig {
        reason: &'static str,
    },
    /// Settings JSON failed to parse
    InvalidSettings(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { pool, limit } => {
                write!(f, "{pool} pool exceeded max count (limit={limit})")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid physics config: {reason}"),
            Self::InvalidSettings(msg) => write!(f, "invalid physics settings: {msg}"),
        }
    }
}

impl std::error::Error for PhysicsError {}
