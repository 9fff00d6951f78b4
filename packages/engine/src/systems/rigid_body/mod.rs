//! Rigidbody - simulation state of a physics object
//!
//! Bodies are stored column-wise (one array per field) and indexed by
//! `RigidbodyHandle`. Current/previous positions are the simulation truth;
//! the owning object's transform only receives the interpolated result.

mod integrate;
mod pool;

pub use integrate::integrate;
pub use pool::{inverse_mass_from, RigidbodyPool};
