//! Collision - narrow-phase detection and impulse resolution
//!
//! Detection is exhaustive over same-shape pairs (no broad phase):
//! - Circle vs Circle: center distance against the radius sum
//! - AABB vs AABB: per-axis overlap, least-penetration axis wins
//! - AABB vs Circle: not implemented, any such pair panics
//!
//! Resolution applies a restitution impulse along the contact normal and a
//! small positional correction to keep resting bodies from sinking.

mod detect;
mod resolve;
mod types;

pub use detect::{aabb_overlap, circle_distance_squared, evaluate_collision};
pub use resolve::{resolve_collision, CORRECTION_PERCENT, PENETRATION_SLACK};
pub use types::{CollisionData, Contact};
