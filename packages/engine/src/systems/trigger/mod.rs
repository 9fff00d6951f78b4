//! Triggers - observation-only volumes
//!
//! Each tick every (trigger, object) pair is tested for intersection and
//! compared against the previous tick's result, producing one of
//! NONE / EXIT / ENTER / STAY. The matching callback, if registered, runs
//! synchronously with a mutable view of the object.

mod classify;
mod history;
mod pool;

pub use classify::{intersects, TriggerState};
pub use history::IntersectionHistory;
pub use pool::{TriggerCallback, TriggerPool};
