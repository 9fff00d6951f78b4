//! Systems: entity pools and the passes that run over them each tick.

pub mod collision;
pub mod object;
pub mod rigid_body;
pub mod transform;
pub mod trigger;
