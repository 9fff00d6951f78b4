//! Steadystep Engine - fixed-timestep 2D physics core in WASM
//!
//! Bounded pools of transforms, rigidbodies, physics objects and trigger
//! volumes, advanced at a constant tick rate decoupled from the host's frame
//! rate, with interpolated render positions.
//!
//! Architecture:
//! - core/        - Math, handles, logging
//! - domain/      - Config, materials, shapes, errors
//! - systems/     - Pools and per-tick passes (integration, collision, triggers)
//! - simulation/  - PhysicsWorld orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    crate::core::logging::init_logger(level);
    log::info!("steadystep engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::handle::{ObjectHandle, PoolTag, RigidbodyHandle, TransformHandle, TriggerHandle};
pub use crate::core::math::{Bounds, Vec3};
pub use crate::domain::config::{Material, PhysicsConfig, PhysicsSettings};
pub use crate::domain::error::PhysicsError;
pub use crate::domain::shape::{Collider, CollisionShape};
pub use crate::simulation::{DebugShape, DebugShapeKind, PerfStats, PhysicsWorld, World};
pub use crate::systems::object::ObjectMut;
pub use crate::systems::trigger::TriggerState;
