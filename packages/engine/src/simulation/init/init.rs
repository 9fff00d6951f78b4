use std::collections::HashMap;

use crate::domain::config::{Material, PhysicsConfig};
use crate::systems::object::ObjectPool;
use crate::systems::rigid_body::RigidbodyPool;
use crate::systems::transform::TransformPool;
use crate::systems::trigger::{IntersectionHistory, TriggerPool};

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

/// Allocate every pool at full capacity. `config` must already be validated.
pub(super) fn create_world(config: PhysicsConfig, materials: HashMap<String, Material>) -> PhysicsWorld {
    log::info!(
        "physics world: {} transforms, {} objects, {} triggers, {:.2} Hz",
        config.max_transforms,
        config.max_objects,
        config.max_triggers,
        1.0 / config.fixed_timestep,
    );

    PhysicsWorld {
        transforms: TransformPool::new(config.max_transforms),
        // One rigidbody per object
        bodies: RigidbodyPool::new(config.max_objects),
        objects: ObjectPool::new(config.max_objects),
        triggers: TriggerPool::new(config.max_triggers),
        history: IntersectionHistory::new(config.max_triggers, config.max_objects),
        config,
        materials,
        accumulator: 0.0,
        tick: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
