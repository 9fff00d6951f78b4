use crate::domain::config::Material;

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

pub(super) fn enable_perf_metrics(world: &mut PhysicsWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &PhysicsWorld) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn material<'a>(world: &'a PhysicsWorld, name: &str) -> Option<&'a Material> {
    world.materials.get(name)
}

pub(super) fn insert_material(world: &mut PhysicsWorld, name: String, material: Material) {
    if world.materials.insert(name.clone(), material).is_some() {
        log::debug!("material '{name}' replaced");
    }
}
