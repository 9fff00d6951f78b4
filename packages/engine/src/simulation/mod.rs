//! PhysicsWorld - the fixed-timestep simulation context
//!
//! Owns every pool, the trigger history and the accumulator. All operations
//! go through a `&mut PhysicsWorld`, so exactly one writer touches physics
//! state at a time; hosts call `simulate` once per rendered frame and read
//! transform positions afterwards.
//!
//! Orchestration only: the passes themselves live in `systems/`.

use std::collections::HashMap;

use crate::core::handle::{ObjectHandle, RigidbodyHandle, TransformHandle, TriggerHandle};
use crate::core::math::Vec3;
use crate::domain::config::{Material, PhysicsConfig, PhysicsSettings};
use crate::domain::error::PhysicsError;
use crate::domain::shape::Collider;
use crate::systems::object::{ObjectMut, ObjectPool};
use crate::systems::rigid_body::RigidbodyPool;
use crate::systems::transform::TransformPool;
use crate::systems::trigger::{IntersectionHistory, TriggerPool};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/step_collisions.rs"]
mod step_collisions;
#[path = "step/step_triggers.rs"]
mod step_triggers;
#[path = "step/interpolate.rs"]
mod interpolate;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::{DebugShape, DebugShapeKind};

use perf_timer::PerfTimer;

/// The simulation world
pub struct PhysicsWorld {
    config: PhysicsConfig,
    materials: HashMap<String, Material>,

    transforms: TransformPool,
    bodies: RigidbodyPool,
    objects: ObjectPool,
    triggers: TriggerPool,
    history: IntersectionHistory,

    // State
    accumulator: f32,
    tick: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PhysicsWorld {
    /// Create a world with the default configuration
    pub fn new() -> Self {
        init::create_world(PhysicsConfig::default(), HashMap::new())
    }

    pub fn with_config(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(init::create_world(config, HashMap::new()))
    }

    /// Build from a settings JSON document (config + named materials)
    pub fn from_settings_json(json: &str) -> Result<Self, PhysicsError> {
        let settings = PhysicsSettings::from_json(json)?;
        log::info!("loaded physics settings with {} materials", settings.materials.len());
        Ok(init::create_world(settings.config, settings.materials))
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn material(&self, name: &str) -> Option<&Material> {
        settings::material(self, name)
    }

    /// Register or replace a named material
    pub fn insert_material(&mut self, name: impl Into<String>, material: Material) {
        settings::insert_material(self, name.into(), material);
    }

    /// Enable or disable per-call perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last `simulate` call's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === ENTITY API ===

    /// Create a transform.
    ///
    /// # Panics
    /// When the transform pool is full.
    pub fn spawn_transform(&mut self, position: Vec3) -> TransformHandle {
        fatal(self.try_spawn_transform(position))
    }

    pub fn try_spawn_transform(&mut self, position: Vec3) -> Result<TransformHandle, PhysicsError> {
        commands::spawn_transform(self, position)
    }

    /// Create a physics object on an existing transform. Its rigidbody starts
    /// at the transform's position, at rest and immovable.
    ///
    /// # Panics
    /// When the object pool is full.
    pub fn spawn_object(&mut self, transform: TransformHandle, collider: Collider) -> ObjectHandle {
        fatal(self.try_spawn_object(transform, collider))
    }

    pub fn try_spawn_object(
        &mut self,
        transform: TransformHandle,
        collider: Collider,
    ) -> Result<ObjectHandle, PhysicsError> {
        commands::spawn_object(self, transform, collider)
    }

    /// Create a trigger volume anchored on an existing transform.
    ///
    /// # Panics
    /// When the trigger pool is full.
    pub fn spawn_trigger(&mut self, transform: TransformHandle, collider: Collider) -> TriggerHandle {
        fatal(self.try_spawn_trigger(transform, collider))
    }

    pub fn try_spawn_trigger(
        &mut self,
        transform: TransformHandle,
        collider: Collider,
    ) -> Result<TriggerHandle, PhysicsError> {
        commands::spawn_trigger(self, transform, collider)
    }

    pub fn set_trigger_enter_callback<F>(&mut self, trigger: TriggerHandle, callback: F)
    where
        F: FnMut(&mut ObjectMut<'_>) + 'static,
    {
        self.triggers.set_enter_callback(trigger, Box::new(callback));
    }

    pub fn set_trigger_stay_callback<F>(&mut self, trigger: TriggerHandle, callback: F)
    where
        F: FnMut(&mut ObjectMut<'_>) + 'static,
    {
        self.triggers.set_stay_callback(trigger, Box::new(callback));
    }

    pub fn set_trigger_exit_callback<F>(&mut self, trigger: TriggerHandle, callback: F)
    where
        F: FnMut(&mut ObjectMut<'_>) + 'static,
    {
        self.triggers.set_exit_callback(trigger, Box::new(callback));
    }

    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    // === TRANSFORMS ===

    pub fn transform_position(&self, transform: TransformHandle) -> Vec3 {
        self.transforms.position(transform)
    }

    /// Move a transform. For physics objects this only affects rendering
    /// until the next interpolation; use `reset_body` to teleport.
    pub fn set_transform_position(&mut self, transform: TransformHandle, position: Vec3) {
        self.transforms.set_position(transform, position);
    }

    // === OBJECTS ===

    pub fn object_transform(&self, object: ObjectHandle) -> TransformHandle {
        self.objects.transform(object)
    }

    pub fn object_collider(&self, object: ObjectHandle) -> &Collider {
        self.objects.collider(object)
    }

    /// Render-facing position of an object
    pub fn object_position(&self, object: ObjectHandle) -> Vec3 {
        self.transforms.position(self.objects.transform(object))
    }

    pub fn rigidbody(&self, object: ObjectHandle) -> RigidbodyHandle {
        self.objects.rigidbody(object)
    }

    pub fn rigidbodies(&self) -> &RigidbodyPool {
        &self.bodies
    }

    pub fn rigidbodies_mut(&mut self) -> &mut RigidbodyPool {
        &mut self.bodies
    }

    pub fn velocity(&self, object: ObjectHandle) -> Vec3 {
        self.bodies.velocity(self.objects.rigidbody(object))
    }

    pub fn set_velocity(&mut self, object: ObjectHandle, velocity: Vec3) {
        commands::set_velocity(self, object, velocity);
    }

    pub fn set_force(&mut self, object: ObjectHandle, force: Vec3) {
        commands::set_force(self, object, force);
    }

    pub fn add_force(&mut self, object: ObjectHandle, force: Vec3) {
        commands::add_force(self, object, force);
    }

    /// Teleport an object to `position` at rest (transform included)
    pub fn reset_body(&mut self, object: ObjectHandle, position: Vec3) {
        commands::reset_body(self, object, position);
    }

    pub fn apply_material(&mut self, object: ObjectHandle, material: &Material) {
        commands::apply_material(self, object, material);
    }

    /// Apply a material from the loaded settings; `false` if the name is unknown
    pub fn apply_named_material(&mut self, object: ObjectHandle, name: &str) -> bool {
        commands::apply_named_material(self, object, name)
    }

    /// Mutable view of an object, the same one trigger callbacks receive
    pub fn object_mut(&mut self, object: ObjectHandle) -> ObjectMut<'_> {
        ObjectMut::new(object, &self.objects, &mut self.transforms, &mut self.bodies)
    }

    // === TRIGGERS ===

    pub fn trigger_transform(&self, trigger: TriggerHandle) -> TransformHandle {
        self.triggers.transform(trigger)
    }

    pub fn trigger_collider(&self, trigger: TriggerHandle) -> &Collider {
        self.triggers.collider(trigger)
    }

    /// Whether the pair intersected during the last completed tick
    pub fn was_intersecting(&self, trigger: TriggerHandle, object: ObjectHandle) -> bool {
        self.history.was_intersecting(trigger, object)
    }

    // === SIMULATION ===

    /// Advance the simulation by a frame's elapsed time (seconds).
    ///
    /// Runs zero or more fixed ticks and then interpolates render positions.
    /// Returns the number of ticks executed.
    pub fn simulate(&mut self, delta_time: f32) -> u32 {
        step::simulate(self, delta_time)
    }

    /// Fixed ticks executed since creation
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Leftover time not yet simulated, always below one fixed timestep
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Blend factor used by the last interpolation pass
    pub fn interpolation_alpha(&self) -> f32 {
        self.accumulator / self.config.fixed_timestep
    }

    /// World-space collider outlines for a debug overlay
    pub fn debug_shapes(&self) -> Vec<DebugShape> {
        render_extract::collect_debug_shapes(self)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool exhaustion is a programming error: report it and abort.
fn fatal<T>(result: Result<T, PhysicsError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("{err}");
            panic!("{err}");
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
