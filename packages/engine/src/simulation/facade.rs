use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::core::handle::{ObjectHandle, TransformHandle, TriggerHandle};
use crate::core::math::Vec3;
use crate::domain::error::PhysicsError;
use crate::domain::shape::Collider;
use crate::systems::object::ObjectMut;
use crate::systems::trigger::TriggerState;

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

/// Trigger events recorded during `simulate`, drained by JS afterwards.
type EventQueue = Rc<RefCell<Vec<u32>>>;

/// JS-facing physics world.
///
/// Handles cross the boundary as plain `u32` ids. Trigger callbacks are not
/// forwarded into JS mid-tick; each transition is queued as a
/// `[trigger, object, state]` triple for `drain_trigger_events`.
#[wasm_bindgen]
pub struct World {
    core: PhysicsWorld,
    events: EventQueue,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_core(PhysicsWorld::new())
    }

    /// Create a world from a settings JSON document
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: String) -> Result<World, JsValue> {
        let core = PhysicsWorld::from_settings_json(&json).map_err(to_js)?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn transform_count(&self) -> u32 { self.core.transform_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> u32 { self.core.object_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn trigger_count(&self) -> u32 { self.core.trigger_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick_count() }

    /// Enable or disable per-call perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last `simulate` call's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === Entities ===

    pub fn spawn_transform(&mut self, x: f32, y: f32, z: f32) -> Result<u32, JsValue> {
        let handle = self.core.try_spawn_transform(Vec3::new(x, y, z)).map_err(to_js)?;
        Ok(handle.index() as u32)
    }

    pub fn spawn_box_object(
        &mut self,
        transform: u32,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Result<u32, JsValue> {
        self.spawn_object(transform, Collider::aabb(left, top, right, bottom))
    }

    pub fn spawn_circle_object(&mut self, transform: u32, radius: f32) -> Result<u32, JsValue> {
        self.spawn_object(transform, Collider::circle(radius))
    }

    pub fn spawn_box_trigger(
        &mut self,
        transform: u32,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Result<u32, JsValue> {
        self.spawn_trigger(transform, Collider::aabb(left, top, right, bottom))
    }

    pub fn spawn_circle_trigger(&mut self, transform: u32, radius: f32) -> Result<u32, JsValue> {
        self.spawn_trigger(transform, Collider::circle(radius))
    }

    // === Bodies ===

    pub fn set_velocity(&mut self, object: u32, x: f32, y: f32, z: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        self.core.set_velocity(object, Vec3::new(x, y, z));
        true
    }

    pub fn set_force(&mut self, object: u32, x: f32, y: f32, z: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        self.core.set_force(object, Vec3::new(x, y, z));
        true
    }

    pub fn add_force(&mut self, object: u32, x: f32, y: f32, z: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        self.core.add_force(object, Vec3::new(x, y, z));
        true
    }

    /// Non-positive mass makes the body immovable
    pub fn set_mass(&mut self, object: u32, mass: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        let body = self.core.rigidbody(object);
        self.core.rigidbodies_mut().set_mass(body, mass);
        true
    }

    pub fn set_dynamic_friction(&mut self, object: u32, value: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        let body = self.core.rigidbody(object);
        self.core.rigidbodies_mut().set_dynamic_friction(body, value);
        true
    }

    pub fn set_static_friction(&mut self, object: u32, value: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        let body = self.core.rigidbody(object);
        self.core.rigidbodies_mut().set_static_friction(body, value);
        true
    }

    pub fn set_restitution(&mut self, object: u32, value: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        let body = self.core.rigidbody(object);
        self.core.rigidbodies_mut().set_restitution(body, value);
        true
    }

    /// Teleport an object at rest
    pub fn reset_body(&mut self, object: u32, x: f32, y: f32, z: f32) -> bool {
        let Some(object) = self.object(object) else { return false };
        self.core.reset_body(object, Vec3::new(x, y, z));
        true
    }

    /// Apply a material loaded from settings
    pub fn apply_material(&mut self, object: u32, name: &str) -> bool {
        let Some(object) = self.object(object) else { return false };
        self.core.apply_named_material(object, name)
    }

    // === Simulation ===

    /// Advance by a frame delta in seconds; returns the number of fixed ticks run
    pub fn simulate(&mut self, delta_time: f32) -> u32 {
        self.core.simulate(delta_time)
    }

    /// `[x, y, z]`, or empty for an unknown transform
    pub fn transform_position(&self, transform: u32) -> Vec<f32> {
        match self.transform(transform) {
            Some(transform) => {
                let p = self.core.transform_position(transform);
                vec![p.x, p.y, p.z]
            }
            None => Vec::new(),
        }
    }

    pub fn set_transform_position(&mut self, transform: u32, x: f32, y: f32, z: f32) -> bool {
        let Some(transform) = self.transform(transform) else { return false };
        self.core.set_transform_position(transform, Vec3::new(x, y, z));
        true
    }

    /// Flat `[x, y, z]` render positions, one triple per object in id order
    pub fn object_positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.core.object_count() * 3);
        for object in self.core.objects.handles() {
            let p = self.core.object_position(object);
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        out
    }

    /// Take queued `[trigger, object, state]` triples (state: 1 exit, 2 enter, 3 stay)
    pub fn drain_trigger_events(&mut self) -> Vec<u32> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Flat `[kind, left, top, right, bottom]` per collider (kind: 0 body, 1 trigger)
    pub fn collider_debug_rects(&self) -> Vec<f32> {
        self.core
            .debug_shapes()
            .iter()
            .flat_map(|shape| shape.to_array())
            .collect()
    }
}

impl World {
    fn from_core(core: PhysicsWorld) -> Self {
        Self {
            core,
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Native access to the wrapped world
    pub fn core(&self) -> &PhysicsWorld {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.core
    }

    fn transform(&self, id: u32) -> Option<TransformHandle> {
        ((id as usize) < self.core.transform_count()).then(|| TransformHandle::from_index(id as usize))
    }

    fn object(&self, id: u32) -> Option<ObjectHandle> {
        ((id as usize) < self.core.object_count()).then(|| ObjectHandle::from_index(id as usize))
    }

    fn spawn_object(&mut self, transform: u32, collider: Collider) -> Result<u32, JsValue> {
        let transform = self.transform(transform).ok_or_else(|| unknown("transform", transform))?;
        let object = self.core.try_spawn_object(transform, collider).map_err(to_js)?;
        Ok(object.index() as u32)
    }

    fn spawn_trigger(&mut self, transform: u32, collider: Collider) -> Result<u32, JsValue> {
        let transform = self.transform(transform).ok_or_else(|| unknown("transform", transform))?;
        let trigger = self.core.try_spawn_trigger(transform, collider).map_err(to_js)?;
        self.queue_events(trigger);
        Ok(trigger.index() as u32)
    }

    fn queue_events(&mut self, trigger: TriggerHandle) {
        let id = trigger.index() as u32;
        self.core.set_trigger_enter_callback(trigger, push_event(&self.events, id, TriggerState::Enter));
        self.core.set_trigger_stay_callback(trigger, push_event(&self.events, id, TriggerState::Stay));
        self.core.set_trigger_exit_callback(trigger, push_event(&self.events, id, TriggerState::Exit));
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn push_event(events: &EventQueue, trigger: u32, state: TriggerState) -> impl FnMut(&mut ObjectMut<'_>) + 'static {
    let events = Rc::clone(events);
    let code = state.code() as u32;
    move |object| {
        events.borrow_mut().extend_from_slice(&[trigger, object.handle().index() as u32, code]);
    }
}

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn unknown(kind: &str, id: u32) -> JsValue {
    JsValue::from_str(&format!("unknown {kind} id {id}"))
}
