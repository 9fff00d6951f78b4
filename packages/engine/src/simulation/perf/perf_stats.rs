use wasm_bindgen::prelude::*;

use crate::systems::trigger::TriggerState;

/// Counters for one `simulate` call.
///
/// Timings accumulate over every tick the call ran.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) simulate_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) trigger_ms: f64,
    pub(super) interpolate_ms: f64,

    pub(super) ticks: u32,
    pub(super) clamped_delta: bool,
    pub(super) pairs_tested: u32,
    pub(super) contacts: u32,
    pub(super) contacts_resolved: u32,
    pub(super) trigger_enters: u32,
    pub(super) trigger_stays: u32,
    pub(super) trigger_exits: u32,

    pub(super) object_count: u32,
    pub(super) trigger_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn count_trigger(&mut self, state: TriggerState) {
        match state {
            TriggerState::Enter => self.trigger_enters += 1,
            TriggerState::Stay => self.trigger_stays += 1,
            TriggerState::Exit => self.trigger_exits += 1,
            TriggerState::None => {}
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn simulate_ms(&self) -> f64 { self.simulate_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn trigger_ms(&self) -> f64 { self.trigger_ms }
    #[wasm_bindgen(getter)]
    pub fn interpolate_ms(&self) -> f64 { self.interpolate_ms }
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn clamped_delta(&self) -> bool { self.clamped_delta }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn trigger_enters(&self) -> u32 { self.trigger_enters }
    #[wasm_bindgen(getter)]
    pub fn trigger_stays(&self) -> u32 { self.trigger_stays }
    #[wasm_bindgen(getter)]
    pub fn trigger_exits(&self) -> u32 { self.trigger_exits }
    #[wasm_bindgen(getter)]
    pub fn object_count(&self) -> u32 { self.object_count }
    #[wasm_bindgen(getter)]
    pub fn trigger_count(&self) -> u32 { self.trigger_count }
}
