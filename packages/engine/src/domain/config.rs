//! Physics configuration and material data.
//!
//! Everything here is plain serde data so the host can ship it inside its
//! settings JSON; unset fields fall back to the defaults below.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::PhysicsError;

pub const DEFAULT_MAX_TRANSFORMS: usize = 128;
pub const DEFAULT_MAX_OBJECTS: usize = 64;
pub const DEFAULT_MAX_TRIGGERS: usize = 64;
/// 144 Hz tick
pub const DEFAULT_FIXED_TIMESTEP: f32 = 1.0 / 144.0;
pub const DEFAULT_MAX_DELTA_TIME: f32 = 0.2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    pub max_transforms: usize,
    /// Also the rigidbody capacity: every object owns exactly one rigidbody
    pub max_objects: usize,
    pub max_triggers: usize,
    /// Seconds per simulated tick
    pub fixed_timestep: f32,
    /// Upper bound on the frame delta accepted by one `simulate` call
    pub max_delta_time: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_transforms: DEFAULT_MAX_TRANSFORMS,
            max_objects: DEFAULT_MAX_OBJECTS,
            max_triggers: DEFAULT_MAX_TRIGGERS,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            max_delta_time: DEFAULT_MAX_DELTA_TIME,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.max_transforms == 0 || self.max_objects == 0 || self.max_triggers == 0 {
            return Err(PhysicsError::InvalidConfig { reason: "pool capacities must be non-zero" });
        }
        if self.max_transforms > u32::MAX as usize
            || self.max_objects > u32::MAX as usize
            || self.max_triggers > u32::MAX as usize
        {
            return Err(PhysicsError::InvalidConfig { reason: "pool capacities must fit in u32" });
        }
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(PhysicsError::InvalidConfig { reason: "fixedTimestep must be positive" });
        }
        if !(self.max_delta_time.is_finite() && self.max_delta_time > 0.0) {
            return Err(PhysicsError::InvalidConfig { reason: "maxDeltaTime must be positive" });
        }
        Ok(())
    }
}

/// Per-body material properties
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Material {
    /// Non-positive mass means immovable
    pub mass: f32,
    pub dynamic_friction: f32,
    pub static_friction: f32,
    pub restitution: f32,
}

/// Settings document: world config plus a table of named materials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub config: PhysicsConfig,
    pub materials: HashMap<String, Material>,
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let settings: PhysicsSettings =
            serde_json::from_str(json).map_err(|e| PhysicsError::InvalidSettings(e.to_string()))?;
        settings.config.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
