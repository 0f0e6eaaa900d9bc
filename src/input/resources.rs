//! Input domain: tuning for command handling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct InputTuning {
    /// Seconds an unconsumed press stays pending
    pub press_lifetime: f32,
    /// Axis magnitude below which input counts as zero
    pub dead_zone: f32,
    /// Vertical axis magnitude that selects an up/down attack
    pub directional_threshold: f32,
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            press_lifetime: 0.25,
            dead_zone: 0.1,
            directional_threshold: 0.5,
        }
    }
}
