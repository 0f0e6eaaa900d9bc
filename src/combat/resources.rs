//! Combat domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CombatTuning {
    /// Seconds without an attack before every combo index returns to 0
    pub combo_reset_window: f32,
    /// Seconds after an attack starts during which a pending press chains the next one
    pub combo_window: f32,
    /// Fraction of an attack's duration after which it may be interrupted
    pub interrupt_threshold: f32,
    pub invincibility_time: f32,
    /// Hurt animation length forced by damage; 0 disables it
    pub hurt_stun: f32,
    pub max_health: f32,
    pub skill_slot_count: usize,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            combo_reset_window: 1.5,
            combo_window: 0.5,
            interrupt_threshold: 0.7,
            invincibility_time: 1.0,
            hurt_stun: 0.0,
            max_health: 100.0,
            skill_slot_count: 7,
        }
    }
}
