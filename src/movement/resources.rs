//! Movement domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Locomotion tuning in meters and seconds.
#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_speed: f32,
    /// Downward acceleration applied by the solver (the body has no engine gravity)
    pub gravity: f32,
    /// Gravity multiplier while descending
    pub fall_multiplier: f32,
    /// Gravity multiplier while ascending with jump released
    pub low_jump_multiplier: f32,
    /// Factor applied to upward velocity by a jump cut
    pub jump_cut_factor: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Horizontal control while airborne, relative to ground speed
    pub air_control_factor: f32,
    pub sprint_speed: f32,
    pub sprint_duration: f32,
    pub sprint_cooldown: f32,
    pub ground_check_radius: f32,
    /// Offset of the ground probe below the body center
    pub ground_check_offset: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_speed: 16.0,
            gravity: 9.81 * 3.0,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            jump_cut_factor: 0.5,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            air_control_factor: 0.8,
            sprint_speed: 20.0,
            sprint_duration: 0.15,
            sprint_cooldown: 1.0,
            ground_check_radius: 0.2,
            ground_check_offset: 0.75,
        }
    }
}

impl MovementTuning {
    /// Apex height of an uncut jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }
}
