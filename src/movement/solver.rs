//! Movement domain: velocity changes applied to the character body.

use bevy::prelude::*;

use crate::movement::{Facing, MovementTuning};

/// Converts movement intent into velocity changes.
///
/// The body is passed in as its velocity; the solver itself only keeps the
/// ground sensor edge and the sprint flag.
#[derive(Debug, Clone)]
pub struct MovementSolver {
    tuning: MovementTuning,
    grounded: bool,
    was_grounded: bool,
    sprinting: bool,
}

impl MovementSolver {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            grounded: false,
            was_grounded: false,
            sprinting: false,
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Record this tick's ground sensor sample.
    pub fn sense(&mut self, grounded: bool) {
        self.was_grounded = self.grounded;
        self.grounded = grounded;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// True only on the tick the sensor went from airborne to grounded.
    pub fn just_landed(&self) -> bool {
        self.grounded && !self.was_grounded
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Set horizontal velocity from an axis value.
    pub fn move_horizontal(&self, velocity: &mut Vec2, axis_x: f32, speed_multiplier: f32) {
        velocity.x = axis_x * self.tuning.move_speed * speed_multiplier;
    }

    pub fn jump(&self, velocity: &mut Vec2) {
        velocity.y = self.tuning.jump_speed;
    }

    /// Shorten the arc when jump is released while rising.
    pub fn cut_jump(&self, velocity: &mut Vec2) {
        if velocity.y > 0.0 {
            velocity.y *= self.tuning.jump_cut_factor;
        }
    }

    pub fn apply_gravity(&self, velocity: &mut Vec2, dt: f32) {
        velocity.y -= self.tuning.gravity * dt;
    }

    /// Extra gravity on top of [`Self::apply_gravity`]: always while falling,
    /// and while rising once jump is no longer held.
    pub fn apply_fall_gravity(&self, velocity: &mut Vec2, jump_held: bool, dt: f32) {
        if velocity.y < 0.0 {
            velocity.y -= self.tuning.gravity * (self.tuning.fall_multiplier - 1.0) * dt;
        } else if velocity.y > 0.0 && !jump_held {
            velocity.y -= self.tuning.gravity * (self.tuning.low_jump_multiplier - 1.0) * dt;
        }
    }

    /// Sprint direction: input direction when there is any, facing otherwise.
    pub fn sprint_direction(&self, axis: Vec2, facing: Facing, dead_zone: f32) -> f32 {
        if axis.length() > dead_zone && axis.x.abs() > f32::EPSILON {
            axis.x.signum()
        } else {
            facing.sign()
        }
    }

    /// Start a sprint and override velocity. Ignored while already sprinting.
    pub fn sprint(&mut self, velocity: &mut Vec2, direction: f32) {
        if self.sprinting {
            return;
        }
        self.sprinting = true;
        self.apply_sprint_velocity(velocity, direction);
    }

    pub fn apply_sprint_velocity(&self, velocity: &mut Vec2, direction: f32) {
        *velocity = Vec2::new(direction.signum() * self.tuning.sprint_speed, 0.0);
    }

    pub fn end_sprint(&mut self) {
        self.sprinting = false;
    }

    pub fn halt_horizontal(&self, velocity: &mut Vec2) {
        velocity.x = 0.0;
    }
}
