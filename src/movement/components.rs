//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Anything that accepts hits from the player
    Target,
    /// Contact damage for the player
    Hazard,
    /// Player strikes and projectiles
    PlayerHitbox,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Result of the ground overlap test, refreshed once per frame.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundSensor {
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Facing plus the flip gate the active state may close.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Orientation {
    facing: Facing,
    can_flip: bool,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            facing: Facing::Right,
            can_flip: true,
        }
    }
}

impl Orientation {
    /// Face the direction of horizontal input, unless flipping is locked.
    pub fn update(&mut self, axis_x: f32, dead_zone: f32) {
        if axis_x > dead_zone {
            self.face(Facing::Right);
        } else if axis_x < -dead_zone {
            self.face(Facing::Left);
        }
    }

    pub fn face(&mut self, facing: Facing) {
        if self.can_flip {
            self.facing = facing;
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    pub fn can_flip(&self) -> bool {
        self.can_flip
    }

    pub fn set_can_flip(&mut self, can_flip: bool) {
        self.can_flip = can_flip;
    }
}
