//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::CombatTuning;
use crate::input::InputTuning;
use crate::movement::MovementTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Shared building blocks
// ============================================================================

/// Box in front of the character, mirrored by facing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct HitboxDef {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for HitboxDef {
    fn default() -> Self {
        Self {
            width: 1.5,
            height: 1.0,
            offset_x: 1.0,
            offset_y: 0.0,
        }
    }
}

/// How an attack or skill treats the body's momentum while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MotionPolicy {
    pub can_move_while_active: bool,
    pub movement_speed_modifier: f32,
    /// Zero horizontal velocity when starting on the ground
    pub halt_momentum_on_ground: bool,
    /// Hold vertical velocity and damp control when starting airborne
    pub stall_in_air: bool,
    pub air_stall_vertical_velocity: f32,
    /// 0 = no horizontal control while stalled, 1 = full
    pub air_stall_control_dampening: f32,
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self {
            can_move_while_active: false,
            movement_speed_modifier: 0.5,
            halt_momentum_on_ground: true,
            stall_in_air: true,
            air_stall_vertical_velocity: -2.0,
            air_stall_control_dampening: 0.5,
        }
    }
}

// ============================================================================
// Movesets (movesets.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct AttackDef {
    pub id: String,
    pub duration: f32,
    pub damage: f32,
    #[serde(default)]
    pub knockback: f32,
    #[serde(default)]
    pub hitbox: HitboxDef,
    #[serde(default)]
    pub motion: MotionPolicy,
}

/// Six independent combo sequences, one per attack category.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovesetDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ground_neutral: Vec<AttackDef>,
    #[serde(default)]
    pub ground_up: Vec<AttackDef>,
    #[serde(default)]
    pub ground_down: Vec<AttackDef>,
    #[serde(default)]
    pub air_neutral: Vec<AttackDef>,
    #[serde(default)]
    pub air_up: Vec<AttackDef>,
    #[serde(default)]
    pub air_down: Vec<AttackDef>,
}

impl MovesetDef {
    /// Sequences in category order: ground neutral/up/down, air neutral/up/down.
    pub fn sequences(&self) -> [&Vec<AttackDef>; 6] {
        [
            &self.ground_neutral,
            &self.ground_up,
            &self.ground_down,
            &self.air_neutral,
            &self.air_up,
            &self.air_down,
        ]
    }

    pub fn attacks(&self) -> impl Iterator<Item = &AttackDef> {
        self.sequences().into_iter().flatten()
    }
}

// ============================================================================
// Skills (skills.ron)
// ============================================================================

/// Where a skill may be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum SkillUsage {
    #[default]
    Anywhere,
    GroundOnly,
    AirOnly,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub enum SkillEffect {
    /// Box strike in front of the character
    Strike {
        damage: f32,
        knockback: f32,
        hitbox: HitboxDef,
    },
    /// Velocity burst along facing, then a strike after `strike_delay`
    DashStrike {
        speed: f32,
        damage: f32,
        knockback: f32,
        hitbox: HitboxDef,
        strike_delay: f32,
    },
    /// Launch a projectile along facing
    Projectile {
        damage: f32,
        speed: f32,
        lifetime: f32,
        /// Extra targets the projectile passes through (0 = stops at first hit)
        max_penetration: u32,
        spawn_offset_x: f32,
        spawn_offset_y: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct SkillDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cooldown: f32,
    pub duration: f32,
    #[serde(default)]
    pub usage: SkillUsage,
    #[serde(default)]
    pub motion: MotionPolicy,
    pub effect: SkillEffect,
}

impl SkillDef {
    /// The skill's own usability rule.
    pub fn can_use(&self, grounded: bool) -> bool {
        match self.usage {
            SkillUsage::Anywhere => true,
            SkillUsage::GroundOnly => grounded,
            SkillUsage::AirOnly => !grounded,
        }
    }
}

// ============================================================================
// Loadouts (loadouts.ron)
// ============================================================================

/// A moveset plus the skills equipped in each slot.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LoadoutDef {
    pub id: String,
    pub moveset_id: String,
    pub slot_count: usize,
    /// Skill id per slot; `None` leaves the slot empty
    pub skills: Vec<Option<String>>,
}

// ============================================================================
// Action Defaults (action_defaults.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize, Reflect, Resource)]
pub struct ActionDefaults {
    pub schema_version: u32,
    pub default_loadout: String,
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub combat: CombatTuning,
    #[serde(default)]
    pub input: InputTuning,
}
