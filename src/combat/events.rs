//! Combat domain: strike requests and damage messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::content::HitboxDef;
use crate::movement::Facing;

/// A box strike queued by an attack or skill. Resolved by the combat systems
/// relative to the owner's position when it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct StrikeRequest {
    /// Attack or skill id that produced the strike
    pub source_id: String,
    pub damage: f32,
    pub knockback: f32,
    pub hitbox: HitboxDef,
    pub facing: Facing,
    /// Seconds to wait before the hitbox appears
    pub delay: f32,
}

impl StrikeRequest {
    /// Hitbox center relative to the owner, mirrored by facing.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.hitbox.offset_x * self.facing.sign(), self.hitbox.offset_y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.hitbox.width, self.hitbox.height)
    }
}

/// A projectile launch queued by a skill.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileLaunch {
    pub source_id: String,
    pub damage: f32,
    pub speed: f32,
    pub lifetime: f32,
    pub max_penetration: u32,
    /// Spawn point relative to the owner, already mirrored by facing
    pub offset: Vec2,
    pub facing: Facing,
}

impl ProjectileLaunch {
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.speed * self.facing.sign(), 0.0)
    }
}

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
