//! Combat domain: hitbox, projectile and target components.

use bevy::prelude::*;

use crate::combat::StrikeRequest;

/// Seconds a strike hitbox stays active once spawned.
pub const STRIKE_ACTIVE_TIME: f32 = 0.1;

/// Hitbox - deals damage on contact with targets
#[derive(Component, Debug)]
pub struct Hitbox {
    pub source_id: String,
    pub damage: f32,
    pub knockback: f32,
    pub owner: Entity,
    pub hit_entities: Vec<Entity>,
}

#[derive(Component, Debug)]
pub struct HitboxLifetime(pub f32);

/// A strike waiting for its delay before the hitbox appears.
#[derive(Component, Debug)]
pub struct PendingStrike {
    pub owner: Entity,
    pub request: StrikeRequest,
    pub remaining: f32,
}

/// Moving hitbox launched by a skill.
#[derive(Component, Debug)]
pub struct Projectile {
    /// Further targets it may pass through before despawning
    pub penetration_left: u32,
    /// Set once the last allowed hit landed; the entity despawns this frame
    pub spent: bool,
}

/// Resting color of targets, restored after a hit flash.
pub const TARGET_BASE_COLOR: Srgba = Srgba::new(0.8, 0.8, 0.85, 1.0);

/// Marker for entities that accept player hits (training dummies).
#[derive(Component, Debug)]
pub struct Target;

/// Contact damage dealt to the player.
#[derive(Component, Debug)]
pub struct Hazard {
    pub damage: f32,
    pub knockback: f32,
}
