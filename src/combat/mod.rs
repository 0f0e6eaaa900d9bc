//! Combat domain: combo and skill resolution, health, strikes and projectiles.

mod attacks;
mod combo;
mod components;
mod events;
mod health;
mod resolver;
mod resources;
mod skills;
mod systems;

pub use attacks::ComboCategory;
pub use combo::{ComboResolver, ResolvedAttack};
pub use components::{
    Hazard, Hitbox, HitboxLifetime, PendingStrike, Projectile, STRIKE_ACTIVE_TIME,
    TARGET_BASE_COLOR, Target,
};
pub use events::{DamageEvent, DeathEvent, ProjectileLaunch, StrikeRequest};
pub use health::{DamageResult, Damageable, Health};
pub use resolver::{ActionSource, ActionStart, ActiveAction, CombatResolver};
pub use resources::CombatTuning;
pub use skills::{MAX_SKILL_SLOTS, SkillBank};

pub(crate) use systems::{spawn_projectile, spawn_strike};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, apply_knockback, cleanup_expired_hitboxes, detect_hazard_contacts,
    detect_hitbox_collisions, fade_hit_flash, process_deaths, tick_pending_strikes,
};
use crate::core::ActionSystems;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    tick_pending_strikes,
                    detect_hitbox_collisions,
                    detect_hazard_contacts,
                    apply_damage,
                    apply_knockback,
                    process_deaths,
                    cleanup_expired_hitboxes,
                    fade_hit_flash,
                )
                    .chain()
                    .after(ActionSystems::Effects),
            );
    }
}
