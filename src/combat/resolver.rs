//! Combat domain: combos, skills and the single active action.

use bevy::prelude::*;
use serde::Serialize;

use crate::actions::{ActionFeedback, ActionOutbox};
use crate::combat::{ComboCategory, ComboResolver, ProjectileLaunch, SkillBank, StrikeRequest};
use crate::content::{MotionPolicy, MovesetDef, SkillDef, SkillEffect};
use crate::movement::Facing;

/// What started the active action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionSource {
    Attack(ComboCategory),
    Skill(usize),
}

/// The one attack or skill currently in progress.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveAction {
    pub id: String,
    pub source: ActionSource,
    /// Clock time at which the action's duration runs out
    pub ends_at: f32,
}

/// What the state machine needs to drive an action that just started.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionStart {
    pub id: String,
    pub duration: f32,
    pub motion: MotionPolicy,
    /// Horizontal burst along facing, for dash skills
    pub dash_speed: Option<f32>,
}

/// Owns combo progress, skill cooldowns and the active action. All mutation
/// goes through these methods.
#[derive(Debug, Clone)]
pub struct CombatResolver {
    combos: ComboResolver,
    skills: SkillBank,
    active: Option<ActiveAction>,
}

impl CombatResolver {
    pub fn new(combos: ComboResolver, skills: SkillBank) -> Self {
        Self {
            combos,
            skills,
            active: None,
        }
    }

    pub fn from_moveset(moveset: &MovesetDef, reset_window: f32, slot_count: usize) -> Self {
        Self::new(
            ComboResolver::new(moveset, reset_window),
            SkillBank::new(slot_count),
        )
    }

    /// Resolve and start the next attack in `category`.
    ///
    /// Any active action is ended first. Returns `None` when the category has
    /// no attack to offer.
    pub fn perform_attack(
        &mut self,
        category: ComboCategory,
        now: f32,
        facing: Facing,
        outbox: &mut ActionOutbox,
    ) -> Option<ActionStart> {
        self.end_active(outbox);

        let resolved = self.combos.perform_attack(category, now)?;
        let attack = resolved.attack;
        let duration = attack.duration.max(0.0);

        outbox.strikes.push(StrikeRequest {
            source_id: attack.id.clone(),
            damage: attack.damage,
            knockback: attack.knockback,
            hitbox: attack.hitbox,
            facing,
            delay: 0.0,
        });
        outbox.feedback.push(ActionFeedback::AttackTriggered {
            category,
            id: attack.id.clone(),
        });

        self.active = Some(ActiveAction {
            id: attack.id.clone(),
            source: ActionSource::Attack(category),
            ends_at: now + duration,
        });

        Some(ActionStart {
            id: attack.id,
            duration,
            motion: attack.motion,
            dash_speed: None,
        })
    }

    pub fn can_use_skill(&self, slot: usize, grounded: bool) -> bool {
        self.skills.can_use(slot, grounded)
    }

    /// Start the skill in `slot` if it is usable.
    ///
    /// On success the slot's cooldown is armed and every combo index resets.
    pub fn use_skill(
        &mut self,
        slot: usize,
        grounded: bool,
        now: f32,
        facing: Facing,
        outbox: &mut ActionOutbox,
    ) -> Option<ActionStart> {
        if !self.skills.can_use(slot, grounded) {
            return None;
        }
        let def: SkillDef = self.skills.skill(slot)?.clone();

        self.end_active(outbox);
        self.skills.begin_cooldown(slot);
        self.combos.reset_all();

        let duration = def.duration.max(0.0);
        let mut dash_speed = None;

        match def.effect {
            SkillEffect::Strike {
                damage,
                knockback,
                hitbox,
            } => outbox.strikes.push(StrikeRequest {
                source_id: def.id.clone(),
                damage,
                knockback,
                hitbox,
                facing,
                delay: 0.0,
            }),
            SkillEffect::DashStrike {
                speed,
                damage,
                knockback,
                hitbox,
                strike_delay,
            } => {
                dash_speed = Some(speed);
                outbox.strikes.push(StrikeRequest {
                    source_id: def.id.clone(),
                    damage,
                    knockback,
                    hitbox,
                    facing,
                    delay: strike_delay.max(0.0),
                });
            }
            SkillEffect::Projectile {
                damage,
                speed,
                lifetime,
                max_penetration,
                spawn_offset_x,
                spawn_offset_y,
            } => outbox.projectiles.push(ProjectileLaunch {
                source_id: def.id.clone(),
                damage,
                speed,
                lifetime,
                max_penetration,
                offset: Vec2::new(spawn_offset_x * facing.sign(), spawn_offset_y),
                facing,
            }),
        }

        outbox.feedback.push(ActionFeedback::SkillActivated {
            slot,
            id: def.id.clone(),
        });

        self.active = Some(ActiveAction {
            id: def.id.clone(),
            source: ActionSource::Skill(slot),
            ends_at: now + duration,
        });

        Some(ActionStart {
            id: def.id,
            duration,
            motion: def.motion,
            dash_speed,
        })
    }

    /// End the active action, if any. Emits `ActionEnded` at most once per action.
    pub fn end_active(&mut self, outbox: &mut ActionOutbox) {
        if let Some(action) = self.active.take() {
            outbox.feedback.push(ActionFeedback::ActionEnded { id: action.id });
        }
    }

    pub fn reset_all_combos(&mut self) {
        self.combos.reset_all();
    }

    pub fn equip_skill(&mut self, def: SkillDef, slot: usize) -> bool {
        self.skills.equip(def, slot)
    }

    /// Cooldowns and the combo reset sweep. Runs every logic tick.
    pub fn tick(&mut self, dt: f32, now: f32) {
        self.skills.tick(dt);
        self.combos.sweep(now);
    }

    pub fn combos(&self) -> &ComboResolver {
        &self.combos
    }

    pub fn skills(&self) -> &SkillBank {
        &self.skills
    }

    pub fn active(&self) -> Option<&ActiveAction> {
        self.active.as_ref()
    }
}
