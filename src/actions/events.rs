//! Actions domain: feedback notifications and the per-tick outbox.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::actions::ActivityState;
use crate::combat::{ComboCategory, ProjectileLaunch, StrikeRequest};

/// Fire-and-forget notifications for animation, audio and UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionFeedback {
    StateEntered(ActivityState),
    StateExited(ActivityState),
    JumpTriggered,
    SprintStarted { direction: f32 },
    AttackTriggered { category: ComboCategory, id: String },
    SkillActivated { slot: usize, id: String },
    ActionEnded { id: String },
    HitLanded { target: Entity, amount: f32 },
    SpecialAnimation { trigger: String },
    Damaged { amount: f32 },
    Died,
}

#[derive(Debug, Clone)]
pub struct ActionFeedbackEvent {
    pub entity: Entity,
    pub feedback: ActionFeedback,
}

impl Message for ActionFeedbackEvent {}

/// Effects produced by one controller, drained by systems after the logic tick.
#[derive(Debug, Clone, Default)]
pub struct ActionOutbox {
    pub feedback: Vec<ActionFeedback>,
    pub strikes: Vec<StrikeRequest>,
    pub projectiles: Vec<ProjectileLaunch>,
}

impl ActionOutbox {
    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty() && self.strikes.is_empty() && self.projectiles.is_empty()
    }
}
