//! Combat domain: health pool and the damage contract.

use bevy::prelude::*;
use serde::Serialize;

/// Health component for damageable entities
#[derive(Component, Debug, Clone, Serialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }
}

/// Outcome of one damage application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageResult {
    /// Target refused the hit (invincible or already dead)
    Ignored,
    Hurt { dealt: f32 },
    Killed { dealt: f32 },
}

impl DamageResult {
    pub fn dealt(self) -> f32 {
        match self {
            DamageResult::Ignored => 0.0,
            DamageResult::Hurt { dealt } | DamageResult::Killed { dealt } => dealt,
        }
    }
}

/// Anything a strike or projectile can hurt.
pub trait Damageable {
    fn can_be_damaged(&self) -> bool;
    fn take_damage(&mut self, amount: f32) -> DamageResult;
}

impl Damageable for Health {
    fn can_be_damaged(&self) -> bool {
        !self.is_dead()
    }

    fn take_damage(&mut self, amount: f32) -> DamageResult {
        if !Damageable::can_be_damaged(self) {
            return DamageResult::Ignored;
        }
        let dealt = Health::take_damage(self, amount);
        if self.is_dead() {
            DamageResult::Killed { dealt }
        } else {
            DamageResult::Hurt { dealt }
        }
    }
}
