//! Combat domain: equippable skill slots with independent cooldowns.

use crate::content::SkillDef;

/// Upper bound on skill slots a loadout may configure.
pub const MAX_SKILL_SLOTS: usize = 7;

#[derive(Debug, Clone)]
pub struct SkillBank {
    slots: Vec<Option<SkillDef>>,
    cooldowns: Vec<f32>,
}

impl SkillBank {
    /// A bank of `slot_count` empty slots, clamped to `1..=MAX_SKILL_SLOTS`.
    pub fn new(slot_count: usize) -> Self {
        let count = slot_count.clamp(1, MAX_SKILL_SLOTS);
        Self {
            slots: vec![None; count],
            cooldowns: vec![0.0; count],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Put `def` in `slot` with a fresh cooldown. Out-of-range slots are rejected.
    pub fn equip(&mut self, def: SkillDef, slot: usize) -> bool {
        let Some(entry) = self.slots.get_mut(slot) else {
            return false;
        };
        *entry = Some(def);
        self.cooldowns[slot] = 0.0;
        true
    }

    pub fn skill(&self, slot: usize) -> Option<&SkillDef> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Remaining cooldown, 0 for unknown slots.
    pub fn cooldown(&self, slot: usize) -> f32 {
        self.cooldowns.get(slot).copied().unwrap_or(0.0)
    }

    pub fn cooldowns(&self) -> &[f32] {
        &self.cooldowns
    }

    pub fn can_use(&self, slot: usize, grounded: bool) -> bool {
        self.skill(slot)
            .is_some_and(|def| self.cooldown(slot) <= 0.0 && def.can_use(grounded))
    }

    /// Arm the slot's cooldown with the skill's configured value.
    pub fn begin_cooldown(&mut self, slot: usize) {
        let Some(cooldown) = self.skill(slot).map(|def| def.cooldown.max(0.0)) else {
            return;
        };
        self.cooldowns[slot] = cooldown;
    }

    pub fn tick(&mut self, dt: f32) {
        for cooldown in &mut self.cooldowns {
            *cooldown = (*cooldown - dt).max(0.0);
        }
    }
}
