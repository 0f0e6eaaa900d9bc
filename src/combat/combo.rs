//! Combat domain: per-category combo progression.

use crate::combat::ComboCategory;
use crate::content::{AttackDef, MovesetDef};

/// The concrete attack chosen for one press.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttack {
    pub category: ComboCategory,
    /// Position in the sequence this attack was taken from
    pub step: usize,
    pub attack: AttackDef,
}

/// Six independent combo sequences sharing one "last attack" timestamp.
#[derive(Debug, Clone, Default)]
pub struct ComboResolver {
    sequences: [Vec<AttackDef>; 6],
    indices: [usize; 6],
    last_attack_time: Option<f32>,
    reset_window: f32,
}

impl ComboResolver {
    pub fn new(moveset: &MovesetDef, reset_window: f32) -> Self {
        Self {
            sequences: moveset.sequences().map(|seq| seq.clone()),
            indices: [0; 6],
            last_attack_time: None,
            reset_window,
        }
    }

    /// Resolver with no attacks at all. Every press resolves to nothing.
    pub fn empty(reset_window: f32) -> Self {
        Self {
            reset_window,
            ..Self::default()
        }
    }

    /// Resolve the next attack in `category` and advance its index.
    ///
    /// Every other category is reset first, even when this one has nothing to
    /// offer.
    pub fn perform_attack(&mut self, category: ComboCategory, now: f32) -> Option<ResolvedAttack> {
        let slot = category.index();
        for (i, index) in self.indices.iter_mut().enumerate() {
            if i != slot {
                *index = 0;
            }
        }

        let sequence = &self.sequences[slot];
        let step = self.indices[slot];
        let attack = sequence.get(step)?.clone();

        self.indices[slot] = (step + 1) % sequence.len();
        self.last_attack_time = Some(now);

        Some(ResolvedAttack {
            category,
            step,
            attack,
        })
    }

    /// Reset every index once the last attack is older than the reset window.
    pub fn sweep(&mut self, now: f32) {
        let Some(last) = self.last_attack_time else {
            return;
        };
        if now - last > self.reset_window {
            self.reset_all();
        }
    }

    pub fn reset_all(&mut self) {
        self.indices = [0; 6];
        self.last_attack_time = None;
    }

    pub fn index(&self, category: ComboCategory) -> usize {
        self.indices[category.index()]
    }

    pub fn indices(&self) -> [usize; 6] {
        self.indices
    }

    pub fn sequence_len(&self, category: ComboCategory) -> usize {
        self.sequences[category.index()].len()
    }
}
