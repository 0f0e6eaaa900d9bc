//! Actions domain: activity states, transition requests and per-entry scratch.

use serde::Serialize;

use crate::content::MotionPolicy;

/// The one activity the character is performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ActivityState {
    #[default]
    Idle,
    Moving,
    Jumping,
    Falling,
    Attacking,
    Sprinting,
    UsingSkill,
    SpecialAnimation,
}

/// A requested state change, carrying what the target state needs on entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Idle,
    Moving,
    Jumping,
    Falling,
    Attacking,
    Sprinting,
    UsingSkill { slot: usize },
    SpecialAnimation { trigger: String, duration: f32 },
}

impl Transition {
    pub fn target(&self) -> ActivityState {
        match self {
            Transition::Idle => ActivityState::Idle,
            Transition::Moving => ActivityState::Moving,
            Transition::Jumping => ActivityState::Jumping,
            Transition::Falling => ActivityState::Falling,
            Transition::Attacking => ActivityState::Attacking,
            Transition::Sprinting => ActivityState::Sprinting,
            Transition::UsingSkill { .. } => ActivityState::UsingSkill,
            Transition::SpecialAnimation { .. } => ActivityState::SpecialAnimation,
        }
    }
}

/// Data reset on every state entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StateScratch {
    /// Controller clock at entry
    pub entered_at: f32,
    /// Length of timed states; unused otherwise
    pub duration: f32,
    /// Set when the state has nothing left to do (missing data, zero duration)
    pub finished: bool,
    pub motion: MotionPolicy,
    pub entered_airborne: bool,
    pub sprint_direction: f32,
    pub jump_cut: bool,
    pub skill_slot: Option<usize>,
    pub action_id: Option<String>,
    pub trigger: Option<String>,
}

impl StateScratch {
    pub fn enter(now: f32, airborne: bool) -> Self {
        Self {
            entered_at: now,
            entered_airborne: airborne,
            ..Self::default()
        }
    }

    pub fn elapsed(&self, now: f32) -> f32 {
        (now - self.entered_at).max(0.0)
    }

    /// Fraction of the duration elapsed. Zero or negative durations count as done.
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.elapsed(now) / self.duration
    }

    pub fn is_done(&self, now: f32) -> bool {
        self.finished || self.progress(now) >= 1.0
    }
}
