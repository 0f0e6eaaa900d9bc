//! Core domain: countdown timers driven once per logic tick.

use serde::Serialize;

/// A countdown that never goes below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub fn arm(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    /// Advance by `dt`. Returns true on the tick the countdown reaches zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Every grace window and cooldown the action controller owns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimerBank {
    /// Jump is still allowed while this runs after leaving the ground
    pub coyote: Countdown,
    /// An early jump press fires on landing while this runs
    pub jump_buffer: Countdown,
    pub sprint_cooldown: Countdown,
    /// Post-hit window in which damage is ignored
    pub invincibility: Countdown,
    /// A pending attack press chains into the next attack while this runs
    pub combo_window: Countdown,
}

impl TimerBank {
    pub fn tick(&mut self, dt: f32) {
        self.coyote.tick(dt);
        self.jump_buffer.tick(dt);
        self.sprint_cooldown.tick(dt);
        self.invincibility.tick(dt);
        self.combo_window.tick(dt);
    }
}
