//! Input domain: per-tick command snapshot consumed by the action controller.

use bevy::prelude::*;

use crate::combat::MAX_SKILL_SLOTS;

/// Discrete commands. Skill slots are zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Jump,
    Attack,
    Sprint,
    Skill(u8),
}

impl Command {
    const FIXED: usize = 3;
    const COUNT: usize = Self::FIXED + MAX_SKILL_SLOTS;

    fn index(self) -> Option<usize> {
        match self {
            Command::Jump => Some(0),
            Command::Attack => Some(1),
            Command::Sprint => Some(2),
            Command::Skill(slot) if (slot as usize) < MAX_SKILL_SLOTS => {
                Some(Self::FIXED + slot as usize)
            }
            Command::Skill(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    pressed: bool,
    held: bool,
    /// Seconds the unconsumed press has been waiting
    press_age: f32,
}

/// Aggregated command edges plus the move axis.
///
/// Press flags are one-shot: they stay set until [`InputSnapshot::consume`]
/// clears them or they outlive the configured press lifetime.
#[derive(Component, Debug, Clone, Default)]
pub struct InputSnapshot {
    move_axis: Vec2,
    buttons: [ButtonState; Command::COUNT],
}

impl InputSnapshot {
    pub fn set_move(&mut self, axis: Vec2) {
        self.move_axis = axis.clamp_length_max(1.0);
    }

    pub fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    /// Record a press edge. Also marks the command held.
    pub fn press(&mut self, command: Command) {
        let Some(button) = self.button_mut(command) else {
            return;
        };
        button.pressed = true;
        button.held = true;
        button.press_age = 0.0;
    }

    /// Record a release edge. A pending press stays pending.
    pub fn release(&mut self, command: Command) {
        if let Some(button) = self.button_mut(command) {
            button.held = false;
        }
    }

    pub fn is_pressed(&self, command: Command) -> bool {
        self.button(command).is_some_and(|b| b.pressed)
    }

    pub fn is_held(&self, command: Command) -> bool {
        self.button(command).is_some_and(|b| b.held)
    }

    /// Read and clear a press in one step. Clearing twice is harmless.
    pub fn consume(&mut self, command: Command) -> bool {
        let Some(button) = self.button_mut(command) else {
            return false;
        };
        std::mem::take(&mut button.pressed)
    }

    /// Age pending presses and drop those older than `lifetime`.
    pub fn age_presses(&mut self, dt: f32, lifetime: f32) {
        for button in &mut self.buttons {
            if !button.pressed {
                continue;
            }
            button.press_age += dt;
            if button.press_age > lifetime {
                button.pressed = false;
            }
        }
    }

    fn button(&self, command: Command) -> Option<&ButtonState> {
        command.index().map(|i| &self.buttons[i])
    }

    fn button_mut(&mut self, command: Command) -> Option<&mut ButtonState> {
        command.index().map(|i| &mut self.buttons[i])
    }
}
