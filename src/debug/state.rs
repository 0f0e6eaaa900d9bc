//! Debug domain: debug tooling state.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the controller overlay is visible
    pub show_info: bool,
    /// Mirror every feedback notification to the log
    pub log_feedback: bool,
    /// Message shown in the overlay until its timer runs out
    pub status_message: Option<(String, f32)>,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_info: false,
            log_feedback: true,
            status_message: None,
        }
    }
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}
