//! Debug domain: controller inspection for fast iteration.
//!
//! Hotkeys:
//! - F1: log the player's controller snapshot as JSON
//! - F3: toggle the controller overlay
//! - Ctrl+F: toggle feedback logging
//! - Ctrl+H: deal 10 damage to the player
//! - Ctrl+T: play a taunt animation

mod state;
mod systems;
mod ui;

pub use state::DebugState;
pub use ui::DebugInfoOverlay;

use bevy::prelude::*;

use crate::core::ActionSystems;
use crate::debug::systems::{
    dump_controller_snapshot, handle_debug_hotkeys, log_action_feedback,
    update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    dump_controller_snapshot,
                    handle_debug_hotkeys,
                    update_status_message,
                )
                    .chain()
                    .before(ActionSystems::Input),
            )
            .add_systems(
                Update,
                (log_action_feedback, update_debug_info_overlay).after(ActionSystems::Effects),
            );
    }
}
