//! Actions domain: the player action state machine and its ECS wiring.

mod bootstrap;
mod controller;
mod events;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use bootstrap::{PLAYER_SIZE, build_controller};
pub use controller::{ActionController, ControllerSnapshot, HURT_TRIGGER};
pub use events::{ActionFeedback, ActionFeedbackEvent, ActionOutbox};
pub use state::{ActivityState, StateScratch, Transition};

use bevy::prelude::*;

use crate::actions::bootstrap::bootstrap_player;
use crate::actions::systems::{
    apply_player_damage, drain_action_outbox, sync_facing, tick_action_logic, tick_action_physics,
};
use crate::content::ContentLoaded;
use crate::core::ActionSystems;

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ActionFeedbackEvent>()
            .add_systems(Startup, bootstrap_player.after(ContentLoaded))
            .add_systems(
                Update,
                (apply_player_damage, tick_action_logic)
                    .chain()
                    .in_set(ActionSystems::Logic),
            )
            .add_systems(
                Update,
                (drain_action_outbox, sync_facing).in_set(ActionSystems::Effects),
            )
            .add_systems(FixedUpdate, tick_action_physics);
    }
}
