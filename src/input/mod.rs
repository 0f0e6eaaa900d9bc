//! Input domain: command snapshot and the keyboard command source.

mod resources;
mod snapshot;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::InputTuning;
pub use snapshot::{Command, InputSnapshot};

use bevy::prelude::*;

use crate::core::ActionSystems;
use crate::input::systems::read_command_input;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputTuning>()
            .add_systems(Update, read_command_input.in_set(ActionSystems::Input));
    }
}
