//! Core domain: timers, system ordering and camera setup shared by all domains.

mod sets;
mod systems;
mod timers;

pub use sets::ActionSystems;
pub use timers::{Countdown, TimerBank};

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ActionSystems::Input,
                ActionSystems::Sense,
                ActionSystems::Logic,
                ActionSystems::Effects,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera);
    }
}
