//! Movement domain: locomotion tuning, solver and ground sensing.

mod components;
mod resources;
mod solver;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, Ground, GroundSensor, Orientation, Player};
pub use resources::MovementTuning;
pub use solver::MovementSolver;

use bevy::prelude::*;

use crate::core::ActionSystems;
use crate::movement::systems::sense_ground;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(Update, sense_ground.in_set(ActionSystems::Sense));
    }
}
