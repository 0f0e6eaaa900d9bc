//! Player action state machine for a 2D action platformer.
//!
//! Domains are Bevy plugins wired together by [`ActionPlatformerPlugin`].

pub mod actions;
pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod input;
pub mod movement;

use bevy::prelude::*;

/// Everything the player controller needs, minus windowing and physics.
pub struct ActionPlatformerPlugin;

impl Plugin for ActionPlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            input::InputPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            actions::ActionsPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
