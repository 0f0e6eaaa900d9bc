//! Debug domain: snapshot dumps, hotkeys and the controller overlay.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::actions::{ActionController, ActionFeedback, ActionFeedbackEvent};
use crate::combat::ComboCategory;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::Player;

/// F1 logs the player's controller snapshot as pretty JSON.
pub(crate) fn dump_controller_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    query: Query<&ActionController, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    for controller in &query {
        match serde_json::to_string_pretty(&controller.snapshot()) {
            Ok(json) => {
                info!("Controller snapshot:\n{}", json);
                debug_state.set_message("Snapshot written to log", 2.0);
            }
            Err(e) => error!("Failed to serialize controller snapshot: {}", e),
        }
    }
}

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut query: Query<&mut ActionController, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+F: Toggle feedback logging
    if keyboard.just_pressed(KeyCode::KeyF) {
        debug_state.log_feedback = !debug_state.log_feedback;
        let message = format!("Feedback logging: {}", debug_state.log_feedback);
        info!("{}", message);
        debug_state.set_message(message, 2.0);
    }

    // Ctrl+H: Hurt the player
    if keyboard.just_pressed(KeyCode::KeyH) {
        for mut controller in &mut query {
            let result = controller.on_damage_taken(10.0);
            debug_state.set_message(format!("Self damage: {:?}", result), 2.0);
        }
    }

    // Ctrl+T: Taunt animation
    if keyboard.just_pressed(KeyCode::KeyT) {
        for mut controller in &mut query {
            controller.play_special_animation("Taunt", 0.8);
        }
        debug_state.set_message("Taunt", 1.0);
    }
}

/// Mirror feedback to the log while enabled.
pub(crate) fn log_action_feedback(
    debug_state: Res<DebugState>,
    mut feedback: MessageReader<ActionFeedbackEvent>,
) {
    for event in feedback.read() {
        if !debug_state.log_feedback {
            continue;
        }
        match &event.feedback {
            ActionFeedback::StateEntered(state) => {
                info!("[{:?}] enter {:?}", event.entity, state)
            }
            ActionFeedback::StateExited(_) => {}
            other => info!("[{:?}] {:?}", event.entity, other),
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the debug info overlay with the current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &ActionController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Some((transform, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    else {
        return;
    };

    let pos = transform.translation;
    let timers = controller.timers();
    let combos = controller.combat().combos();
    let combo_line = ComboCategory::ALL
        .iter()
        .map(|c| format!("{:?}={}", c, combos.index(*c)))
        .collect::<Vec<_>>()
        .join(" ");
    let cooldowns = controller
        .combat()
        .skills()
        .cooldowns()
        .iter()
        .map(|c| format!("{:.1}", c))
        .collect::<Vec<_>>()
        .join(" ");

    **text = format!(
        "Pos: ({:.1}, {:.1})\nState: {:?} (interruptible: {})\nGrounded: {}  Facing right: {}\n\
         Coyote: {:.2}  Buffer: {:.2}  Sprint CD: {:.2}\nInvincible: {:.2}  Combo window: {:.2}\n\
         Combos: {}\nCooldowns: {}\nHP: {:.0}/{:.0} ({:.0}%){}\n{}",
        pos.x,
        pos.y,
        controller.current_state(),
        controller.can_current_state_be_interrupted(),
        controller.is_grounded(),
        controller.is_facing_right(),
        timers.coyote.remaining(),
        timers.jump_buffer.remaining(),
        timers.sprint_cooldown.remaining(),
        timers.invincibility.remaining(),
        timers.combo_window.remaining(),
        combo_line,
        cooldowns,
        controller.health().current,
        controller.health().max,
        controller.health().percent() * 100.0,
        if controller.is_defeated() { " (defeated)" } else { "" },
        debug_state
            .status_message
            .as_ref()
            .map(|(message, _)| message.as_str())
            .unwrap_or(""),
    );
}
