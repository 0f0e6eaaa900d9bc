//! Input domain: keyboard command source.

use bevy::prelude::*;

use crate::input::{Command, InputSnapshot};
use crate::movement::Player;

const SKILL_KEYS: [KeyCode; 7] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
];

fn any_pressed(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> bool {
    keys.iter().any(|key| keyboard.pressed(*key))
}

fn any_just_pressed(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> bool {
    keys.iter().any(|key| keyboard.just_pressed(*key))
}

fn any_just_released(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> bool {
    keys.iter().any(|key| keyboard.just_released(*key))
}

fn apply_button(
    keyboard: &ButtonInput<KeyCode>,
    snapshot: &mut InputSnapshot,
    command: Command,
    keys: &[KeyCode],
) {
    if any_just_pressed(keyboard, keys) {
        snapshot.press(command);
    }
    if any_just_released(keyboard, keys) && !any_pressed(keyboard, keys) {
        snapshot.release(command);
    }
}

pub(crate) fn read_command_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut InputSnapshot, With<Player>>,
) {
    let mut x = 0.0;
    if any_pressed(&keyboard, &[KeyCode::KeyA, KeyCode::ArrowLeft]) {
        x -= 1.0;
    }
    if any_pressed(&keyboard, &[KeyCode::KeyD, KeyCode::ArrowRight]) {
        x += 1.0;
    }

    let mut y = 0.0;
    if any_pressed(&keyboard, &[KeyCode::KeyS, KeyCode::ArrowDown]) {
        y -= 1.0;
    }
    if any_pressed(&keyboard, &[KeyCode::KeyW, KeyCode::ArrowUp]) {
        y += 1.0;
    }

    for mut snapshot in &mut query {
        snapshot.set_move(Vec2::new(x, y));
        apply_button(
            &keyboard,
            &mut snapshot,
            Command::Jump,
            &[KeyCode::Space, KeyCode::KeyK],
        );
        apply_button(
            &keyboard,
            &mut snapshot,
            Command::Attack,
            &[KeyCode::KeyJ, KeyCode::KeyZ],
        );
        apply_button(
            &keyboard,
            &mut snapshot,
            Command::Sprint,
            &[KeyCode::ShiftLeft, KeyCode::KeyL],
        );
        for (slot, key) in SKILL_KEYS.iter().enumerate() {
            apply_button(&keyboard, &mut snapshot, Command::Skill(slot as u8), &[*key]);
        }
    }
}
