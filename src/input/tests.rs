//! Input domain: tests for press consumption and expiry.

use bevy::prelude::Vec2;

use super::{Command, InputSnapshot};

#[test]
fn test_press_is_one_shot_once_consumed() {
    let mut input = InputSnapshot::default();
    input.press(Command::Attack);

    assert!(input.is_pressed(Command::Attack));
    assert!(input.consume(Command::Attack));
    assert!(!input.is_pressed(Command::Attack));
    // Consuming again is idempotent
    assert!(!input.consume(Command::Attack));
}

#[test]
fn test_unconsumed_press_persists_until_lifetime() {
    let mut input = InputSnapshot::default();
    input.press(Command::Sprint);

    input.age_presses(0.1, 0.25);
    assert!(input.is_pressed(Command::Sprint));
    input.age_presses(0.1, 0.25);
    assert!(input.is_pressed(Command::Sprint));
    input.age_presses(0.1, 0.25);
    assert!(!input.is_pressed(Command::Sprint));
}

#[test]
fn test_release_keeps_pending_press() {
    let mut input = InputSnapshot::default();
    input.press(Command::Jump);
    assert!(input.is_held(Command::Jump));

    input.release(Command::Jump);
    assert!(!input.is_held(Command::Jump));
    assert!(input.is_pressed(Command::Jump));
}

#[test]
fn test_out_of_range_skill_is_ignored() {
    let mut input = InputSnapshot::default();
    input.press(Command::Skill(200));
    assert!(!input.is_pressed(Command::Skill(200)));
    assert!(!input.consume(Command::Skill(200)));

    input.press(Command::Skill(6));
    assert!(input.is_pressed(Command::Skill(6)));
    assert!(!input.is_pressed(Command::Skill(5)));
}

#[test]
fn test_move_axis_is_clamped() {
    let mut input = InputSnapshot::default();
    input.set_move(Vec2::new(1.0, 1.0));
    assert!(input.move_axis().length() <= 1.0 + f32::EPSILON);
}
