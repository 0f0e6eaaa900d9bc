//! Movement domain: solver and orientation tests.

use bevy::prelude::Vec2;

use super::{Facing, MovementSolver, MovementTuning, Orientation};

fn solver() -> MovementSolver {
    MovementSolver::new(MovementTuning::default())
}

#[test]
fn test_landing_edge_only_on_first_grounded_tick() {
    let mut solver = solver();
    solver.sense(false);
    assert!(!solver.just_landed());

    solver.sense(true);
    assert!(solver.just_landed());

    solver.sense(true);
    assert!(solver.is_grounded());
    assert!(!solver.just_landed());
}

#[test]
fn test_jump_sets_vertical_velocity() {
    let solver = solver();
    let mut velocity = Vec2::new(3.0, -2.0);
    solver.jump(&mut velocity);
    assert_eq!(velocity, Vec2::new(3.0, 16.0));
}

#[test]
fn test_cut_jump_only_while_rising() {
    let solver = solver();
    let mut rising = Vec2::new(0.0, 10.0);
    solver.cut_jump(&mut rising);
    assert_eq!(rising.y, 5.0);

    let mut falling = Vec2::new(0.0, -4.0);
    solver.cut_jump(&mut falling);
    assert_eq!(falling.y, -4.0);
}

#[test]
fn test_fall_gravity_is_additive() {
    let tuning = MovementTuning::default();
    let solver = MovementSolver::new(tuning.clone());
    let dt = 0.02;

    // Falling: gravity plus (fall_multiplier - 1) * gravity
    let mut velocity = Vec2::new(0.0, -1.0);
    solver.apply_gravity(&mut velocity, dt);
    solver.apply_fall_gravity(&mut velocity, true, dt);
    let expected = -1.0 - tuning.gravity * tuning.fall_multiplier * dt;
    assert!((velocity.y - expected).abs() < 1e-4);

    // Rising with jump held: no extra gravity
    let mut held = Vec2::new(0.0, 5.0);
    solver.apply_fall_gravity(&mut held, true, dt);
    assert_eq!(held.y, 5.0);

    // Rising with jump released: low-jump gravity
    let mut released = Vec2::new(0.0, 5.0);
    solver.apply_fall_gravity(&mut released, false, dt);
    let expected = 5.0 - tuning.gravity * (tuning.low_jump_multiplier - 1.0) * dt;
    assert!((released.y - expected).abs() < 1e-4);
}

#[test]
fn test_move_scales_by_multiplier() {
    let solver = solver();
    let mut velocity = Vec2::new(0.0, 2.0);
    solver.move_horizontal(&mut velocity, -1.0, 0.5);
    assert_eq!(velocity, Vec2::new(-4.0, 2.0));
}

#[test]
fn test_sprint_direction_prefers_input_then_facing() {
    let solver = solver();
    assert_eq!(
        solver.sprint_direction(Vec2::new(-1.0, 0.0), Facing::Right, 0.1),
        -1.0
    );
    assert_eq!(solver.sprint_direction(Vec2::ZERO, Facing::Left, 0.1), -1.0);
    assert_eq!(solver.sprint_direction(Vec2::ZERO, Facing::Right, 0.1), 1.0);
}

#[test]
fn test_sprint_overrides_velocity_once() {
    let mut solver = solver();
    let mut velocity = Vec2::new(1.0, -7.0);
    solver.sprint(&mut velocity, 1.0);
    assert_eq!(velocity, Vec2::new(20.0, 0.0));
    assert!(solver.is_sprinting());

    // A second start while sprinting is ignored
    velocity = Vec2::new(1.0, 1.0);
    solver.sprint(&mut velocity, -1.0);
    assert_eq!(velocity, Vec2::new(1.0, 1.0));

    solver.end_sprint();
    assert!(!solver.is_sprinting());
}

#[test]
fn test_orientation_respects_flip_gate() {
    let mut orientation = Orientation::default();
    orientation.update(-1.0, 0.1);
    assert_eq!(orientation.facing(), Facing::Left);

    orientation.set_can_flip(false);
    orientation.update(1.0, 0.1);
    assert_eq!(orientation.facing(), Facing::Left);

    orientation.set_can_flip(true);
    orientation.update(0.05, 0.1);
    assert_eq!(orientation.facing(), Facing::Left);
    orientation.update(0.5, 0.1);
    assert!(orientation.is_facing_right());
}

#[test]
fn test_jump_height_from_tuning() {
    let tuning = MovementTuning {
        jump_speed: 10.0,
        gravity: 20.0,
        ..MovementTuning::default()
    };
    assert_eq!(tuning.jump_height(), 2.5);
}
