//! Training arena: floor, platforms, dummies and a hazard.

use action_platformer::combat::{Hazard, Health, TARGET_BASE_COLOR, Target};
use action_platformer::movement::{GameLayer, Ground};
use avian2d::prelude::*;
use bevy::prelude::*;

const DUMMY_SIZE: Vec2 = Vec2::new(0.9, 1.6);
const DUMMY_HEALTH: f32 = 60.0;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::PlayerHitbox, GameLayer::Target],
    );

    // (center, size)
    let surfaces = [
        (Vec2::new(0.0, -0.5), Vec2::new(40.0, 1.0)),
        (Vec2::new(-7.0, 3.0), Vec2::new(5.0, 0.5)),
        (Vec2::new(6.0, 5.0), Vec2::new(4.0, 0.5)),
    ];

    for (center, size) in surfaces {
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    for x in [4.0, 9.0, -12.0] {
        commands.spawn((
            Target,
            Health::new(DUMMY_HEALTH),
            Sprite {
                color: TARGET_BASE_COLOR.into(),
                custom_size: Some(DUMMY_SIZE),
                ..default()
            },
            Transform::from_xyz(x, DUMMY_SIZE.y * 0.5, 0.0),
            RigidBody::Dynamic,
            Collider::rectangle(DUMMY_SIZE.x, DUMMY_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            CollisionLayers::new(GameLayer::Target, [GameLayer::Ground, GameLayer::PlayerHitbox]),
        ));
    }

    // Spikes
    commands.spawn((
        Hazard {
            damage: 15.0,
            knockback: 8.0,
        },
        Sprite {
            color: Color::srgb(0.8, 0.25, 0.2),
            custom_size: Some(Vec2::new(2.0, 0.4)),
            ..default()
        },
        Transform::from_xyz(-3.0, 0.2, 0.0),
        RigidBody::Static,
        Collider::rectangle(2.0, 0.4),
        Sensor,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    info!("Arena spawned");
}
