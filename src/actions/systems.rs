//! Actions domain: systems that drive the controller and drain its outbox.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::actions::{ActionController, ActionFeedbackEvent};
use crate::combat::{DamageEvent, DamageResult, spawn_projectile, spawn_strike};
use crate::input::InputSnapshot;
use crate::movement::{GroundSensor, Player};

/// Route damage aimed at the player into its controller.
pub(crate) fn apply_player_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<&mut ActionController, With<Player>>,
) {
    for event in damage_events.read() {
        let Ok(mut controller) = query.get_mut(event.target) else {
            continue;
        };
        match controller.on_damage_taken(event.amount) {
            DamageResult::Ignored => trace!("Player ignored {} damage", event.amount),
            DamageResult::Hurt { dealt } => {
                info!(
                    "Player took {} damage ({:.0}/{:.0})",
                    dealt,
                    controller.health().current,
                    controller.health().max
                );
            }
            DamageResult::Killed { dealt } => info!("Player took {} damage and died", dealt),
        }
    }
}

pub(crate) fn tick_action_logic(
    time: Res<Time>,
    mut query: Query<(
        &mut ActionController,
        &mut InputSnapshot,
        &mut LinearVelocity,
        &GroundSensor,
    )>,
) {
    let dt = time.delta_secs();
    for (mut controller, mut input, mut velocity, sensor) in &mut query {
        controller.tick_logic(&mut input, &mut velocity.0, sensor.grounded, dt);
    }
}

pub(crate) fn tick_action_physics(
    time: Res<Time>,
    mut query: Query<(&mut ActionController, &InputSnapshot, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    for (mut controller, input, mut velocity) in &mut query {
        controller.tick_physics(input, &mut velocity.0, dt);
    }
}

/// Turn queued effects into messages, strikes and projectiles.
pub(crate) fn drain_action_outbox(
    mut commands: Commands,
    mut feedback: MessageWriter<ActionFeedbackEvent>,
    mut query: Query<(Entity, &mut ActionController, &Transform)>,
) {
    for (entity, mut controller, transform) in &mut query {
        let outbox = controller.drain_outbox();
        if outbox.is_empty() {
            continue;
        }
        let origin = transform.translation.truncate();

        for item in outbox.feedback {
            feedback.write(ActionFeedbackEvent {
                entity,
                feedback: item,
            });
        }
        for strike in outbox.strikes {
            spawn_strike(&mut commands, entity, origin, strike);
        }
        for launch in outbox.projectiles {
            spawn_projectile(&mut commands, entity, origin, launch);
        }
    }
}

/// Mirror facing onto the sprite.
pub(crate) fn sync_facing(mut query: Query<(&ActionController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        let flip = !controller.is_facing_right();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
