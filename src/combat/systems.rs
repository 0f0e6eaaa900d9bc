//! Combat domain: strike resolution, projectiles and damage.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::actions::{ActionFeedback, ActionFeedbackEvent};
use crate::combat::components::{
    Hazard, Hitbox, HitboxLifetime, PendingStrike, Projectile, STRIKE_ACTIVE_TIME,
    TARGET_BASE_COLOR, Target,
};
use crate::combat::events::{DamageEvent, DeathEvent, ProjectileLaunch, StrikeRequest};
use crate::combat::{DamageResult, Damageable, Health};
use crate::movement::{GameLayer, Ground, Player};

/// Spawn a sensor hitbox for `request` at `origin`, or park it until its delay runs out.
pub(crate) fn spawn_strike(
    commands: &mut Commands,
    owner: Entity,
    origin: Vec2,
    request: StrikeRequest,
) {
    if request.delay > 0.0 {
        commands.spawn(PendingStrike {
            owner,
            remaining: request.delay,
            request,
        });
        return;
    }

    let size = request.size();
    let position = origin + request.offset();

    commands.spawn((
        Hitbox {
            source_id: request.source_id.clone(),
            damage: request.damage,
            knockback: request.knockback,
            owner,
            hit_entities: Vec::new(),
        },
        HitboxLifetime(STRIKE_ACTIVE_TIME),
        Sprite {
            color: Color::srgba(1.0, 1.0, 0.0, 0.5),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Target]),
    ));

    debug!(
        "Strike '{}' at ({:.2}, {:.2}) size {:?}, damage={}",
        request.source_id, position.x, position.y, size, request.damage
    );
}

pub(crate) fn spawn_projectile(
    commands: &mut Commands,
    owner: Entity,
    origin: Vec2,
    launch: ProjectileLaunch,
) {
    let position = origin + launch.offset;

    commands.spawn((
        Hitbox {
            source_id: launch.source_id.clone(),
            damage: launch.damage,
            knockback: 0.0,
            owner,
            hit_entities: Vec::new(),
        },
        Projectile {
            penetration_left: launch.max_penetration,
            spent: false,
        },
        HitboxLifetime(launch.lifetime),
        Sprite {
            color: Color::srgb(1.0, 0.45, 0.1),
            custom_size: Some(Vec2::splat(0.4)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        RigidBody::Kinematic,
        LinearVelocity(launch.velocity()),
        Collider::circle(0.2),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(
            GameLayer::PlayerHitbox,
            [GameLayer::Target, GameLayer::Ground],
        ),
    ));

    debug!(
        "Projectile '{}' launched at ({:.2}, {:.2}), velocity {:?}",
        launch.source_id,
        position.x,
        position.y,
        launch.velocity()
    );
}

/// Fire delayed strikes from the owner's current position.
pub(crate) fn tick_pending_strikes(
    mut commands: Commands,
    time: Res<Time>,
    mut pending: Query<(Entity, &mut PendingStrike)>,
    owners: Query<&Transform>,
) {
    let dt = time.delta_secs();
    for (entity, mut strike) in &mut pending {
        strike.remaining -= dt;
        if strike.remaining > 0.0 {
            continue;
        }
        commands.entity(entity).despawn();

        let Ok(owner_transform) = owners.get(strike.owner) else {
            continue;
        };
        let mut request = strike.request.clone();
        request.delay = 0.0;
        spawn_strike(
            &mut commands,
            strike.owner,
            owner_transform.translation.truncate(),
            request,
        );
    }
}

pub(crate) fn cleanup_expired_hitboxes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitboxLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}

pub(crate) fn detect_hitbox_collisions(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut hitbox_query: Query<(&mut Hitbox, &Transform, Option<&mut Projectile>)>,
    target_query: Query<&Transform, With<Target>>,
    ground_query: Query<(), With<Ground>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hitbox_entity, other) in pairs {
            let Ok((mut hitbox, hitbox_transform, projectile)) = hitbox_query.get_mut(hitbox_entity)
            else {
                continue;
            };

            if projectile.as_ref().is_some_and(|p| p.spent) {
                continue;
            }
            if projectile.is_some() && ground_query.contains(other) {
                commands.entity(hitbox_entity).try_despawn();
                continue;
            }

            let Ok(target_transform) = target_query.get(other) else {
                continue;
            };
            if hitbox.owner == other || hitbox.hit_entities.contains(&other) {
                continue;
            }
            hitbox.hit_entities.push(other);

            let direction = (target_transform.translation.truncate()
                - hitbox_transform.translation.truncate())
            .normalize_or_zero();
            let direction = if direction == Vec2::ZERO {
                Vec2::X
            } else {
                direction
            };

            damage_events.write(DamageEvent {
                source: hitbox.owner,
                target: other,
                amount: hitbox.damage,
                knockback: direction * hitbox.knockback,
            });

            if let Some(mut projectile) = projectile {
                if projectile.penetration_left == 0 {
                    projectile.spent = true;
                    commands.entity(hitbox_entity).try_despawn();
                } else {
                    projectile.penetration_left -= 1;
                }
            }
        }
    }
}

/// Every frame a player overlaps a hazard it is hit again. The player's
/// invincibility window decides which hits land.
pub(crate) fn detect_hazard_contacts(
    mut damage_events: MessageWriter<DamageEvent>,
    hazards: Query<(&Hazard, &Transform)>,
    players: Query<(Entity, &Transform, &CollidingEntities), With<Player>>,
) {
    for (player_entity, player_transform, colliding) in &players {
        for &hazard_entity in colliding.iter() {
            let Ok((hazard, hazard_transform)) = hazards.get(hazard_entity) else {
                continue;
            };

            let away = (player_transform.translation.x - hazard_transform.translation.x).signum();
            damage_events.write(DamageEvent {
                source: hazard_entity,
                target: player_entity,
                amount: hazard.damage,
                knockback: Vec2::new(away, 1.0).normalize() * hazard.knockback,
            });
        }
    }
}

/// Damage for plain `Health` targets. The player's health lives in its controller.
pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut feedback: MessageWriter<ActionFeedbackEvent>,
    mut query: Query<(&mut Health, &mut Sprite), Without<Player>>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut sprite)) = query.get_mut(event.target) else {
            continue;
        };

        let result = Damageable::take_damage(&mut *health, event.amount);
        if result == DamageResult::Ignored {
            continue;
        }

        sprite.color = Color::srgb(1.0, 0.5, 0.5);
        feedback.write(ActionFeedbackEvent {
            entity: event.source,
            feedback: ActionFeedback::HitLanded {
                target: event.target,
                amount: result.dealt(),
            },
        });

        if let DamageResult::Killed { .. } = result {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Maximum velocity an entity can have after knockback
const MAX_KNOCKBACK_VELOCITY: f32 = 25.0;
/// Minimum upward knockback to give a small lift
const MIN_VERTICAL_KNOCKBACK: f32 = 2.0;

pub(crate) fn apply_knockback(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<&mut LinearVelocity, Without<Player>>,
) {
    for event in damage_events.read() {
        let Ok(mut velocity) = query.get_mut(event.target) else {
            continue;
        };
        if event.knockback == Vec2::ZERO {
            continue;
        }

        velocity.x += event.knockback.x;
        velocity.y += event.knockback.y.max(MIN_VERTICAL_KNOCKBACK);
        velocity.0 = velocity.0.clamp_length_max(MAX_KNOCKBACK_VELOCITY);

        debug!(
            "Knockback applied: knockback={:?}, final_velocity=({:.1}, {:.1})",
            event.knockback, velocity.x, velocity.y
        );
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    targets: Query<Entity, (With<Target>, Without<Player>)>,
) {
    for event in death_events.read() {
        if let Ok(entity) = targets.get(event.entity) {
            info!("Target {:?} defeated", entity);
            commands.entity(entity).despawn();
        }
    }
}

/// Fade the hit flash back to the target's base color.
pub(crate) fn fade_hit_flash(
    time: Res<Time>,
    mut query: Query<&mut Sprite, (With<Target>, With<Health>)>,
) {
    let t = (time.delta_secs() * 4.0).min(1.0);
    for mut sprite in &mut query {
        let current = sprite.color.to_srgba();
        let base = TARGET_BASE_COLOR;
        sprite.color = Color::Srgba(Srgba::new(
            current.red + (base.red - current.red) * t,
            current.green + (base.green - current.green) * t,
            current.blue + (base.blue - current.blue) * t,
            1.0,
        ));
    }
}
