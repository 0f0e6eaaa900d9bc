//! Actions domain: player bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actions::ActionController;
use crate::combat::{CombatResolver, CombatTuning, ComboResolver, SkillBank};
use crate::content::{ActionDefaults, ContentRegistry};
use crate::input::{InputSnapshot, InputTuning};
use crate::movement::{GameLayer, GroundSensor, MovementTuning, Player};

/// Player body size in meters. The ground probe sits at the bottom edge.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);

/// Build a controller for `loadout_id`, falling back to an empty moveset
/// and empty slots for anything the registry does not know.
pub fn build_controller(
    registry: &ContentRegistry,
    loadout_id: &str,
    movement: &MovementTuning,
    combat: &CombatTuning,
    input: &InputTuning,
) -> ActionController {
    let loadout = registry.loadouts.get(loadout_id);
    if loadout.is_none() {
        warn!("Loadout '{}' not found, player starts unarmed", loadout_id);
    }

    let combos = loadout
        .and_then(|l| registry.movesets.get(&l.moveset_id))
        .map(|moveset| ComboResolver::new(moveset, combat.combo_reset_window))
        .unwrap_or_else(|| ComboResolver::empty(combat.combo_reset_window));

    let slot_count = loadout.map_or(combat.skill_slot_count, |l| l.slot_count);
    let resolver = CombatResolver::new(combos, SkillBank::new(slot_count));

    let mut controller =
        ActionController::new(movement.clone(), combat.clone(), input.clone(), resolver);

    if let Some(loadout) = loadout {
        for (slot, skill) in registry.loadout_skills(loadout).into_iter().enumerate() {
            if let Some(skill) = skill {
                controller.equip_skill(skill, slot);
            }
        }
    }

    controller
}

pub(crate) fn bootstrap_player(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    defaults: Option<Res<ActionDefaults>>,
    movement: Res<MovementTuning>,
    combat: Res<CombatTuning>,
    input: Res<InputTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let loadout_id = defaults
        .as_ref()
        .map(|d| d.default_loadout.clone())
        .unwrap_or_else(|| crate::content::BUILTIN_LOADOUT.to_string());

    let controller = match &registry {
        Some(registry) => build_controller(registry, &loadout_id, &movement, &combat, &input),
        None => {
            warn!("ContentRegistry not available, using built-in content");
            build_controller(
                &ContentRegistry::builtin(),
                &loadout_id,
                &movement,
                &combat,
                &input,
            )
        }
    };

    info!(
        "Spawning player: loadout={}, health={}, skill slots={}",
        loadout_id,
        controller.health().max,
        controller.combat().skills().slot_count()
    );

    commands.spawn((
        (
            Player,
            controller,
            InputSnapshot::default(),
            GroundSensor::default(),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.95),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0),
            Friction::new(0.0),
            CollidingEntities::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Hazard]),
        ),
    ));
}
