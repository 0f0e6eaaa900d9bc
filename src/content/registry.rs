//! ContentRegistry resource providing HashMap lookups for all loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded action content.
/// Provides O(1) lookup by id for any content type.
#[derive(Resource, Default, Debug, Clone)]
pub struct ContentRegistry {
    pub movesets: HashMap<String, MovesetDef>,
    pub skills: HashMap<String, SkillDef>,
    pub loadouts: HashMap<String, LoadoutDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Movesets: {}\n\
             - Skills: {}\n\
             - Loadouts: {}",
            self.movesets.len(),
            self.skills.len(),
            self.loadouts.len(),
        )
    }

    /// Skills for a loadout in slot order. Unknown ids resolve to empty slots.
    pub fn loadout_skills(&self, loadout: &LoadoutDef) -> Vec<Option<SkillDef>> {
        (0..loadout.slot_count)
            .map(|slot| {
                let id = loadout.skills.get(slot).cloned().flatten()?;
                let skill = self.skills.get(&id);
                if skill.is_none() {
                    warn!("Loadout '{}' slot {} references unknown skill '{}'", loadout.id, slot, id);
                }
                skill.cloned()
            })
            .collect()
    }

    /// Content used when no data files are available.
    pub fn builtin() -> Self {
        let mut registry = Self::default();

        let moveset = builtin_moveset();
        registry.movesets.insert(moveset.id.clone(), moveset);

        for skill in builtin_skills() {
            registry.skills.insert(skill.id.clone(), skill);
        }

        let loadout = LoadoutDef {
            id: BUILTIN_LOADOUT.to_string(),
            moveset_id: "moveset_blade".to_string(),
            slot_count: 7,
            skills: vec![
                Some("skill_dash_slash".to_string()),
                Some("skill_fireball".to_string()),
                Some("skill_ground_slam".to_string()),
            ],
        };
        registry.loadouts.insert(loadout.id.clone(), loadout);

        registry
    }
}

pub const BUILTIN_LOADOUT: &str = "loadout_default";

fn attack(id: &str, duration: f32, damage: f32) -> AttackDef {
    AttackDef {
        id: id.to_string(),
        duration,
        damage,
        knockback: 5.0,
        hitbox: HitboxDef::default(),
        motion: MotionPolicy::default(),
    }
}

fn builtin_moveset() -> MovesetDef {
    MovesetDef {
        id: "moveset_blade".to_string(),
        name: "Blade".to_string(),
        ground_neutral: vec![
            attack("slash_1", 0.3, 10.0),
            attack("slash_2", 0.3, 12.0),
            attack("slash_3", 0.45, 18.0),
        ],
        ground_up: vec![attack("rising_cut", 0.35, 12.0)],
        ground_down: vec![attack("low_sweep", 0.35, 10.0)],
        air_neutral: vec![attack("air_slash_1", 0.3, 9.0), attack("air_slash_2", 0.3, 11.0)],
        air_up: vec![attack("air_launcher", 0.35, 12.0)],
        air_down: vec![AttackDef {
            motion: MotionPolicy {
                stall_in_air: false,
                ..MotionPolicy::default()
            },
            ..attack("plunge", 0.4, 16.0)
        }],
    }
}

fn builtin_skills() -> Vec<SkillDef> {
    vec![
        SkillDef {
            id: "skill_dash_slash".to_string(),
            name: "Dash Slash".to_string(),
            description: "Lunge forward and cut through everything on the way.".to_string(),
            cooldown: 3.0,
            duration: 0.3,
            usage: SkillUsage::Anywhere,
            motion: MotionPolicy {
                halt_momentum_on_ground: false,
                stall_in_air: false,
                ..MotionPolicy::default()
            },
            effect: SkillEffect::DashStrike {
                speed: 20.0,
                damage: 30.0,
                knockback: 10.0,
                hitbox: HitboxDef {
                    width: 2.0,
                    height: 1.5,
                    offset_x: 1.0,
                    offset_y: 0.0,
                },
                strike_delay: 0.1,
            },
        },
        SkillDef {
            id: "skill_fireball".to_string(),
            name: "Fireball".to_string(),
            description: "Hurl a ball of fire.".to_string(),
            cooldown: 1.5,
            duration: 0.35,
            usage: SkillUsage::Anywhere,
            motion: MotionPolicy {
                can_move_while_active: true,
                ..MotionPolicy::default()
            },
            effect: SkillEffect::Projectile {
                damage: 20.0,
                speed: 10.0,
                lifetime: 5.0,
                max_penetration: 0,
                spawn_offset_x: 1.0,
                spawn_offset_y: 0.5,
            },
        },
        SkillDef {
            id: "skill_ground_slam".to_string(),
            name: "Ground Slam".to_string(),
            description: "Strike the ground around you.".to_string(),
            cooldown: 5.0,
            duration: 0.6,
            usage: SkillUsage::GroundOnly,
            motion: MotionPolicy::default(),
            effect: SkillEffect::Strike {
                damage: 40.0,
                knockback: 12.0,
                hitbox: HitboxDef {
                    width: 4.0,
                    height: 1.0,
                    offset_x: 0.0,
                    offset_y: -0.25,
                },
            },
        },
    ]
}
