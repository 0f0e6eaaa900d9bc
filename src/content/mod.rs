//! Content domain: RON data definitions, loading, and validation.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{ContentLoadError, load_all_content, parse_data_file, parse_single_file};
pub use registry::{BUILTIN_LOADOUT, ContentRegistry};
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

use crate::combat::CombatTuning;
use crate::input::InputTuning;
use crate::movement::MovementTuning;

pub const CONTENT_DIR: &str = "assets/data";

/// Ordering anchor for startup systems that read the registry.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoaded;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<HitboxDef>()
            .register_type::<MotionPolicy>()
            .register_type::<AttackDef>()
            .register_type::<MovesetDef>()
            .register_type::<SkillUsage>()
            .register_type::<SkillEffect>()
            .register_type::<SkillDef>()
            .register_type::<LoadoutDef>()
            .add_systems(Startup, load_content.in_set(ContentLoaded));
    }
}

/// Load data files, falling back to built-in content when anything is wrong.
fn load_content(mut commands: Commands) {
    let (registry, defaults) = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(loaded) => loaded,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Falling back to built-in action content");
            (ContentRegistry::builtin(), ActionDefaults::builtin())
        }
    };

    let registry = {
        let errors = validate_content(&registry);
        if errors.is_empty() {
            registry
        } else {
            for e in &errors {
                error!("Content validation: {}", e);
            }
            warn!("Falling back to built-in action content");
            ContentRegistry::builtin()
        }
    };

    info!("{}", registry.summary());

    commands.insert_resource(defaults.movement.clone());
    commands.insert_resource(defaults.combat.clone());
    commands.insert_resource(defaults.input.clone());
    commands.insert_resource(defaults);
    commands.insert_resource(registry);
}

impl ActionDefaults {
    pub fn builtin() -> Self {
        Self {
            schema_version: 1,
            default_loadout: BUILTIN_LOADOUT.to_string(),
            movement: MovementTuning::default(),
            combat: CombatTuning::default(),
            input: InputTuning::default(),
        }
    }
}
