//! Validation for cross-references and value ranges in loaded content.

use super::data::*;
use super::registry::ContentRegistry;
use crate::combat::MAX_SKILL_SLOTS;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

macro_rules! check_ref {
    ($errors:expr, $registry_map:expr, $source_type:expr, $source_id:expr, $field:expr, $target_type:expr, $ref_id:expr) => {
        if !$registry_map.contains_key($ref_id) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!("references missing {} '{}'", $target_type, $ref_id),
            });
        }
    };
}

macro_rules! check_non_negative {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr) => {
        if $value < 0.0 {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!("must not be negative (got {})", $value),
            });
        }
    };
}

/// Validate all content in the registry.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, moveset) in &registry.movesets {
        for attack in moveset.attacks() {
            check_non_negative!(errors, "Moveset", id, "duration", attack.duration);
            check_non_negative!(errors, "Moveset", id, "damage", attack.damage);
        }
    }

    for (id, skill) in &registry.skills {
        check_non_negative!(errors, "Skill", id, "cooldown", skill.cooldown);
        check_non_negative!(errors, "Skill", id, "duration", skill.duration);
        if let SkillEffect::Projectile { lifetime, .. } = skill.effect {
            check_non_negative!(errors, "Skill", id, "lifetime", lifetime);
        }
    }

    for (id, loadout) in &registry.loadouts {
        check_ref!(
            errors,
            registry.movesets,
            "Loadout",
            id,
            "moveset_id",
            "Moveset",
            &loadout.moveset_id
        );
        if loadout.slot_count == 0 || loadout.slot_count > MAX_SKILL_SLOTS {
            errors.push(ValidationError {
                source_type: "Loadout",
                source_id: id.to_string(),
                field: "slot_count",
                problem: format!(
                    "must be between 1 and {} (got {})",
                    MAX_SKILL_SLOTS, loadout.slot_count
                ),
            });
        }
        if loadout.skills.len() > loadout.slot_count {
            errors.push(ValidationError {
                source_type: "Loadout",
                source_id: id.to_string(),
                field: "skills",
                problem: format!(
                    "lists {} skills for {} slots",
                    loadout.skills.len(),
                    loadout.slot_count
                ),
            });
        }
        for skill_id in loadout.skills.iter().flatten() {
            check_ref!(
                errors,
                registry.skills,
                "Loadout",
                id,
                "skills",
                "Skill",
                skill_id
            );
        }
    }

    errors
}
