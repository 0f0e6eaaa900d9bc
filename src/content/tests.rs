//! Content domain: parsing and validation tests.

use std::path::Path;

use super::*;

#[test]
fn test_bundled_data_files_load_and_validate() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTENT_DIR);
    let (registry, defaults) = match load_all_content(&base) {
        Ok(loaded) => loaded,
        Err(errors) => {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            panic!("bundled content failed to load: {:#?}", messages);
        }
    };

    let errors = validate_content(&registry);
    assert!(errors.is_empty(), "validation errors: {:?}", errors);

    assert!(registry.loadouts.contains_key(&defaults.default_loadout));
    assert_eq!(defaults.combat.skill_slot_count, 7);
    assert!((defaults.movement.coyote_time - 0.1).abs() < f32::EPSILON);
}

#[test]
fn test_builtin_content_validates() {
    let registry = ContentRegistry::builtin();
    assert!(validate_content(&registry).is_empty());
    assert!(registry.loadouts.contains_key(BUILTIN_LOADOUT));
}

#[test]
fn test_motion_policy_fields_default_when_omitted() {
    let ron = r#"(
        schema_version: 1,
        items: [
            (
                id: "quick",
                duration: 0.2,
                damage: 5.0,
                motion: (stall_in_air: false),
            ),
        ],
    )"#;
    let attacks: Vec<AttackDef> = parse_data_file("inline", ron).unwrap();
    assert_eq!(attacks.len(), 1);
    assert!(!attacks[0].motion.stall_in_air);
    assert!(attacks[0].motion.halt_momentum_on_ground);
    assert_eq!(attacks[0].hitbox, HitboxDef::default());
}

#[test]
fn test_parse_error_names_file() {
    let result: Result<Vec<SkillDef>, _> = parse_data_file("skills.ron", "(schema_version: 1, items: [ (id: ");
    let err = result.unwrap_err();
    assert_eq!(err.file, "skills.ron");
    assert!(err.to_string().starts_with("Failed to load skills.ron"));
}

#[test]
fn test_loadout_with_missing_references_is_rejected() {
    let mut registry = ContentRegistry::builtin();
    registry.loadouts.insert(
        "broken".to_string(),
        LoadoutDef {
            id: "broken".to_string(),
            moveset_id: "moveset_unknown".to_string(),
            slot_count: 8,
            skills: vec![Some("skill_unknown".to_string())],
        },
    );

    let errors = validate_content(&registry);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"moveset_id"));
    assert!(fields.contains(&"slot_count"));
    assert!(fields.contains(&"skills"));
}

#[test]
fn test_negative_cooldown_is_rejected() {
    let mut registry = ContentRegistry::builtin();
    if let Some(skill) = registry.skills.get_mut("skill_fireball") {
        skill.cooldown = -1.0;
    }
    let errors = validate_content(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "cooldown");
}

#[test]
fn test_loadout_skills_resolve_in_slot_order() {
    let registry = ContentRegistry::builtin();
    let loadout = &registry.loadouts[BUILTIN_LOADOUT];
    let skills = registry.loadout_skills(loadout);
    assert_eq!(skills.len(), 7);
    assert_eq!(skills[0].as_ref().map(|s| s.id.as_str()), Some("skill_dash_slash"));
    assert_eq!(skills[1].as_ref().map(|s| s.id.as_str()), Some("skill_fireball"));
    assert!(skills[3].is_none());
}
