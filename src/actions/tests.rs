//! Actions domain: state machine scenarios driven tick by tick.

use bevy::prelude::Vec2;

use super::*;
use crate::combat::{CombatResolver, CombatTuning, ComboCategory, DamageResult};
use crate::content::{
    AttackDef, HitboxDef, MotionPolicy, MovesetDef, SkillDef, SkillEffect, SkillUsage,
};
use crate::input::{Command, InputSnapshot, InputTuning};
use crate::movement::MovementTuning;

fn attack(id: &str) -> AttackDef {
    AttackDef {
        id: id.to_string(),
        duration: 0.3,
        damage: 10.0,
        knockback: 2.0,
        hitbox: HitboxDef::default(),
        motion: MotionPolicy::default(),
    }
}

fn moveset() -> MovesetDef {
    MovesetDef {
        id: "test".to_string(),
        name: "Test".to_string(),
        ground_neutral: vec![attack("gn_0"), attack("gn_1"), attack("gn_2")],
        ground_up: vec![attack("gu_0")],
        ground_down: Vec::new(),
        air_neutral: vec![attack("an_0")],
        air_up: Vec::new(),
        air_down: Vec::new(),
    }
}

fn strike_skill(id: &str) -> SkillDef {
    SkillDef {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        cooldown: 2.0,
        duration: 0.5,
        usage: SkillUsage::Anywhere,
        motion: MotionPolicy::default(),
        effect: SkillEffect::Strike {
            damage: 20.0,
            knockback: 4.0,
            hitbox: HitboxDef::default(),
        },
    }
}

/// A controller plus the body and sensor it would see in the world.
struct Rig {
    controller: ActionController,
    input: InputSnapshot,
    velocity: Vec2,
    grounded: bool,
}

impl Rig {
    fn with_tuning(combat: CombatTuning) -> Self {
        let resolver =
            CombatResolver::from_moveset(&moveset(), combat.combo_reset_window, combat.skill_slot_count);
        let mut controller = ActionController::new(
            MovementTuning::default(),
            combat,
            InputTuning::default(),
            resolver,
        );
        controller.equip_skill(strike_skill("slam"), 0);
        controller.equip_skill(strike_skill("bolt"), 1);
        Self {
            controller,
            input: InputSnapshot::default(),
            velocity: Vec2::ZERO,
            grounded: true,
        }
    }

    fn new() -> Self {
        Self::with_tuning(CombatTuning::default())
    }

    fn logic(&mut self, dt: f32) {
        self.controller
            .tick_logic(&mut self.input, &mut self.velocity, self.grounded, dt);
    }

    /// Logic then physics, with the floor stopping downward motion.
    fn step(&mut self, dt: f32) {
        self.logic(dt);
        self.controller
            .tick_physics(&self.input, &mut self.velocity, dt);
        if self.grounded && self.velocity.y < 0.0 {
            self.velocity.y = 0.0;
        }
    }

    fn steps(&mut self, count: usize, dt: f32) {
        for _ in 0..count {
            self.step(dt);
        }
    }

    fn state(&self) -> ActivityState {
        self.controller.current_state()
    }

    fn feedback(&mut self) -> Vec<ActionFeedback> {
        self.controller.drain_outbox().feedback
    }
}

fn attack_ids(feedback: &[ActionFeedback]) -> Vec<String> {
    feedback
        .iter()
        .filter_map(|f| match f {
            ActionFeedback::AttackTriggered { id, .. } => Some(id.clone()),
            _ => None,
        })
        .collect()
}

fn position(feedback: &[ActionFeedback], wanted: impl Fn(&ActionFeedback) -> bool) -> usize {
    feedback
        .iter()
        .position(wanted)
        .unwrap_or_else(|| panic!("feedback not found in {:?}", feedback))
}

/// Press Attack and tick until an attack fires; returns its id.
fn next_attack(rig: &mut Rig, dt: f32) -> String {
    rig.input.press(Command::Attack);
    for _ in 0..40 {
        rig.step(dt);
        if let Some(id) = attack_ids(&rig.feedback()).pop() {
            return id;
        }
    }
    panic!("attack never fired");
}

// ============================================================================
// Locomotion
// ============================================================================

#[test]
fn test_idle_moving_jumping_falling_idle() {
    let mut rig = Rig::new();
    let dt = 1.0 / 60.0;

    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Idle);

    rig.input.set_move(Vec2::new(1.0, 0.0));
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Moving);

    rig.input.press(Command::Jump);
    rig.logic(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert_eq!(rig.velocity.y, MovementTuning::default().jump_speed);
    assert_eq!(rig.controller.timers().coyote.remaining(), 0.0);
    rig.controller
        .tick_physics(&rig.input, &mut rig.velocity, dt);

    rig.grounded = false;
    for _ in 0..200 {
        if rig.state() == ActivityState::Falling {
            break;
        }
        rig.step(dt);
    }
    assert_eq!(rig.state(), ActivityState::Falling);
    assert!(rig.velocity.y < 0.0);

    rig.grounded = true;
    rig.input.set_move(Vec2::ZERO);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_landing_with_move_input_settles_into_moving() {
    let mut rig = Rig::new();
    rig.grounded = false;
    rig.step(0.02);
    assert_eq!(rig.state(), ActivityState::Falling);

    rig.input.set_move(Vec2::new(-1.0, 0.0));
    rig.grounded = true;
    rig.step(0.02);
    assert_eq!(rig.state(), ActivityState::Moving);
    assert!(!rig.controller.is_facing_right());
}

#[test]
fn test_coyote_jump_after_leaving_ground() {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.steps(3, dt);

    rig.grounded = false;
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Falling);
    assert!(!rig.controller.is_grounded());
    rig.step(dt);

    rig.input.press(Command::Jump);
    rig.logic(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert_eq!(rig.velocity.y, MovementTuning::default().jump_speed);
}

#[test]
fn test_jump_after_coyote_window_only_arms_buffer() {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.steps(3, dt);

    rig.grounded = false;
    rig.steps(7, dt);
    assert_eq!(rig.state(), ActivityState::Falling);

    rig.input.press(Command::Jump);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Falling);
    assert!(rig.controller.timers().jump_buffer.is_running());
    assert!(!rig.input.is_pressed(Command::Jump));
}

#[test]
fn test_buffered_jump_fires_on_landing_tick() {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.grounded = false;
    rig.steps(10, dt);
    assert_eq!(rig.state(), ActivityState::Falling);

    rig.input.press(Command::Jump);
    rig.step(dt);
    rig.steps(2, dt);
    assert_eq!(rig.state(), ActivityState::Falling);
    rig.feedback();

    rig.grounded = true;
    rig.logic(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert_eq!(rig.velocity.y, MovementTuning::default().jump_speed);
    assert!(rig.feedback().contains(&ActionFeedback::JumpTriggered));
    assert!(!rig.controller.timers().jump_buffer.is_running());
}

#[test]
fn test_expired_jump_buffer_lands_without_jumping() {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.grounded = false;
    rig.steps(10, dt);

    rig.input.press(Command::Jump);
    rig.step(dt);
    rig.steps(6, dt);

    rig.grounded = true;
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_early_release_cuts_jump_once() {
    let mut rig = Rig::new();
    let dt = 1.0 / 60.0;
    rig.input.press(Command::Jump);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);

    rig.grounded = false;
    rig.input.release(Command::Jump);
    let before = rig.velocity.y;
    rig.logic(dt);
    assert!((rig.velocity.y - before * 0.5).abs() < 1e-4);

    let after_cut = rig.velocity.y;
    rig.logic(dt);
    assert_eq!(rig.velocity.y, after_cut);
}

// ============================================================================
// Sprint
// ============================================================================

#[test]
fn test_sprint_runs_for_duration_then_respects_cooldown() {
    let mut rig = Rig::new();
    let dt = 0.05;

    rig.input.press(Command::Sprint);
    rig.logic(dt);
    assert_eq!(rig.state(), ActivityState::Sprinting);
    assert_eq!(rig.velocity, Vec2::new(20.0, 0.0));

    rig.steps(4, dt);
    assert_eq!(rig.state(), ActivityState::Idle);

    rig.input.press(Command::Sprint);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Idle);

    // The blocked press expires instead of firing when the cooldown ends
    rig.steps(20, dt);
    assert_eq!(rig.state(), ActivityState::Idle);
    assert!(!rig.input.is_pressed(Command::Sprint));

    rig.input.press(Command::Sprint);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Sprinting);
}

#[test]
fn test_sprint_follows_input_direction() {
    let mut rig = Rig::new();
    rig.input.set_move(Vec2::new(-1.0, 0.0));
    rig.step(0.02);
    rig.feedback();

    rig.input.press(Command::Sprint);
    rig.step(0.02);
    assert_eq!(rig.state(), ActivityState::Sprinting);
    assert_eq!(rig.velocity.x, -20.0);
    assert!(
        rig.feedback()
            .contains(&ActionFeedback::SprintStarted { direction: -1.0 })
    );
}

#[test]
fn test_tie_break_prefers_jump_then_sprint() {
    let mut rig = Rig::new();
    let dt = 1.0 / 60.0;
    rig.input.set_move(Vec2::new(1.0, 0.0));
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Moving);

    rig.input.press(Command::Jump);
    rig.input.press(Command::Sprint);
    rig.input.press(Command::Attack);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert!(rig.input.is_pressed(Command::Sprint));

    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Sprinting);
    assert!(rig.input.is_pressed(Command::Attack));
}

// ============================================================================
// Attacks and skills
// ============================================================================

#[test]
fn test_ground_combo_progresses_and_wraps() {
    let mut rig = Rig::new();
    let dt = 0.05;

    let ids: Vec<String> = (0..4).map(|_| next_attack(&mut rig, dt)).collect();
    assert_eq!(ids, ["gn_0", "gn_1", "gn_2", "gn_0"]);
    assert_eq!(
        rig.controller
            .combat()
            .combos()
            .index(ComboCategory::GroundNeutral),
        1
    );
}

#[test]
fn test_combo_restarts_after_long_delay() {
    let mut rig = Rig::new();
    let dt = 0.05;

    assert_eq!(next_attack(&mut rig, dt), "gn_0");
    assert_eq!(next_attack(&mut rig, dt), "gn_1");

    rig.steps(50, dt);
    assert_eq!(rig.state(), ActivityState::Idle);
    assert_eq!(next_attack(&mut rig, dt), "gn_0");
}

#[test]
fn test_attack_locks_facing_until_exit() {
    let mut rig = Rig::new();
    rig.input.press(Command::Attack);
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Attacking);
    assert!(!rig.controller.can_current_state_be_interrupted());

    rig.input.set_move(Vec2::new(-1.0, 0.0));
    rig.step(0.05);
    assert!(rig.controller.is_facing_right());
}

#[test]
fn test_up_input_selects_ground_up_attack() {
    let mut rig = Rig::new();
    rig.input.set_move(Vec2::new(0.0, 1.0));
    rig.input.press(Command::Attack);
    rig.step(0.05);

    let feedback = rig.feedback();
    assert!(feedback.contains(&ActionFeedback::AttackTriggered {
        category: ComboCategory::GroundUp,
        id: "gu_0".to_string(),
    }));
}

#[test]
fn test_missing_attack_terminates_next_tick() {
    let mut rig = Rig::new();
    rig.input.set_move(Vec2::new(0.0, -1.0));
    rig.input.press(Command::Attack);
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Attacking);
    assert!(rig.controller.can_current_state_be_interrupted());
    assert!(attack_ids(&rig.feedback()).is_empty());

    rig.input.set_move(Vec2::ZERO);
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_attack_to_skill_ends_attack_exactly_once() {
    let mut rig = Rig::new();
    let dt = 0.05;

    rig.input.press(Command::Attack);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Attacking);
    rig.feedback();

    rig.input.press(Command::Skill(0));
    let mut feedback = Vec::new();
    for _ in 0..5 {
        rig.step(dt);
        feedback.extend(rig.feedback());
    }
    assert_eq!(rig.state(), ActivityState::UsingSkill);

    let ended: Vec<&ActionFeedback> = feedback
        .iter()
        .filter(|f| matches!(f, ActionFeedback::ActionEnded { .. }))
        .collect();
    assert_eq!(
        ended,
        [&ActionFeedback::ActionEnded {
            id: "gn_0".to_string()
        }]
    );

    let ended_at = position(&feedback, |f| matches!(f, ActionFeedback::ActionEnded { .. }));
    let exited_at = position(&feedback, |f| {
        *f == ActionFeedback::StateExited(ActivityState::Attacking)
    });
    let activated_at = position(&feedback, |f| {
        matches!(f, ActionFeedback::SkillActivated { slot: 0, .. })
    });
    let entered_at = position(&feedback, |f| {
        *f == ActionFeedback::StateEntered(ActivityState::UsingSkill)
    });
    assert!(ended_at < exited_at);
    assert!(exited_at < activated_at);
    assert!(activated_at < entered_at);
}

#[test]
fn test_skill_cooldown_blocks_second_use() {
    let mut rig = Rig::new();
    let dt = 0.1;

    rig.input.press(Command::Skill(0));
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::UsingSkill);
    assert_eq!(rig.controller.combat().skills().cooldown(0), 2.0);

    rig.steps(6, dt);
    assert_eq!(rig.state(), ActivityState::Idle);

    rig.input.press(Command::Skill(0));
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_skill_slots_evaluated_in_order() {
    let mut rig = Rig::new();
    rig.input.press(Command::Skill(1));
    rig.input.press(Command::Skill(0));
    rig.step(0.05);

    assert_eq!(rig.state(), ActivityState::UsingSkill);
    assert!(rig.feedback().contains(&ActionFeedback::SkillActivated {
        slot: 0,
        id: "slam".to_string(),
    }));
    assert!(rig.input.is_pressed(Command::Skill(1)));
}

#[test]
fn test_empty_skill_slot_press_is_ignored() {
    let mut rig = Rig::new();
    rig.input.press(Command::Skill(4));
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_sprint_cancels_skill() {
    let mut rig = Rig::new();
    rig.input.press(Command::Skill(0));
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::UsingSkill);
    assert!(!rig.controller.can_current_state_be_interrupted());

    rig.input.press(Command::Sprint);
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Sprinting);
    assert!(rig.controller.combat().active().is_none());
}

#[test]
fn test_aerial_attack_stalls_and_ends_on_landing() {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.grounded = false;
    rig.step(dt);
    rig.feedback();

    rig.input.press(Command::Attack);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Attacking);
    assert_eq!(rig.velocity.y, MotionPolicy::default().air_stall_vertical_velocity);
    assert_eq!(attack_ids(&rig.feedback()), ["an_0"]);

    rig.grounded = true;
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Idle);
    assert!(rig.feedback().contains(&ActionFeedback::ActionEnded {
        id: "an_0".to_string()
    }));
}

#[test]
fn test_mobile_skill_can_be_cancelled_by_jump() {
    let mut rig = Rig::new();
    let mut dash = strike_skill("glide");
    dash.motion.can_move_while_active = true;
    rig.controller.equip_skill(dash, 2);

    rig.input.press(Command::Skill(2));
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::UsingSkill);
    assert!(rig.controller.can_current_state_be_interrupted());

    rig.input.press(Command::Jump);
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert!(rig.controller.combat().active().is_none());
}

#[test]
fn test_mobile_skill_can_be_cancelled_by_another_skill() {
    let mut rig = Rig::new();
    let mut dash = strike_skill("glide");
    dash.motion.can_move_while_active = true;
    rig.controller.equip_skill(dash, 2);

    rig.input.press(Command::Skill(2));
    rig.step(0.05);
    rig.feedback();

    rig.input.press(Command::Skill(0));
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::UsingSkill);
    let feedback = rig.feedback();
    assert!(feedback.contains(&ActionFeedback::ActionEnded {
        id: "glide".to_string()
    }));
    assert!(feedback.contains(&ActionFeedback::SkillActivated {
        slot: 0,
        id: "slam".to_string(),
    }));
}

#[test]
fn test_grounded_attack_halts_momentum() {
    let mut rig = Rig::new();
    let dt = 0.05;
    rig.input.set_move(Vec2::new(1.0, 0.0));
    rig.steps(2, dt);
    assert_eq!(rig.state(), ActivityState::Moving);
    assert_eq!(rig.velocity.x, MovementTuning::default().move_speed);

    rig.input.press(Command::Attack);
    rig.logic(dt);
    assert_eq!(rig.state(), ActivityState::Attacking);
    assert_eq!(rig.velocity.x, 0.0);

    rig.controller
        .tick_physics(&rig.input, &mut rig.velocity, dt);
    assert_eq!(rig.velocity.x, 0.0);
}

/// Start a 0.3 s ground attack, then press `command` and check it is held
/// back until 70% of the attack has elapsed.
fn assert_interrupt_threshold(command: Command, expected: ActivityState) {
    let mut rig = Rig::new();
    rig.input.press(Command::Attack);
    rig.logic(0.1);
    assert_eq!(rig.state(), ActivityState::Attacking);
    rig.feedback();

    rig.input.press(command);
    rig.logic(0.1);
    rig.logic(0.1);
    // 0.2 of 0.3 s elapsed
    assert_eq!(rig.state(), ActivityState::Attacking);
    assert!(!rig.controller.can_current_state_be_interrupted());
    assert!(rig.input.is_pressed(command));
    assert!(attack_ids(&rig.feedback()).is_empty());

    // 0.22 of 0.3 s elapsed
    rig.logic(0.02);
    assert_eq!(rig.state(), expected);
    assert!(!rig.input.is_pressed(command));
}

#[test]
fn test_attack_cannot_be_interrupted_by_attack_before_threshold() {
    assert_interrupt_threshold(Command::Attack, ActivityState::Attacking);
}

#[test]
fn test_attack_cannot_be_interrupted_by_skill_before_threshold() {
    assert_interrupt_threshold(Command::Skill(0), ActivityState::UsingSkill);
}

// ============================================================================
// Landing
// ============================================================================

/// Leave the ground, enter a state with `enter`, then touch down holding `axis`.
fn land_from(enter: impl Fn(&mut Rig), axis: Vec2) -> Rig {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.grounded = false;
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Falling);

    enter(&mut rig);
    rig.input.set_move(axis);
    rig.grounded = true;
    rig.logic(dt);
    rig
}

fn air_attack(rig: &mut Rig) {
    rig.input.press(Command::Attack);
    rig.step(0.02);
    assert_eq!(rig.state(), ActivityState::Attacking);
}

fn air_skill(rig: &mut Rig) {
    rig.input.press(Command::Skill(0));
    rig.step(0.02);
    assert_eq!(rig.state(), ActivityState::UsingSkill);
}

fn air_sprint(rig: &mut Rig) {
    rig.input.set_move(Vec2::new(1.0, 0.0));
    rig.input.press(Command::Sprint);
    rig.step(0.02);
    assert_eq!(rig.state(), ActivityState::Sprinting);
    assert_eq!(rig.velocity, Vec2::new(20.0, 0.0));
}

#[test]
fn test_landing_from_air_sprint_keeps_moving() {
    let rig = land_from(air_sprint, Vec2::new(1.0, 0.0));
    assert_eq!(rig.state(), ActivityState::Moving);
    assert_ne!(rig.velocity.x, 0.0);
}

#[test]
fn test_landing_from_air_sprint_without_input_idles() {
    let rig = land_from(air_sprint, Vec2::ZERO);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_landing_from_air_attack_follows_move_axis() {
    let rig = land_from(air_attack, Vec2::new(1.0, 0.0));
    assert_eq!(rig.state(), ActivityState::Moving);

    let rig = land_from(air_attack, Vec2::ZERO);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_landing_from_air_skill_follows_move_axis() {
    let rig = land_from(air_skill, Vec2::new(-1.0, 0.0));
    assert_eq!(rig.state(), ActivityState::Moving);

    let rig = land_from(air_skill, Vec2::ZERO);
    assert_eq!(rig.state(), ActivityState::Idle);
}

/// Enter an airborne state with `enter`, press Jump once in the air, then land.
fn buffered_landing(enter: impl Fn(&mut Rig)) -> Rig {
    let rig = land_from(
        |rig| {
            enter(rig);
            rig.input.press(Command::Jump);
            rig.step(0.02);
            assert!(rig.controller.timers().jump_buffer.is_running());
            assert!(!rig.input.is_pressed(Command::Jump));
            rig.feedback();
        },
        Vec2::ZERO,
    );
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert_eq!(rig.velocity.y, MovementTuning::default().jump_speed);
    rig
}

#[test]
fn test_jump_buffered_while_jumping_fires_on_landing() {
    let mut rig = Rig::new();
    let dt = 0.02;
    rig.input.press(Command::Jump);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);

    rig.grounded = false;
    rig.step(dt);
    rig.input.press(Command::Jump);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert!(rig.controller.timers().jump_buffer.is_running());
    rig.feedback();

    rig.grounded = true;
    rig.logic(dt);
    assert_eq!(rig.state(), ActivityState::Jumping);
    assert_eq!(rig.velocity.y, MovementTuning::default().jump_speed);
    assert!(rig.feedback().contains(&ActionFeedback::JumpTriggered));
}

#[test]
fn test_jump_buffered_during_air_attack_fires_on_landing() {
    let mut rig = buffered_landing(air_attack);
    assert!(rig.feedback().contains(&ActionFeedback::ActionEnded {
        id: "an_0".to_string()
    }));
}

#[test]
fn test_jump_buffered_during_air_skill_fires_on_landing() {
    let mut rig = buffered_landing(air_skill);
    assert!(rig.feedback().contains(&ActionFeedback::JumpTriggered));
}

#[test]
fn test_jump_buffered_during_air_sprint_fires_on_landing() {
    let mut rig = buffered_landing(air_sprint);
    assert!(rig.feedback().contains(&ActionFeedback::JumpTriggered));
}

// ============================================================================
// Damage and external requests
// ============================================================================

#[test]
fn test_invincibility_window_ignores_damage() {
    let mut rig = Rig::new();

    assert_eq!(
        rig.controller.on_damage_taken(10.0),
        DamageResult::Hurt { dealt: 10.0 }
    );
    assert_eq!(rig.controller.on_damage_taken(10.0), DamageResult::Ignored);
    assert_eq!(rig.controller.health().current, 90.0);

    rig.steps(4, 0.25);
    assert_eq!(
        rig.controller.on_damage_taken(10.0),
        DamageResult::Hurt { dealt: 10.0 }
    );
    assert_eq!(rig.controller.health().current, 80.0);
}

#[test]
fn test_lethal_damage_defeats_character() {
    let mut rig = Rig::new();
    assert_eq!(
        rig.controller.on_damage_taken(500.0),
        DamageResult::Killed { dealt: 100.0 }
    );
    assert!(rig.controller.is_defeated());
    assert!(rig.feedback().contains(&ActionFeedback::Died));

    rig.input.press(Command::Attack);
    rig.step(0.05);
    assert_eq!(rig.state(), ActivityState::Idle);
    assert_eq!(rig.controller.on_damage_taken(1.0), DamageResult::Ignored);
}

#[test]
fn test_hurt_stun_plays_special_animation() {
    let mut rig = Rig::with_tuning(CombatTuning {
        hurt_stun: 0.3,
        ..CombatTuning::default()
    });
    let dt = 0.1;

    rig.controller.on_damage_taken(5.0);
    rig.step(dt);
    assert_eq!(rig.state(), ActivityState::SpecialAnimation);
    assert!(!rig.controller.can_current_state_be_interrupted());
    assert!(rig.feedback().contains(&ActionFeedback::SpecialAnimation {
        trigger: HURT_TRIGGER.to_string()
    }));

    rig.input.set_move(Vec2::new(-1.0, 0.0));
    rig.step(dt);
    assert!(rig.controller.is_facing_right());

    rig.steps(3, dt);
    assert_eq!(rig.state(), ActivityState::Moving);
}

#[test]
fn test_no_hurt_stun_when_disabled() {
    let mut rig = Rig::new();
    rig.controller.on_damage_taken(5.0);
    rig.step(0.1);
    assert_eq!(rig.state(), ActivityState::Idle);
}

#[test]
fn test_last_requested_transition_wins() {
    let mut rig = Rig::new();
    rig.controller.request_transition(Transition::Moving);
    rig.controller.play_special_animation("Taunt", 0.5);
    rig.step(0.05);

    assert_eq!(rig.state(), ActivityState::SpecialAnimation);
    assert!(rig.feedback().contains(&ActionFeedback::SpecialAnimation {
        trigger: "Taunt".to_string()
    }));
}

#[test]
fn test_equip_rejects_out_of_range_slot() {
    let mut rig = Rig::new();
    assert!(!rig.controller.equip_skill(strike_skill("far"), 9));
    assert!(rig.controller.equip_skill(strike_skill("near"), 6));
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut rig = Rig::new();
    rig.input.press(Command::Attack);
    rig.step(0.05);

    let json = match serde_json::to_value(rig.controller.snapshot()) {
        Ok(json) => json,
        Err(e) => panic!("snapshot failed to serialize: {e}"),
    };
    assert_eq!(json["state"], "Attacking");
    assert_eq!(json["combo_indices"][0], 1);
    assert_eq!(json["active_action"]["id"], "gn_0");
}

#[test]
fn test_build_controller_from_builtin_content() {
    let registry = crate::content::ContentRegistry::builtin();
    let controller = build_controller(
        &registry,
        crate::content::BUILTIN_LOADOUT,
        &MovementTuning::default(),
        &CombatTuning::default(),
        &InputTuning::default(),
    );
    assert_eq!(controller.combat().skills().slot_count(), 7);
    assert!(controller.combat().skills().skill(0).is_some());
    assert_eq!(
        controller
            .combat()
            .combos()
            .sequence_len(ComboCategory::GroundNeutral),
        3
    );
}

#[test]
fn test_unknown_loadout_builds_unarmed_controller() {
    let registry = crate::content::ContentRegistry::builtin();
    let controller = build_controller(
        &registry,
        "missing",
        &MovementTuning::default(),
        &CombatTuning::default(),
        &InputTuning::default(),
    );
    assert_eq!(
        controller
            .combat()
            .combos()
            .sequence_len(ComboCategory::GroundNeutral),
        0
    );
}
