//! Actions domain: the player action state machine.
//!
//! [`ActionController`] owns every piece of per-character action state:
//! the active [`ActivityState`], the timer bank, the movement solver, the
//! combat resolver, facing and health. It is driven by two calls:
//!
//! - [`ActionController::tick_logic`] once per frame, which advances timers,
//!   samples the ground sensor and performs at most one transition.
//! - [`ActionController::tick_physics`] once per fixed step, which lets the
//!   active state write the body's velocity.
//!
//! Outward effects are queued in an [`ActionOutbox`] and drained by systems.

use bevy::prelude::*;
use serde::Serialize;

use crate::actions::{ActionFeedback, ActionOutbox, ActivityState, StateScratch, Transition};
use crate::combat::{
    ActionStart, ActiveAction, CombatResolver, CombatTuning, ComboCategory, DamageResult,
    Damageable, Health,
};
use crate::content::SkillDef;
use crate::core::TimerBank;
use crate::input::{Command, InputSnapshot, InputTuning};
use crate::movement::{Facing, MovementSolver, MovementTuning, Orientation};

/// Trigger name used for the hurt animation forced by damage.
pub const HURT_TRIGGER: &str = "Hurt";

#[derive(Component, Debug, Clone)]
pub struct ActionController {
    state: ActivityState,
    scratch: StateScratch,
    timers: TimerBank,
    motor: MovementSolver,
    combat: CombatResolver,
    orientation: Orientation,
    health: Health,
    outbox: ActionOutbox,
    combat_tuning: CombatTuning,
    input_tuning: InputTuning,
    /// Seconds of logic time since creation
    clock: f32,
    defeated: bool,
    pending: Option<Transition>,
    transitioning: bool,
}

/// Serializable view of the controller for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct ControllerSnapshot {
    pub state: ActivityState,
    pub clock: f32,
    pub scratch: StateScratch,
    pub interruptible: bool,
    pub grounded: bool,
    pub facing: Facing,
    pub can_flip: bool,
    pub timers: TimerBank,
    pub combo_indices: [usize; 6],
    pub skill_cooldowns: Vec<f32>,
    pub active_action: Option<ActiveAction>,
    pub health: Health,
    pub defeated: bool,
}

impl ActionController {
    pub fn new(
        movement: MovementTuning,
        combat_tuning: CombatTuning,
        input_tuning: InputTuning,
        combat: CombatResolver,
    ) -> Self {
        Self {
            state: ActivityState::Idle,
            scratch: StateScratch::default(),
            timers: TimerBank::default(),
            motor: MovementSolver::new(movement),
            combat,
            orientation: Orientation::default(),
            health: Health::new(combat_tuning.max_health),
            outbox: ActionOutbox::default(),
            combat_tuning,
            input_tuning,
            clock: 0.0,
            defeated: false,
            pending: None,
            transitioning: false,
        }
    }

    // ------------------------------------------------------------------
    // Public contract
    // ------------------------------------------------------------------

    pub fn current_state(&self) -> ActivityState {
        self.state
    }

    pub fn is_grounded(&self) -> bool {
        self.motor.is_grounded()
    }

    pub fn is_facing_right(&self) -> bool {
        self.orientation.is_facing_right()
    }

    pub fn facing(&self) -> Facing {
        self.orientation.facing()
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn timers(&self) -> &TimerBank {
        &self.timers
    }

    pub fn combat(&self) -> &CombatResolver {
        &self.combat
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn can_current_state_be_interrupted(&self) -> bool {
        match self.state {
            ActivityState::Attacking => {
                self.scratch.finished
                    || self.scratch.duration <= 0.0
                    || self.scratch.progress(self.clock)
                        >= self.combat_tuning.interrupt_threshold
            }
            ActivityState::UsingSkill => {
                self.scratch.finished || self.scratch.motion.can_move_while_active
            }
            ActivityState::SpecialAnimation => false,
            _ => true,
        }
    }

    /// Queue a transition for the next logic tick. The last request wins.
    pub fn request_transition(&mut self, transition: Transition) {
        if self.transitioning {
            debug_assert!(
                false,
                "transition to {:?} requested during a transition",
                transition
            );
            error!(
                "Transition to {:?} requested during a transition; last request wins",
                transition.target()
            );
        }
        if let Some(previous) = self.pending.replace(transition) {
            debug!("Pending transition to {:?} replaced", previous.target());
        }
    }

    /// Enter `SpecialAnimation` for `duration` seconds on the next logic tick.
    pub fn play_special_animation(&mut self, trigger: impl Into<String>, duration: f32) {
        self.request_transition(Transition::SpecialAnimation {
            trigger: trigger.into(),
            duration,
        });
    }

    pub fn equip_skill(&mut self, def: SkillDef, slot: usize) -> bool {
        let id = def.id.clone();
        let equipped = self.combat.equip_skill(def, slot);
        if equipped {
            info!("Equipped skill '{}' in slot {}", id, slot);
        } else {
            warn!("Cannot equip skill '{}': slot {} out of range", id, slot);
        }
        equipped
    }

    /// Apply incoming damage. Ignored while invincible or defeated.
    pub fn on_damage_taken(&mut self, amount: f32) -> DamageResult {
        if !self.can_be_damaged() {
            return DamageResult::Ignored;
        }

        let dealt = self.health.take_damage(amount);
        self.outbox
            .feedback
            .push(ActionFeedback::Damaged { amount: dealt });

        if self.health.is_dead() {
            info!("Player defeated");
            self.defeated = true;
            self.pending = None;
            self.combat.end_active(&mut self.outbox);
            self.outbox.feedback.push(ActionFeedback::Died);
            return DamageResult::Killed { dealt };
        }

        self.timers
            .invincibility
            .arm(self.combat_tuning.invincibility_time);

        let stun = self.combat_tuning.hurt_stun;
        if stun > 0.0 && self.can_current_state_be_interrupted() {
            self.play_special_animation(HURT_TRIGGER, stun);
        }

        DamageResult::Hurt { dealt }
    }

    /// Take everything queued since the last drain.
    pub fn drain_outbox(&mut self) -> ActionOutbox {
        std::mem::take(&mut self.outbox)
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            state: self.state,
            clock: self.clock,
            scratch: self.scratch.clone(),
            interruptible: self.can_current_state_be_interrupted(),
            grounded: self.motor.is_grounded(),
            facing: self.orientation.facing(),
            can_flip: self.orientation.can_flip(),
            timers: self.timers.clone(),
            combo_indices: self.combat.combos().indices(),
            skill_cooldowns: self.combat.skills().cooldowns().to_vec(),
            active_action: self.combat.active().cloned(),
            health: self.health.clone(),
            defeated: self.defeated,
        }
    }

    // ------------------------------------------------------------------
    // Logic tick
    // ------------------------------------------------------------------

    /// Advance timers, sample the sensor and run the active state's logic.
    ///
    /// At most one transition happens per call; its exit and enter hooks run
    /// before this returns.
    pub fn tick_logic(
        &mut self,
        input: &mut InputSnapshot,
        velocity: &mut Vec2,
        grounded: bool,
        dt: f32,
    ) {
        let dt = dt.max(0.0);

        if self.defeated {
            self.motor.sense(grounded);
            input.age_presses(dt, self.input_tuning.press_lifetime);
            return;
        }

        self.clock += dt;
        self.timers.tick(dt);

        self.motor.sense(grounded);
        if grounded && velocity.y <= 0.0 {
            self.timers.coyote.arm(self.motor.tuning().coyote_time);
        }

        self.combat.tick(dt, self.clock);
        self.orientation
            .update(input.move_axis().x, self.input_tuning.dead_zone);

        let next = match self.pending.take() {
            Some(requested) => Some(requested),
            None => self.decide(input, velocity),
        };
        if let Some(transition) = next {
            self.change_state(transition, input, velocity);
        }

        input.age_presses(dt, self.input_tuning.press_lifetime);
    }

    fn decide(&mut self, input: &mut InputSnapshot, velocity: &mut Vec2) -> Option<Transition> {
        match self.state {
            ActivityState::Idle | ActivityState::Moving => self.decide_grounded(input),
            ActivityState::Jumping => self.decide_jumping(input, velocity),
            ActivityState::Falling => self.decide_falling(input),
            ActivityState::Attacking => self.decide_attacking(input),
            ActivityState::UsingSkill => self.decide_using_skill(input),
            ActivityState::Sprinting => self.decide_sprinting(input),
            ActivityState::SpecialAnimation => self
                .scratch
                .is_done(self.clock)
                .then(|| self.settle(input)),
        }
    }

    fn decide_grounded(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if !self.motor.is_grounded() {
            return Some(Transition::Falling);
        }

        let moving = self.has_move_input(input);
        match (self.state, moving) {
            (ActivityState::Idle, true) => return Some(Transition::Moving),
            (ActivityState::Moving, false) => return Some(Transition::Idle),
            _ => {}
        }

        if input.consume(Command::Jump) {
            return Some(Transition::Jumping);
        }
        self.try_sprint(input).or_else(|| self.try_offense(input))
    }

    fn decide_jumping(
        &mut self,
        input: &mut InputSnapshot,
        velocity: &mut Vec2,
    ) -> Option<Transition> {
        let grounded = self.motor.is_grounded();
        let settled = grounded && velocity.y <= 0.0 && self.scratch.elapsed(self.clock) > 0.0;
        if self.motor.just_landed() || settled {
            return Some(self.land(input));
        }
        if velocity.y < 0.0 {
            return Some(Transition::Falling);
        }

        if !self.scratch.jump_cut && !input.is_held(Command::Jump) {
            self.motor.cut_jump(velocity);
            self.scratch.jump_cut = true;
        }

        if input.consume(Command::Jump) {
            self.timers
                .jump_buffer
                .arm(self.motor.tuning().jump_buffer_time);
        }

        self.try_sprint(input).or_else(|| self.try_offense(input))
    }

    fn decide_falling(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if self.motor.is_grounded() {
            return Some(self.land(input));
        }

        if input.consume(Command::Jump) {
            if self.timers.coyote.is_running() {
                return Some(Transition::Jumping);
            }
            self.timers
                .jump_buffer
                .arm(self.motor.tuning().jump_buffer_time);
        }

        self.try_sprint(input).or_else(|| self.try_offense(input))
    }

    fn decide_attacking(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if self.scratch.is_done(self.clock) {
            if self.timers.combo_window.is_running() && input.consume(Command::Attack) {
                return Some(Transition::Attacking);
            }
            return Some(self.settle(input));
        }
        if self.motor.just_landed() {
            return Some(self.land(input));
        }

        if let Some(sprint) = self.try_sprint(input) {
            return Some(sprint);
        }
        self.buffer_air_jump(input);
        if self.can_current_state_be_interrupted() {
            return self.try_offense(input);
        }
        None
    }

    fn decide_using_skill(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if self.scratch.is_done(self.clock) {
            return Some(self.settle(input));
        }
        if self.motor.just_landed() {
            return Some(self.land(input));
        }

        if let Some(sprint) = self.try_sprint(input) {
            return Some(sprint);
        }
        let interruptible = self.can_current_state_be_interrupted();
        let can_jump = self.motor.is_grounded() || self.timers.coyote.is_running();
        if interruptible && can_jump && input.consume(Command::Jump) {
            return Some(Transition::Jumping);
        }
        self.buffer_air_jump(input);
        if !interruptible {
            return None;
        }
        self.try_offense(input)
    }

    fn decide_sprinting(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if self.scratch.is_done(self.clock) {
            return Some(if self.motor.is_grounded() {
                Transition::Idle
            } else {
                Transition::Falling
            });
        }
        if self.motor.just_landed() {
            return Some(self.land(input));
        }
        self.buffer_air_jump(input);
        None
    }

    /// Touchdown from any airborne state. A buffered or fresh jump fires on
    /// the landing tick itself.
    fn land(&self, input: &mut InputSnapshot) -> Transition {
        if self.timers.jump_buffer.is_running() || input.consume(Command::Jump) {
            return Transition::Jumping;
        }
        self.settle(input)
    }

    /// Jump presses made in the air while a state cannot jump arm the buffer.
    fn buffer_air_jump(&mut self, input: &mut InputSnapshot) {
        if !self.motor.is_grounded() && input.consume(Command::Jump) {
            self.timers
                .jump_buffer
                .arm(self.motor.tuning().jump_buffer_time);
        }
    }

    /// Idle, Moving or Falling from the ground sensor and move axis.
    fn settle(&self, input: &InputSnapshot) -> Transition {
        if !self.motor.is_grounded() {
            Transition::Falling
        } else if self.has_move_input(input) {
            Transition::Moving
        } else {
            Transition::Idle
        }
    }

    fn has_move_input(&self, input: &InputSnapshot) -> bool {
        input.move_axis().x.abs() > self.input_tuning.dead_zone
    }

    fn try_sprint(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if self.timers.sprint_cooldown.is_running() || !input.is_pressed(Command::Sprint) {
            return None;
        }
        input.consume(Command::Sprint);
        Some(Transition::Sprinting)
    }

    /// Attack first, then skill slots in order. First eligible wins.
    fn try_offense(&mut self, input: &mut InputSnapshot) -> Option<Transition> {
        if input.consume(Command::Attack) {
            return Some(Transition::Attacking);
        }

        let grounded = self.motor.is_grounded();
        for slot in 0..self.combat.skills().slot_count() {
            let command = Command::Skill(slot as u8);
            if input.is_pressed(command) && self.combat.can_use_skill(slot, grounded) {
                input.consume(command);
                return Some(Transition::UsingSkill { slot });
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn change_state(
        &mut self,
        transition: Transition,
        input: &InputSnapshot,
        velocity: &mut Vec2,
    ) {
        if self.transitioning {
            debug_assert!(false, "nested transition to {:?}", transition);
            error!("Nested transition to {:?} ignored", transition.target());
            return;
        }
        self.transitioning = true;

        let from = self.state;
        let to = transition.target();

        self.exit_state();
        self.outbox.feedback.push(ActionFeedback::StateExited(from));

        self.state = to;
        self.scratch = StateScratch::enter(self.clock, !self.motor.is_grounded());
        self.enter_state(transition, input, velocity);
        self.outbox.feedback.push(ActionFeedback::StateEntered(to));

        debug!("Action state: {:?} -> {:?}", from, to);
        self.transitioning = false;
    }

    fn exit_state(&mut self) {
        match self.state {
            ActivityState::Attacking | ActivityState::UsingSkill => {
                self.orientation.set_can_flip(true);
                self.combat.end_active(&mut self.outbox);
            }
            ActivityState::Sprinting => self.motor.end_sprint(),
            ActivityState::SpecialAnimation => self.orientation.set_can_flip(true),
            _ => {}
        }
    }

    fn enter_state(&mut self, transition: Transition, input: &InputSnapshot, velocity: &mut Vec2) {
        match transition {
            Transition::Idle => self.motor.halt_horizontal(velocity),
            Transition::Moving | Transition::Falling => {}
            Transition::Jumping => {
                self.motor.jump(velocity);
                self.timers.coyote.clear();
                self.timers.jump_buffer.clear();
                self.outbox.feedback.push(ActionFeedback::JumpTriggered);
            }
            Transition::Attacking => self.enter_attacking(input, velocity),
            Transition::UsingSkill { slot } => self.enter_using_skill(slot, velocity),
            Transition::Sprinting => {
                let direction = self.motor.sprint_direction(
                    input.move_axis(),
                    self.orientation.facing(),
                    self.input_tuning.dead_zone,
                );
                self.orientation.face(if direction < 0.0 {
                    Facing::Left
                } else {
                    Facing::Right
                });
                self.scratch.sprint_direction = direction;
                self.scratch.duration = self.motor.tuning().sprint_duration;
                self.motor.sprint(velocity, direction);
                self.timers
                    .sprint_cooldown
                    .arm(self.motor.tuning().sprint_cooldown);
                self.outbox
                    .feedback
                    .push(ActionFeedback::SprintStarted { direction });
            }
            Transition::SpecialAnimation { trigger, duration } => {
                self.orientation.set_can_flip(false);
                self.scratch.duration = duration.max(0.0);
                self.scratch.trigger = Some(trigger.clone());
                self.outbox
                    .feedback
                    .push(ActionFeedback::SpecialAnimation { trigger });
            }
        }
    }

    fn enter_attacking(&mut self, input: &InputSnapshot, velocity: &mut Vec2) {
        self.orientation.set_can_flip(false);

        let grounded = self.motor.is_grounded();
        let category = ComboCategory::select(
            grounded,
            input.move_axis().y,
            self.input_tuning.directional_threshold,
        );

        let started = self.combat.perform_attack(
            category,
            self.clock,
            self.orientation.facing(),
            &mut self.outbox,
        );
        let Some(start) = started else {
            warn!("No attack defined for {:?}; ending attack", category);
            self.scratch.finished = true;
            return;
        };

        self.timers
            .combo_window
            .arm(self.combat_tuning.combo_window);
        self.begin_action(start, velocity);
    }

    fn enter_using_skill(&mut self, slot: usize, velocity: &mut Vec2) {
        self.scratch.skill_slot = Some(slot);

        let started = self.combat.use_skill(
            slot,
            self.motor.is_grounded(),
            self.clock,
            self.orientation.facing(),
            &mut self.outbox,
        );
        let Some(start) = started else {
            warn!("Skill slot {} could not be used; ending skill", slot);
            self.scratch.finished = true;
            return;
        };

        self.orientation
            .set_can_flip(start.motion.can_move_while_active);
        let dash_speed = start.dash_speed;
        self.begin_action(start, velocity);
        if let Some(speed) = dash_speed {
            velocity.x = self.orientation.facing().sign() * speed;
        }
    }

    /// Shared entry for attacks and skills: record the action and apply the
    /// momentum policy once.
    fn begin_action(&mut self, start: ActionStart, velocity: &mut Vec2) {
        let motion = start.motion;
        self.scratch.duration = start.duration;
        self.scratch.finished = start.duration <= 0.0;
        self.scratch.motion = motion;
        self.scratch.action_id = Some(start.id);

        if self.motor.is_grounded() {
            if motion.halt_momentum_on_ground {
                self.motor.halt_horizontal(velocity);
            }
        } else if motion.stall_in_air {
            velocity.y = motion.air_stall_vertical_velocity;
            velocity.x *= motion.air_stall_control_dampening;
        }
    }

    // ------------------------------------------------------------------
    // Physics tick
    // ------------------------------------------------------------------

    /// Let the active state write the body's velocity for one fixed step.
    pub fn tick_physics(&mut self, input: &InputSnapshot, velocity: &mut Vec2, dt: f32) {
        let axis_x = if self.has_move_input(input) {
            input.move_axis().x
        } else {
            0.0
        };
        let jump_held = input.is_held(Command::Jump);

        if self.defeated {
            self.motor.halt_horizontal(velocity);
            self.motor.apply_gravity(velocity, dt);
            return;
        }

        match self.state {
            ActivityState::Idle => {
                self.motor.halt_horizontal(velocity);
                self.motor.apply_gravity(velocity, dt);
            }
            ActivityState::Moving => {
                self.motor.move_horizontal(velocity, axis_x, 1.0);
                self.motor.apply_gravity(velocity, dt);
            }
            ActivityState::Jumping | ActivityState::Falling => {
                let air_control = self.motor.tuning().air_control_factor;
                self.motor.move_horizontal(velocity, axis_x, air_control);
                self.motor.apply_gravity(velocity, dt);
                self.motor.apply_fall_gravity(velocity, jump_held, dt);
            }
            ActivityState::Attacking | ActivityState::UsingSkill => {
                self.action_physics(velocity, axis_x, jump_held, dt);
            }
            ActivityState::Sprinting => {
                self.motor
                    .apply_sprint_velocity(velocity, self.scratch.sprint_direction);
            }
            ActivityState::SpecialAnimation => {
                self.motor.apply_gravity(velocity, dt);
            }
        }
    }

    /// Physics shared by attacks and skills, driven by their motion policy.
    fn action_physics(&self, velocity: &mut Vec2, axis_x: f32, jump_held: bool, dt: f32) {
        let motion = self.scratch.motion;
        let grounded = self.motor.is_grounded();
        let stalled = self.scratch.entered_airborne && motion.stall_in_air && !grounded;

        if stalled {
            velocity.y = motion.air_stall_vertical_velocity;
            if motion.can_move_while_active {
                let control = self.motor.tuning().air_control_factor
                    * motion.air_stall_control_dampening
                    * motion.movement_speed_modifier;
                self.motor.move_horizontal(velocity, axis_x, control);
            }
            return;
        }

        self.motor.apply_gravity(velocity, dt);
        self.motor.apply_fall_gravity(velocity, jump_held, dt);

        if motion.can_move_while_active {
            let base = if grounded {
                1.0
            } else {
                self.motor.tuning().air_control_factor
            };
            self.motor
                .move_horizontal(velocity, axis_x, base * motion.movement_speed_modifier);
        }
    }
}

impl Damageable for ActionController {
    fn can_be_damaged(&self) -> bool {
        !self.defeated && !self.timers.invincibility.is_running()
    }

    fn take_damage(&mut self, amount: f32) -> DamageResult {
        self.on_damage_taken(amount)
    }
}
