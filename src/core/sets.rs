//! Core domain: system ordering for the per-frame action pipeline.

use bevy::prelude::*;

/// Ordering of the per-frame pipeline in `Update`.
/// Physics runs separately in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionSystems {
    /// Command source refreshes every `InputSnapshot`
    Input,
    /// Ground sensor sampling
    Sense,
    /// Timers and state logic
    Logic,
    /// Outbox draining: feedback messages, strikes, projectiles
    Effects,
}
