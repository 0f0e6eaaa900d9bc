//! Combat domain: attack categories.

use serde::Serialize;

/// One of the six mutually exclusive combo buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComboCategory {
    GroundNeutral,
    GroundUp,
    GroundDown,
    AirNeutral,
    AirUp,
    AirDown,
}

impl ComboCategory {
    pub const ALL: [ComboCategory; 6] = [
        ComboCategory::GroundNeutral,
        ComboCategory::GroundUp,
        ComboCategory::GroundDown,
        ComboCategory::AirNeutral,
        ComboCategory::AirUp,
        ComboCategory::AirDown,
    ];

    /// Position in [`ComboCategory::ALL`] and in `MovesetDef::sequences`.
    pub fn index(self) -> usize {
        match self {
            ComboCategory::GroundNeutral => 0,
            ComboCategory::GroundUp => 1,
            ComboCategory::GroundDown => 2,
            ComboCategory::AirNeutral => 3,
            ComboCategory::AirUp => 4,
            ComboCategory::AirDown => 5,
        }
    }

    /// Pick a category from the ground sensor and the vertical axis.
    pub fn select(grounded: bool, vertical: f32, threshold: f32) -> Self {
        let up = vertical > threshold;
        let down = vertical < -threshold;
        match (grounded, up, down) {
            (true, true, _) => ComboCategory::GroundUp,
            (true, _, true) => ComboCategory::GroundDown,
            (true, _, _) => ComboCategory::GroundNeutral,
            (false, true, _) => ComboCategory::AirUp,
            (false, _, true) => ComboCategory::AirDown,
            (false, _, _) => ComboCategory::AirNeutral,
        }
    }
}
