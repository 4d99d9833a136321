// Behavior weights steering the adaptive opponent's shot selection

use serde::{Deserialize, Serialize};

/// Inclusive range a weight is clamped into after every update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBounds {
    pub min: f32,
    pub max: f32,
}

impl WeightBounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

pub const CORNER_BOUNDS: WeightBounds = WeightBounds::new(0.05, 0.95);
pub const HEIGHT_BOUNDS: WeightBounds = WeightBounds::new(0.05, 0.95);
pub const PATTERN_BOUNDS: WeightBounds = WeightBounds::new(0.10, 0.90);
pub const RANDOM_BOUNDS: WeightBounds = WeightBounds::new(0.05, 0.80);

/// Tunable parameters of the adaptive opponent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorWeights {
    /// Tendency to go for the corners
    pub corner_preference: f32,
    /// Spread applied to shot height
    pub height_variation: f32,
    /// Chance of countering the human's favourite zone
    pub pattern_recognition: f32,
    /// Jitter added to every shot
    pub random_factor: f32,
}

impl BehaviorWeights {
    /// Copy with every weight pulled back into its bounds
    pub fn clamped(&self) -> Self {
        Self {
            corner_preference: CORNER_BOUNDS.clamp(self.corner_preference),
            height_variation: HEIGHT_BOUNDS.clamp(self.height_variation),
            pattern_recognition: PATTERN_BOUNDS.clamp(self.pattern_recognition),
            random_factor: RANDOM_BOUNDS.clamp(self.random_factor),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        *self == self.clamped()
    }
}

impl Default for BehaviorWeights {
    fn default() -> Self {
        Self {
            corner_preference: 0.5,
            height_variation: 0.5,
            pattern_recognition: 0.3,
            random_factor: 0.2,
        }
    }
}
