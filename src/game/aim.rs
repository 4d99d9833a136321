// Aim and charge state shared by the shooter and the goalkeeper

use serde::{Deserialize, Serialize};

pub const MAX_POWER: f32 = 100.0;

/// Normalized target inside the goal mouth
///
/// `x` runs from -1.0 (left post) to 1.0 (right post), `y` from 0.0
/// (crossbar) to 1.0 (ground). Both components are clamped on every write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimVector {
    pub x: f32,
    pub y: f32,
}

impl AimVector {
    /// Dead centre of the goal, mid height
    pub const CENTER: AimVector = AimVector { x: 0.0, y: 0.5 };

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_or(x, -1.0, 1.0, 0.0),
            y: clamp_or(y, 0.0, 1.0, 0.5),
        }
    }

    /// Move the aim by a delta, staying inside the goal
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        *self = AimVector::new(self.x + dx, self.y + dy);
    }

    /// Euclidean distance to another aim in normalized space
    pub fn distance_to(&self, other: &AimVector) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point on the other side of the goal (left/right and high/low swapped)
    pub fn mirrored(&self) -> AimVector {
        AimVector::new(-self.x, 1.0 - self.y)
    }
}

impl Default for AimVector {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Clamp into range; NaN collapses to `fallback`
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Power accumulated while the kick/dive button is held
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargeState {
    pub power: f32,
    pub is_charging: bool,
}

impl ChargeState {
    /// Start a new charge. Returns false if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_charging {
            return false;
        }
        self.power = 0.0;
        self.is_charging = true;
        true
    }

    /// Accumulate power for `dt` seconds at `rate` units per second
    pub fn accumulate(&mut self, dt: f32, rate: f32) {
        if !self.is_charging || dt <= 0.0 || rate <= 0.0 {
            return;
        }
        self.power = (self.power + rate * dt).min(MAX_POWER);
    }

    /// Stop charging and return the power reached
    pub fn release(&mut self) -> Option<f32> {
        if !self.is_charging {
            return None;
        }
        self.is_charging = false;
        Some(self.power)
    }

    /// Drop any charge in progress and zero the power
    pub fn reset(&mut self) {
        self.power = 0.0;
        self.is_charging = false;
    }
}
