// Streaky shooter - picks anywhere in the goal, never learns

use rand::{Rng, RngCore};

use super::Shooter;
use crate::game::AimVector;

/// Opponent that blasts at a uniformly random spot every time
///
/// Useful as a baseline: no memory of the human, no weights to tune.
pub struct StreakyShooter {
    name: String,
}

impl StreakyShooter {
    pub fn new() -> Self {
        Self {
            name: "Streaky".to_string(),
        }
    }
}

impl Default for StreakyShooter {
    fn default() -> Self {
        Self::new()
    }
}

impl Shooter for StreakyShooter {
    fn choose_target(&mut self, rng: &mut dyn RngCore) -> AimVector {
        AimVector::new(rng.gen_range(-1.0..=1.0), rng.gen_range(0.0..=1.0))
    }

    fn learn(&mut self, _scored: bool, _target: &AimVector, _rng: &mut dyn RngCore) {
        // Nothing to learn
    }

    fn observe_player_shot(&mut self, _aim: &AimVector, _power: f32) {}

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        &self.name
    }
}
