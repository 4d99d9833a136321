// Shooter trait for opponent penalty takers

use rand::RngCore;

use super::weights::BehaviorWeights;
use crate::game::AimVector;

/// Trait for computer-controlled penalty takers
///
/// A shooter picks a target for each kick and may learn from how the kick
/// went and from where the human shoots. Outcomes are resolved elsewhere.
pub trait Shooter {
    /// Decide where the next kick goes
    fn choose_target(&mut self, rng: &mut dyn RngCore) -> AimVector;

    /// Feed back a resolved kick
    ///
    /// # Arguments
    /// * `scored` - true if this shooter scored, false if the keeper saved it
    /// * `target` - the target returned by `choose_target`
    fn learn(&mut self, scored: bool, target: &AimVector, rng: &mut dyn RngCore);

    /// Observe a kick taken by the human
    fn observe_player_shot(&mut self, aim: &AimVector, power: f32);

    /// Reset per-match state (called when a new match starts)
    fn reset(&mut self);

    /// Shooter name for debugging/display
    fn name(&self) -> &str;

    /// Current behavior weights, for shooters that have them
    fn weights(&self) -> Option<BehaviorWeights> {
        None
    }
}
