// Opponent module: shot selection, learning and keeper hints

mod opponent;
mod prediction;
mod random_shooter;
mod shooter;
pub mod store;
mod weights;
mod zones;

pub use opponent::{evolve_weights, generate_shot, OpponentModel, DEFAULT_LEARNING_RATE};
pub use prediction::{hint_appears, predict_hint, KeeperHint, HINT_ROLL_INTERVAL};
pub use random_shooter::StreakyShooter;
pub use shooter::Shooter;
pub use store::{BehaviorStore, JsonFileStore, MemoryStore, PersistedBehavior, StoreError};
pub use weights::{BehaviorWeights, WeightBounds};
pub use zones::{PatternLog, PlayerShot, Zone, ZoneHistogram};

use serde::{Deserialize, Serialize};

/// Opponent type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Learns from every kick and from where the human shoots
    #[default]
    Adaptive,
    /// Random target every kick
    Streaky,
}

impl OpponentKind {
    /// Get display name for opponent kind
    pub fn display_name(&self) -> &str {
        match self {
            OpponentKind::Adaptive => "Adaptive",
            OpponentKind::Streaky => "Streaky",
        }
    }

    /// Get description for opponent kind
    pub fn description(&self) -> &str {
        match self {
            OpponentKind::Adaptive => "Reads your habits and remembers them between games",
            OpponentKind::Streaky => "Shoots anywhere - no memory, no plan",
        }
    }

    /// Get all available opponent kinds
    pub fn all() -> Vec<OpponentKind> {
        vec![OpponentKind::Adaptive, OpponentKind::Streaky]
    }
}

/// Create a shooter from an opponent kind
///
/// The adaptive opponent restores and saves its learning through `store`.
pub fn create_shooter(kind: OpponentKind, learning_rate: f32, store: Box<dyn BehaviorStore>) -> Box<dyn Shooter> {
    match kind {
        OpponentKind::Adaptive => Box::new(OpponentModel::new(learning_rate, store)),
        OpponentKind::Streaky => Box::new(StreakyShooter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_names() {
        for kind in OpponentKind::all() {
            let shooter = create_shooter(kind, DEFAULT_LEARNING_RATE, Box::new(MemoryStore::new()));
            assert_eq!(shooter.name(), kind.display_name());
        }
    }

    #[test]
    fn test_only_adaptive_has_weights() {
        let adaptive = create_shooter(OpponentKind::Adaptive, 0.05, Box::new(MemoryStore::new()));
        let streaky = create_shooter(OpponentKind::Streaky, 0.05, Box::new(MemoryStore::new()));
        assert_eq!(adaptive.weights(), Some(BehaviorWeights::default()));
        assert!(streaky.weights().is_none());
    }
}
