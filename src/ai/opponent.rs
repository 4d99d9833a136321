// Adaptive opponent: picks shots from learned weights and the human's habits

use std::collections::VecDeque;

use rand::{Rng, RngCore};
use tracing::{debug, info, warn};

use super::shooter::Shooter;
use super::store::{BehaviorStore, MemoryStore, PersistedBehavior};
use super::weights::BehaviorWeights;
use super::zones::{PatternLog, PlayerShot, Zone, ZoneHistogram};
use crate::game::AimVector;

/// Number of recent decisions kept for the debug overlay
pub const DECISION_LOG_CAPACITY: usize = 10;

pub const DEFAULT_LEARNING_RATE: f32 = 0.05;

// Shot templates
const CORNER_X: f32 = 0.8;
const CORNER_HIGH_Y: f32 = 0.2;
const CORNER_LOW_Y: f32 = 0.8;
const CENTRAL_HALF_WIDTH: f32 = 0.6;
const CENTRAL_TOP_Y: f32 = 0.3;
const CENTRAL_BAND_HEIGHT: f32 = 0.4;

/// Pick the opponent's next target
///
/// Counters the human's favourite zone with probability
/// `pattern_recognition` (once anything has been observed), otherwise picks
/// a corner or a central shot. Every shot then gets `random_factor` jitter.
pub fn generate_shot(
    weights: &BehaviorWeights,
    histogram: &ZoneHistogram,
    rng: &mut (impl Rng + ?Sized),
) -> AimVector {
    let use_pattern = rng.gen::<f32>() < weights.pattern_recognition;

    let (mut x, mut y) = if use_pattern && !histogram.is_empty() {
        let target = histogram.preferred_zone().opposite().sample(rng);
        (target.x, target.y)
    } else {
        let (x, y) = if rng.gen::<f32>() < weights.corner_preference {
            let x = if rng.gen_bool(0.5) { -CORNER_X } else { CORNER_X };
            let y = if rng.gen_bool(0.5) { CORNER_HIGH_Y } else { CORNER_LOW_Y };
            (x, y)
        } else {
            let x = rng.gen::<f32>() * 2.0 * CENTRAL_HALF_WIDTH - CENTRAL_HALF_WIDTH;
            let y = CENTRAL_TOP_Y + rng.gen::<f32>() * CENTRAL_BAND_HEIGHT;
            (x, y)
        };
        (x, y + (rng.gen::<f32>() - 0.5) * weights.height_variation)
    };

    x += (rng.gen::<f32>() - 0.5) * weights.random_factor;
    y += (rng.gen::<f32>() - 0.5) * weights.random_factor;

    AimVector::new(x, y)
}

/// Shot aimed at a corner (or hugging the bar/ground)
pub fn is_corner_shot(decision: &AimVector) -> bool {
    decision.x.abs() > 0.7 || decision.y < 0.2 || decision.y > 0.8
}

/// Shot that left mid height
pub fn is_height_varied(decision: &AimVector) -> bool {
    decision.y < 0.3 || decision.y > 0.7
}

/// Nudge weights after a kick
///
/// Reinforces what worked when the opponent scored, explores when the keeper
/// saved it. No loss function, just bounded heuristic steps.
pub fn evolve_weights(
    weights: &BehaviorWeights,
    was_successful: bool,
    decision: &AimVector,
    learning_rate: f32,
    rng: &mut (impl Rng + ?Sized),
) -> BehaviorWeights {
    let lr = if learning_rate.is_nan() { 0.0 } else { learning_rate.clamp(0.0, 1.0) };
    let mut next = weights.clamped();

    if was_successful {
        if is_corner_shot(decision) {
            next.corner_preference += lr * 0.2;
        } else {
            next.corner_preference -= lr * 0.1;
        }

        if is_height_varied(decision) {
            next.height_variation += lr * 0.2;
        }

        if rng.gen::<f32>() < next.pattern_recognition {
            next.pattern_recognition += lr * 0.1;
        }
    } else {
        next.corner_preference += random_sign(rng, 0.5) * lr * 0.3;
        next.height_variation += random_sign(rng, 0.5) * lr * 0.2;
        next.random_factor += lr * 0.1;
        // Mostly back off pattern play, sometimes explore upward
        next.pattern_recognition -= random_sign(rng, 0.7) * lr * 0.05;
    }

    next.clamped()
}

/// +1.0 with probability `p_positive`, else -1.0
fn random_sign(rng: &mut (impl Rng + ?Sized), p_positive: f64) -> f32 {
    if rng.gen_bool(p_positive) {
        1.0
    } else {
        -1.0
    }
}

/// Learning opponent that owns its weights and the human's zone histogram
pub struct OpponentModel {
    name: String,
    weights: BehaviorWeights,
    histogram: ZoneHistogram,
    decisions: VecDeque<AimVector>,
    player_patterns: PatternLog,
    learning_rate: f32,
    store: Box<dyn BehaviorStore>,
    persistence_enabled: bool,
}

impl OpponentModel {
    /// Create a model, restoring learned state from `store`
    ///
    /// A missing or unreadable record falls back to default weights and an
    /// empty histogram; startup never fails because of storage.
    pub fn new(learning_rate: f32, store: Box<dyn BehaviorStore>) -> Self {
        let record = match store.load() {
            Ok(Some(record)) => {
                info!("Loaded opponent behavior from storage");
                record
            }
            Ok(None) => {
                debug!("No stored opponent behavior, starting fresh");
                PersistedBehavior::default()
            }
            Err(e) => {
                warn!("Could not load opponent behavior: {}", e);
                PersistedBehavior::default()
            }
        };

        Self {
            name: "Adaptive".to_string(),
            weights: record.weights.clamped(),
            histogram: record.player_model,
            decisions: VecDeque::with_capacity(DECISION_LOG_CAPACITY),
            player_patterns: PatternLog::default(),
            learning_rate,
            store,
            persistence_enabled: true,
        }
    }

    /// Model that never touches the disk
    pub fn in_memory(learning_rate: f32) -> Self {
        Self::new(learning_rate, Box::new(MemoryStore::new()))
    }

    pub fn weights(&self) -> &BehaviorWeights {
        &self.weights
    }

    pub fn histogram(&self) -> &ZoneHistogram {
        &self.histogram
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Most recent decisions, oldest first
    pub fn recent_decisions(&self) -> impl Iterator<Item = &AimVector> {
        self.decisions.iter()
    }

    pub fn player_patterns(&self) -> &PatternLog {
        &self.player_patterns
    }

    pub fn is_persisting(&self) -> bool {
        self.persistence_enabled
    }

    /// Generate the next shot and remember it
    pub fn generate_shot(&mut self, rng: &mut (impl Rng + ?Sized)) -> AimVector {
        let shot = generate_shot(&self.weights, &self.histogram, rng);

        if self.decisions.len() == DECISION_LOG_CAPACITY {
            self.decisions.pop_front();
        }
        self.decisions.push_back(shot);

        debug!("Opponent targets ({:.2}, {:.2})", shot.x, shot.y);
        shot
    }

    /// Update weights from the outcome of `decision`, then persist
    pub fn evolve(&mut self, was_successful: bool, decision: &AimVector, rng: &mut (impl Rng + ?Sized)) {
        self.weights = evolve_weights(&self.weights, was_successful, decision, self.learning_rate, rng);
        debug!(
            "Opponent weights after {}: corner={:.2} height={:.2} pattern={:.2} random={:.2}",
            if was_successful { "goal" } else { "save" },
            self.weights.corner_preference,
            self.weights.height_variation,
            self.weights.pattern_recognition,
            self.weights.random_factor,
        );
        self.persist();
    }

    /// Count a human shot in the histogram and the pattern log, then persist
    pub fn record_player_shot(&mut self, aim: &AimVector, power: f32) {
        let zone = Zone::of(aim);
        self.histogram.record(zone);
        self.player_patterns.push(PlayerShot {
            aim: *aim,
            zone,
            power,
        });
        self.persist();
    }

    /// Throw away everything learned so far
    pub fn forget(&mut self) {
        self.weights = BehaviorWeights::default();
        self.histogram = ZoneHistogram::new();
        self.decisions.clear();
        self.player_patterns = PatternLog::default();
        self.persist();
    }

    /// Best-effort save; the first failure switches to in-memory only
    fn persist(&mut self) {
        if !self.persistence_enabled {
            return;
        }
        let record = PersistedBehavior {
            weights: self.weights,
            player_model: self.histogram.clone(),
        };
        if let Err(e) = self.store.save(&record) {
            warn!("Could not save opponent behavior, continuing in memory: {}", e);
            self.persistence_enabled = false;
        }
    }
}

impl Shooter for OpponentModel {
    fn choose_target(&mut self, rng: &mut dyn RngCore) -> AimVector {
        self.generate_shot(rng)
    }

    fn learn(&mut self, scored: bool, target: &AimVector, rng: &mut dyn RngCore) {
        self.evolve(scored, target, rng);
    }

    fn observe_player_shot(&mut self, aim: &AimVector, power: f32) {
        self.record_player_shot(aim, power);
    }

    fn reset(&mut self) {
        // Learned state outlives matches; only the per-match logs are cleared
        self.decisions.clear();
        self.player_patterns = PatternLog::default();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn weights(&self) -> Option<BehaviorWeights> {
        Some(self.weights)
    }
}
