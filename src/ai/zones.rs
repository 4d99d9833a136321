// Goal zones and the record of where the human shoots

use std::collections::{BTreeMap, VecDeque};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::AimVector;

const LEFT_EDGE: f32 = -0.33;
const RIGHT_EDGE: f32 = 0.33;
const TOP_EDGE: f32 = 0.33;
const BOTTOM_EDGE: f32 = 0.66;

/// Number of recent player shots kept in the pattern log
pub const PATTERN_LOG_CAPACITY: usize = 20;

/// One ninth of the goal mouth (3 heights x 3 columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Zone {
    pub const ALL: [Zone; 9] = [
        Zone::TopLeft,
        Zone::TopCenter,
        Zone::TopRight,
        Zone::MiddleLeft,
        Zone::MiddleCenter,
        Zone::MiddleRight,
        Zone::BottomLeft,
        Zone::BottomCenter,
        Zone::BottomRight,
    ];

    /// Zone containing an aim point. Total over the whole goal.
    pub fn of(aim: &AimVector) -> Zone {
        let column = if aim.x < LEFT_EDGE {
            0
        } else if aim.x > RIGHT_EDGE {
            2
        } else {
            1
        };
        let row = if aim.y < TOP_EDGE {
            0
        } else if aim.y > BOTTOM_EDGE {
            2
        } else {
            1
        };
        Zone::ALL[row * 3 + column]
    }

    /// Zone on the far side of the goal
    ///
    /// The centre maps to the top-left corner rather than to itself.
    pub fn opposite(&self) -> Zone {
        match self {
            Zone::TopLeft => Zone::BottomRight,
            Zone::TopCenter => Zone::BottomCenter,
            Zone::TopRight => Zone::BottomLeft,
            Zone::MiddleLeft => Zone::MiddleRight,
            Zone::MiddleCenter => Zone::TopLeft,
            Zone::MiddleRight => Zone::MiddleLeft,
            Zone::BottomLeft => Zone::TopRight,
            Zone::BottomCenter => Zone::TopCenter,
            Zone::BottomRight => Zone::TopLeft,
        }
    }

    /// Representative aim point of the zone
    pub fn anchor(&self) -> AimVector {
        let index = Zone::ALL.iter().position(|z| z == self).unwrap_or(4);
        let x = match index % 3 {
            0 => -0.8,
            1 => 0.0,
            _ => 0.8,
        };
        let y = match index / 3 {
            0 => 0.2,
            1 => 0.5,
            _ => 0.8,
        };
        AimVector::new(x, y)
    }

    /// Anchor with up to 0.1 of jitter on each axis
    pub fn sample(&self, rng: &mut (impl Rng + ?Sized)) -> AimVector {
        let anchor = self.anchor();
        AimVector::new(
            anchor.x + rng.gen_range(-0.1..0.1),
            anchor.y + rng.gen_range(-0.1..0.1),
        )
    }

    pub fn display_name(&self) -> &str {
        match self {
            Zone::TopLeft => "top left",
            Zone::TopCenter => "top centre",
            Zone::TopRight => "top right",
            Zone::MiddleLeft => "middle left",
            Zone::MiddleCenter => "middle centre",
            Zone::MiddleRight => "middle right",
            Zone::BottomLeft => "bottom left",
            Zone::BottomCenter => "bottom centre",
            Zone::BottomRight => "bottom right",
        }
    }
}

/// How often the human has shot into each zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneHistogram {
    counts: BTreeMap<Zone, u32>,
}

impl ZoneHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, zone: Zone) {
        *self.counts.entry(zone).or_insert(0) += 1;
    }

    pub fn count(&self, zone: Zone) -> u32 {
        self.counts.get(&zone).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Most frequent zone; earlier zones win ties, centre when empty
    pub fn preferred_zone(&self) -> Zone {
        let mut best = Zone::MiddleCenter;
        let mut best_count = 0;
        for zone in Zone::ALL {
            let count = self.count(zone);
            if count > best_count {
                best = zone;
                best_count = count;
            }
        }
        best
    }
}

/// A shot the human took, as remembered by the opponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerShot {
    pub aim: AimVector,
    pub zone: Zone,
    pub power: f32,
}

/// Bounded log of recent player shots, oldest evicted first
#[derive(Debug, Clone, Default)]
pub struct PatternLog {
    shots: VecDeque<PlayerShot>,
}

impl PatternLog {
    pub fn push(&mut self, shot: PlayerShot) {
        if self.shots.len() == PATTERN_LOG_CAPACITY {
            self.shots.pop_front();
        }
        self.shots.push_back(shot);
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerShot> {
        self.shots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(Zone::of(&AimVector::new(-0.34, 0.0)), Zone::TopLeft);
        assert_eq!(Zone::of(&AimVector::new(-0.33, 0.33)), Zone::MiddleCenter);
        assert_eq!(Zone::of(&AimVector::new(0.33, 0.66)), Zone::MiddleCenter);
        assert_eq!(Zone::of(&AimVector::new(0.34, 0.67)), Zone::BottomRight);
        assert_eq!(Zone::of(&AimVector::new(0.0, 1.0)), Zone::BottomCenter);
        assert_eq!(Zone::of(&AimVector::new(1.0, 0.5)), Zone::MiddleRight);
    }

    #[test]
    fn test_anchor_is_inside_its_zone() {
        for zone in Zone::ALL {
            assert_eq!(Zone::of(&zone.anchor()), zone);
        }
    }

    #[test]
    fn test_opposite_table() {
        assert_eq!(Zone::TopLeft.opposite(), Zone::BottomRight);
        assert_eq!(Zone::BottomRight.opposite(), Zone::TopLeft);
        assert_eq!(Zone::MiddleCenter.opposite(), Zone::TopLeft);
        assert_eq!(Zone::MiddleLeft.opposite(), Zone::MiddleRight);
    }

    #[test]
    fn test_preferred_zone() {
        let mut histogram = ZoneHistogram::new();
        assert_eq!(histogram.preferred_zone(), Zone::MiddleCenter);

        histogram.record(Zone::BottomLeft);
        histogram.record(Zone::TopRight);
        histogram.record(Zone::BottomLeft);
        assert_eq!(histogram.preferred_zone(), Zone::BottomLeft);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_preferred_zone_tie_goes_to_first() {
        let mut histogram = ZoneHistogram::new();
        histogram.record(Zone::BottomRight);
        histogram.record(Zone::TopCenter);
        assert_eq!(histogram.preferred_zone(), Zone::TopCenter);
    }

    #[test]
    fn test_histogram_json_uses_zone_names() {
        let mut histogram = ZoneHistogram::new();
        histogram.record(Zone::TopLeft);
        let json = serde_json::to_string(&histogram).unwrap();
        assert_eq!(json, r#"{"topLeft":1}"#);

        let parsed: ZoneHistogram = serde_json::from_str(r#"{"middleCenter":4,"bottomRight":2}"#).unwrap();
        assert_eq!(parsed.count(Zone::MiddleCenter), 4);
        assert_eq!(parsed.total(), 6);
    }

    #[test]
    fn test_pattern_log_evicts_oldest() {
        let mut log = PatternLog::default();
        for i in 0..25 {
            log.push(PlayerShot {
                aim: AimVector::CENTER,
                zone: Zone::MiddleCenter,
                power: i as f32,
            });
        }
        assert_eq!(log.len(), PATTERN_LOG_CAPACITY);
        assert_eq!(log.iter().next().map(|s| s.power), Some(5.0));
    }

    proptest! {
        #[test]
        fn prop_histogram_counts_every_shot(
            shots in proptest::collection::vec((-1.0f32..=1.0f32, 0.0f32..=1.0f32), 0..60)
        ) {
            let mut histogram = ZoneHistogram::new();
            for (x, y) in &shots {
                histogram.record(Zone::of(&AimVector::new(*x, *y)));
            }
            prop_assert_eq!(histogram.total() as usize, shots.len());
        }

        #[test]
        fn prop_sampled_zone_point_stays_in_goal(index in 0usize..9, seed in any::<u64>()) {
            use rand::SeedableRng;
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
            let aim = Zone::ALL[index].sample(&mut rng);
            prop_assert!((-1.0..=1.0).contains(&aim.x));
            prop_assert!((0.0..=1.0).contains(&aim.y));
        }
    }
}
