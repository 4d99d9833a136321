// Goal and save resolution
//
// Outcomes are decided analytically from aim, power and difficulty. The
// animated trajectory never feeds back into these functions.

use rand::Rng;

use super::aim::AimVector;
use super::difficulty::Difficulty;

const BASE_GOAL_PROBABILITY: f32 = 0.75;
const SWEET_SPOT_MIN: f32 = 40.0;
const SWEET_SPOT_MAX: f32 = 80.0;
const SWEET_SPOT_FACTOR: f32 = 0.85;
const OFF_SPOT_FACTOR: f32 = 0.6;
const BASE_DIRECTION_DIFFICULTY: f32 = 0.2;
const DIRECTION_DIFFICULTY_SCALE: f32 = 0.6;
pub const MIN_GOAL_PROBABILITY: f32 = 0.1;
pub const MAX_GOAL_PROBABILITY: f32 = 0.95;
/// Aim-space distance is halved before it is compared with the save radius
const SAVE_DISTANCE_SCALE: f32 = 0.5;

/// Power multiplier: rewards the 40-80 band, not a full charge
pub fn power_factor(power: f32) -> f32 {
    if (SWEET_SPOT_MIN..=SWEET_SPOT_MAX).contains(&power) {
        SWEET_SPOT_FACTOR
    } else {
        OFF_SPOT_FACTOR
    }
}

/// How hard the chosen spot is to hit cleanly (corners are harder)
pub fn direction_difficulty(aim: &AimVector) -> f32 {
    let distance_from_center = aim.distance_to(&AimVector::CENTER);
    BASE_DIRECTION_DIFFICULTY + distance_from_center * DIRECTION_DIFFICULTY_SCALE
}

/// Probability that the player's shot goes in, before the random draw
pub fn goal_probability(power: f32, aim: &AimVector, difficulty: Difficulty) -> f32 {
    let aim = AimVector::new(aim.x, aim.y);
    let power = if power.is_nan() { 0.0 } else { power.clamp(0.0, 100.0) };

    let probability = BASE_GOAL_PROBABILITY
        * power_factor(power)
        * (1.0 - direction_difficulty(&aim))
        + difficulty.goal_offset();

    probability.clamp(MIN_GOAL_PROBABILITY, MAX_GOAL_PROBABILITY)
}

/// Sample whether the player's shot is a goal
pub fn resolve_shot(
    power: f32,
    aim: &AimVector,
    difficulty: Difficulty,
    rng: &mut (impl Rng + ?Sized),
) -> bool {
    let probability = goal_probability(power, aim, difficulty);
    rng.gen::<f32>() < probability
}

/// Whether the keeper's dive reaches the opponent's shot
pub fn resolve_save(keeper: &AimVector, shot: &AimVector, difficulty: Difficulty) -> bool {
    keeper.distance_to(shot) * SAVE_DISTANCE_SCALE < difficulty.save_radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_center_sweet_spot_normal() {
        let p = goal_probability(60.0, &AimVector::CENTER, Difficulty::Normal);
        assert!((p - 0.75 * 0.85 * 0.8).abs() < 1e-6);
        assert!((p - 0.51).abs() < 1e-6);
    }

    #[test]
    fn test_difficulty_offsets() {
        let easy = goal_probability(60.0, &AimVector::CENTER, Difficulty::Easy);
        let hard = goal_probability(60.0, &AimVector::CENTER, Difficulty::Hard);
        assert!((easy - 0.66).abs() < 1e-5);
        assert!((hard - 0.36).abs() < 1e-5);
    }

    #[test]
    fn test_sweet_spot_band_edges() {
        assert_eq!(power_factor(40.0), SWEET_SPOT_FACTOR);
        assert_eq!(power_factor(80.0), SWEET_SPOT_FACTOR);
        assert_eq!(power_factor(39.9), OFF_SPOT_FACTOR);
        assert_eq!(power_factor(100.0), OFF_SPOT_FACTOR);
    }

    #[test]
    fn test_floor_applies_to_far_corner() {
        // distance ~1.118 makes direction difficulty exceed 0.8
        let p = goal_probability(100.0, &AimVector::new(1.0, 0.0), Difficulty::Hard);
        assert_eq!(p, MIN_GOAL_PROBABILITY);
    }

    #[test]
    fn test_save_when_keeper_on_target() {
        let shot = AimVector::new(0.8, 0.2);
        assert!(resolve_save(&shot, &shot, Difficulty::Hard));
    }

    #[test]
    fn test_save_radius_boundary_is_strict() {
        // Post to post is 2.0 apart, halved to exactly the normal radius
        let keeper = AimVector::new(-1.0, 0.5);
        let shot = AimVector::new(1.0, 0.5);
        assert!(!resolve_save(&keeper, &shot, Difficulty::Normal));
        assert!(resolve_save(&keeper, &shot, Difficulty::Easy));
    }

    #[test]
    fn test_save_distance_is_halved() {
        // 1.0 apart counts as 0.5 against the radius
        let keeper = AimVector::new(-0.5, 0.5);
        let shot = AimVector::new(0.5, 0.5);
        assert!(resolve_save(&keeper, &shot, Difficulty::Normal));
        assert!(resolve_save(&keeper, &shot, Difficulty::Hard));
    }

    #[test]
    fn test_wrong_side_dive_fails_on_hard() {
        let keeper = AimVector::new(-0.8, 0.8);
        let shot = AimVector::new(0.8, 0.2);
        assert!(!resolve_save(&keeper, &shot, Difficulty::Hard));
    }

    #[test]
    fn test_seeded_shot_rate_matches_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 20_000;
        let goals = (0..trials)
            .filter(|_| resolve_shot(60.0, &AimVector::CENTER, Difficulty::Normal, &mut rng))
            .count();
        let rate = goals as f32 / trials as f32;
        assert!((rate - 0.51).abs() < 0.02, "rate was {}", rate);
    }

    proptest! {
        #[test]
        fn prop_probability_in_bounds(
            power in -50.0f32..200.0f32,
            x in -3.0f32..3.0f32,
            y in -3.0f32..3.0f32,
        ) {
            for difficulty in Difficulty::all() {
                let p = goal_probability(power, &AimVector { x, y }, difficulty);
                prop_assert!(p >= MIN_GOAL_PROBABILITY && p <= MAX_GOAL_PROBABILITY);
            }
        }

        #[test]
        fn prop_corners_harder_than_center(
            power in 0.0f32..=100.0f32,
            corner in 0usize..4,
        ) {
            let corners = [(-1.0, 0.0), (1.0, 0.0), (-1.0, 1.0), (1.0, 1.0)];
            let (x, y) = corners[corner];
            for difficulty in Difficulty::all() {
                let center = goal_probability(power, &AimVector::CENTER, difficulty);
                let edge = goal_probability(power, &AimVector::new(x, y), difficulty);
                prop_assert!(edge < center);
            }
        }
    }
}
