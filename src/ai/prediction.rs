// Keeper hint: a noisy read of where the opponent is about to shoot

use std::time::Duration;

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::game::{AimVector, Difficulty};

/// How often a hidden hint gets another chance to appear while charging
pub const HINT_ROLL_INTERVAL: Duration = Duration::from_millis(500);

/// Marker shown to the human while diving
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeeperHint {
    pub target: AimVector,
    /// True when the marker points at the mirrored side on purpose
    pub misdirected: bool,
}

/// Roll whether a hint appears on this tick
pub fn hint_appears(difficulty: Difficulty, rng: &mut (impl Rng + ?Sized)) -> bool {
    rng.gen::<f32>() < difficulty.hint_chance()
}

/// Build a hint from the opponent's real pending target
///
/// An honest hint lands within the difficulty's hint error of the target on
/// x and within half of it on y. On hard the marker sometimes shows the
/// exact mirror image of the target instead, with no noise at all.
pub fn predict_hint(actual: &AimVector, difficulty: Difficulty, rng: &mut (impl Rng + ?Sized)) -> KeeperHint {
    if rng.gen::<f32>() < difficulty.misdirection_chance() {
        return KeeperHint {
            target: actual.mirrored(),
            misdirected: true,
        };
    }

    let error = difficulty.hint_error();
    let dx = spread(error, rng);
    let dy = spread(error / 2.0, rng);

    KeeperHint {
        target: AimVector::new(actual.x + dx, actual.y + dy),
        misdirected: false,
    }
}

/// Uniform offset in [-half_width, half_width]
fn spread(half_width: f32, rng: &mut (impl Rng + ?Sized)) -> f32 {
    let half_width = half_width.abs();
    Uniform::new_inclusive(-half_width, half_width).sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_hint_stays_in_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for difficulty in Difficulty::all() {
            for _ in 0..500 {
                let hint = predict_hint(&AimVector::new(0.9, 0.9), difficulty, &mut rng);
                assert!((-1.0..=1.0).contains(&hint.target.x));
                assert!((0.0..=1.0).contains(&hint.target.y));
            }
        }
    }

    #[test]
    fn test_easy_hint_is_close_and_honest() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let actual = AimVector::new(-0.5, 0.3);
        let mut total = 0.0;
        for _ in 0..1000 {
            let hint = predict_hint(&actual, Difficulty::Easy, &mut rng);
            assert!(!hint.misdirected);
            total += hint.target.distance_to(&actual);
        }
        assert!(total / 1000.0 < 0.35);
    }

    #[test]
    fn test_only_hard_misdirects() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let actual = AimVector::new(0.6, 0.2);
        let misdirected = (0..2000)
            .filter(|_| predict_hint(&actual, Difficulty::Hard, &mut rng).misdirected)
            .count();
        let rate = misdirected as f32 / 2000.0;
        assert!((rate - 0.4).abs() < 0.05);

        for _ in 0..500 {
            assert!(!predict_hint(&actual, Difficulty::Normal, &mut rng).misdirected);
        }
    }

    #[test]
    fn test_misdirected_hint_is_exact_mirror() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let actual = AimVector::new(0.6, 0.2);
        let mut seen = 0;
        for _ in 0..2000 {
            let hint = predict_hint(&actual, Difficulty::Hard, &mut rng);
            if hint.misdirected {
                seen += 1;
                assert_eq!(hint.target, actual.mirrored());
                assert!((hint.target.x + 0.6).abs() < 1e-6);
                assert!((hint.target.y - 0.8).abs() < 1e-6);
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_honest_hint_noise_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let actual = AimVector::new(0.1, 0.5);
        for difficulty in Difficulty::all() {
            let error = difficulty.hint_error();
            for _ in 0..1000 {
                let hint = predict_hint(&actual, difficulty, &mut rng);
                if hint.misdirected {
                    continue;
                }
                assert!((hint.target.x - actual.x).abs() <= error + 1e-6);
                assert!((hint.target.y - actual.y).abs() <= error / 2.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_hint_chance_follows_difficulty() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let easy = (0..4000).filter(|_| hint_appears(Difficulty::Easy, &mut rng)).count();
        let hard = (0..4000).filter(|_| hint_appears(Difficulty::Hard, &mut rng)).count();
        assert!(easy > hard * 3);
    }
}
