// Difficulty presets for outcome resolution and keeper hints

use serde::{Deserialize, Serialize};

/// Difficulty selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Generous keeper reach, accurate hints
    Easy,
    #[default]
    Normal,
    /// Small keeper reach, hints that lie
    Hard,
}

impl Difficulty {
    /// Get display name for difficulty
    pub fn display_name(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Get description for difficulty
    pub fn description(&self) -> &str {
        match self {
            Difficulty::Easy => "Big keeper reach, honest hints",
            Difficulty::Normal => "Balanced shootout",
            Difficulty::Hard => "Small reach - hints may be a bluff",
        }
    }

    /// Get all available difficulties
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]
    }

    /// Cycle to the next difficulty (wraps around)
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Additive shift applied to the player's goal probability
    pub fn goal_offset(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.15,
            Difficulty::Normal => 0.0,
            Difficulty::Hard => -0.15,
        }
    }

    /// Keeper reach in normalized aim space
    pub fn save_radius(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.4,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.7,
        }
    }

    /// Per-tick chance that a keeper hint appears while charging a dive
    pub fn hint_chance(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 0.4,
            Difficulty::Hard => 0.15,
        }
    }

    /// Magnitude of the noise added to a keeper hint
    pub fn hint_error(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.1,
            Difficulty::Normal => 0.3,
            Difficulty::Hard => 0.6,
        }
    }

    /// Probability that a hint shows the mirrored target instead
    pub fn misdirection_chance(&self) -> f32 {
        match self {
            Difficulty::Hard => 0.4,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_radius_shrinks_with_difficulty() {
        assert!(Difficulty::Easy.save_radius() > Difficulty::Normal.save_radius());
        assert!(Difficulty::Normal.save_radius() > Difficulty::Hard.save_radius());
    }

    #[test]
    fn test_only_hard_misdirects() {
        assert_eq!(Difficulty::Easy.misdirection_chance(), 0.0);
        assert_eq!(Difficulty::Normal.misdirection_chance(), 0.0);
        assert!(Difficulty::Hard.misdirection_chance() > 0.0);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut d = Difficulty::Easy;
        for _ in 0..Difficulty::all().len() {
            d = d.next();
        }
        assert_eq!(d, Difficulty::Easy);
    }
}
