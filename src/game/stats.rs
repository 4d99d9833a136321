/// Per-match counters shown on the result screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStatistics {
    pub shots: u32,
    pub goals: u32,
    pub saves: u32,
    pub total_power: f32,
    pub ai_attempts: u32,
    pub ai_successes: u32,
}

impl MatchStatistics {
    pub fn record_shot(&mut self, power: f32, scored: bool) {
        self.shots += 1;
        self.total_power += power;
        if scored {
            self.goals += 1;
        }
    }

    pub fn record_opponent_kick(&mut self, scored: bool) {
        self.ai_attempts += 1;
        if scored {
            self.ai_successes += 1;
        } else {
            self.saves += 1;
        }
    }

    /// Shot accuracy in whole percent
    pub fn accuracy(&self) -> u32 {
        percent(self.goals, self.shots)
    }

    pub fn average_power(&self) -> f32 {
        if self.shots == 0 {
            0.0
        } else {
            self.total_power / self.shots as f32
        }
    }

    /// Opponent conversion rate in whole percent
    pub fn ai_accuracy(&self) -> u32 {
        percent(self.ai_successes, self.ai_attempts)
    }

    /// Label/value pairs for the summary screen
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Goals Scored", self.goals.to_string()),
            ("Shots Taken", self.shots.to_string()),
            ("Shot Accuracy", format!("{}%", self.accuracy())),
            ("Saves Made", self.saves.to_string()),
            ("Avg Shot Power", format!("{}%", self.average_power().round() as u32)),
            ("AI Shot Accuracy", format!("{}%", self.ai_accuracy())),
        ]
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f32 / whole as f32) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = MatchStatistics::default();
        assert_eq!(stats.accuracy(), 0);
        assert_eq!(stats.average_power(), 0.0);
        assert_eq!(stats.ai_accuracy(), 0);
    }

    #[test]
    fn test_derived_values() {
        let mut stats = MatchStatistics::default();
        stats.record_shot(60.0, true);
        stats.record_shot(40.0, false);
        stats.record_shot(80.0, true);
        stats.record_opponent_kick(true);
        stats.record_opponent_kick(false);

        assert_eq!(stats.accuracy(), 67);
        assert!((stats.average_power() - 60.0).abs() < 1e-4);
        assert_eq!(stats.saves, 1);
        assert_eq!(stats.ai_accuracy(), 50);
        assert_eq!(stats.summary().len(), 6);
    }
}
