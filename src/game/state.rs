use serde::{Deserialize, Serialize};

pub const REGULATION_PENALTIES: u32 = 5;

/// Which side of the shootout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// What the human is doing this kick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Human takes the kick
    Shoot,
    /// Human keeps goal against the opponent
    Save,
}

impl Phase {
    pub fn other(&self) -> Phase {
        match self {
            Phase::Shoot => Phase::Save,
            Phase::Save => Phase::Shoot,
        }
    }

    /// Side taking the kick in this phase
    pub fn kicker(&self) -> Side {
        match self {
            Phase::Shoot => Side::Player,
            Phase::Save => Side::Opponent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltiesLeft {
    pub player: u32,
    pub opponent: u32,
}

/// Score and kick bookkeeping for one shootout
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    pub penalties_left: PenaltiesLeft,
    pub phase: Phase,
    pub sudden_death: bool,
    pub kicks_taken: u32,
    regulation: u32,
}

impl MatchState {
    pub fn new(regulation: u32) -> Self {
        let regulation = regulation.max(1);
        Self {
            player_score: 0,
            opponent_score: 0,
            penalties_left: PenaltiesLeft {
                player: regulation,
                opponent: regulation,
            },
            phase: Phase::Shoot,
            sudden_death: false,
            kicks_taken: 0,
            regulation,
        }
    }

    /// Reset the entire match for a rematch
    pub fn reset(&mut self) {
        *self = MatchState::new(self.regulation);
    }

    pub fn regulation(&self) -> u32 {
        self.regulation
    }

    /// Book a resolved kick for the side in the current phase and flip phase
    pub fn record_kick(&mut self, scored: bool) {
        match self.phase.kicker() {
            Side::Player => {
                if scored {
                    self.player_score += 1;
                }
                self.penalties_left.player = self.penalties_left.player.saturating_sub(1);
            }
            Side::Opponent => {
                if scored {
                    self.opponent_score += 1;
                }
                self.penalties_left.opponent = self.penalties_left.opponent.saturating_sub(1);
            }
        }
        self.kicks_taken += 1;
        self.phase = self.phase.other();
    }

    /// Decide whether the shootout is over
    ///
    /// Stops early once a lead can no longer be caught. A tie after both
    /// sides run out of kicks grants one more kick each (sudden death).
    pub fn check_match_over(&mut self) -> bool {
        let left = self.penalties_left;

        if self.player_score > self.opponent_score + left.opponent {
            return true;
        }
        if self.opponent_score > self.player_score + left.player {
            return true;
        }

        if left.player == 0 && left.opponent == 0 {
            if self.player_score == self.opponent_score {
                self.penalties_left = PenaltiesLeft {
                    player: 1,
                    opponent: 1,
                };
                self.sudden_death = true;
                return false;
            }
            return true;
        }

        false
    }

    /// Leading side, if any
    pub fn leader(&self) -> Option<Side> {
        if self.player_score > self.opponent_score {
            Some(Side::Player)
        } else if self.opponent_score > self.player_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Round number of the kick being taken (1-based)
    pub fn round(&self) -> u32 {
        self.kicks_taken / 2 + 1
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(REGULATION_PENALTIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(player: u32, opponent: u32, left: (u32, u32)) -> MatchState {
        let mut s = MatchState::default();
        s.player_score = player;
        s.opponent_score = opponent;
        s.penalties_left = PenaltiesLeft {
            player: left.0,
            opponent: left.1,
        };
        s
    }

    #[test]
    fn test_new_match() {
        let s = MatchState::default();
        assert_eq!(s.player_score, 0);
        assert_eq!(s.opponent_score, 0);
        assert_eq!(s.penalties_left, PenaltiesLeft { player: 5, opponent: 5 });
        assert_eq!(s.phase, Phase::Shoot);
    }

    #[test]
    fn test_unreachable_lead_ends_match() {
        let mut s = state(3, 0, (2, 2));
        assert!(s.check_match_over());
    }

    #[test]
    fn test_catchable_lead_continues() {
        // opponent can still reach 2, which is not more than 2
        let mut s = state(2, 0, (2, 2));
        assert!(!s.check_match_over());
    }

    #[test]
    fn test_opponent_unreachable_lead() {
        let mut s = state(0, 3, (1, 1));
        assert!(s.check_match_over());
    }

    #[test]
    fn test_all_taken_with_winner() {
        let mut s = state(4, 3, (0, 0));
        assert!(s.check_match_over());
        assert_eq!(s.leader(), Some(Side::Player));
    }

    #[test]
    fn test_tie_extends_to_sudden_death() {
        let mut s = state(3, 3, (0, 0));
        assert!(!s.check_match_over());
        assert!(s.sudden_death);
        assert_eq!(s.penalties_left, PenaltiesLeft { player: 1, opponent: 1 });
    }

    #[test]
    fn test_phases_alternate() {
        let mut s = MatchState::default();
        s.record_kick(true);
        assert_eq!(s.phase, Phase::Save);
        assert_eq!(s.player_score, 1);
        assert_eq!(s.penalties_left.player, 4);

        s.record_kick(false);
        assert_eq!(s.phase, Phase::Shoot);
        assert_eq!(s.opponent_score, 0);
        assert_eq!(s.penalties_left.opponent, 4);
        assert_eq!(s.round(), 2);
    }

    #[test]
    fn test_sudden_death_resolves() {
        let mut s = state(5, 5, (0, 0));
        assert!(!s.check_match_over());

        // player scores, opponent misses
        s.record_kick(true);
        assert!(!s.check_match_over());
        s.record_kick(false);
        assert!(s.check_match_over());
        assert_eq!(s.leader(), Some(Side::Player));
    }

    #[test]
    fn test_full_shootout_always_terminates() {
        // alternate score patterns, never more than a few sudden death rounds
        let mut s = MatchState::default();
        let mut kicks = 0;
        loop {
            let scored = kicks % 3 != 0;
            s.record_kick(scored);
            kicks += 1;
            if s.check_match_over() {
                break;
            }
            assert!(kicks < 100);
        }
        assert!(s.leader().is_some());
    }

    #[test]
    fn test_reset_keeps_regulation() {
        let mut s = MatchState::new(3);
        s.record_kick(true);
        s.reset();
        assert_eq!(s.penalties_left, PenaltiesLeft { player: 3, opponent: 3 });
        assert_eq!(s.player_score, 0);
    }
}
