use thiserror::Error;

use super::bracket::{MatchRef, Stage};

/// Contract violations when driving the bracket
///
/// Every failing operation leaves the tournament untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TournamentError {
    #[error("cannot move to {target}: tournament is in {current}")]
    WrongStage { current: Stage, target: Stage },

    #[error("{0} still has unplayed matches")]
    StageIncomplete(Stage),

    #[error("match {0:?} has already been played")]
    AlreadyPlayed(MatchRef),

    #[error("match {0:?} does not exist in the current stage")]
    NoSuchMatch(MatchRef),

    #[error("a tournament needs {needed} teams, got {got}")]
    WrongTeamCount { needed: usize, got: usize },

    #[error("team id {0} appears more than once")]
    DuplicateTeam(String),

    #[error("player team {0} is not in the draw")]
    MissingPlayerTeam(String),
}
