// Tournament: 32 teams, 8 groups, then knockout rounds to a winner

mod bracket;
mod error;
mod group;
mod sim;
mod team;

pub use bracket::{MatchRef, Stage, TeamProgress, Tournament, GROUP_COUNT, TEAMS_PER_GROUP, TEAM_COUNT};
pub use error::TournamentError;
pub use group::{round_robin, sort_standings, Fixture, Group, Standing};
pub use sim::simulate_match;
pub use team::{
    placeholder_team, GeneratedLeague, League, PlaceholderRoster, Team, TeamColors, TeamSource,
    DEFAULT_STRENGTH, LEAGUES,
};
