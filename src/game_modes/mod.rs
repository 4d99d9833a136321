pub mod common;
mod quick_match;
mod tournament;

pub use common::{MatchSetup, ShootoutExit};
pub use quick_match::run_quick_match;
pub use tournament::{run_tournament, PLAYER_TEAM_ID};
