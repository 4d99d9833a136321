pub mod aim;
pub mod beats;
pub mod difficulty;
pub mod input;
pub mod outcome;
pub mod session;
pub mod state;
pub mod stats;
pub mod trajectory;

pub use aim::{AimVector, ChargeState, MAX_POWER};
pub use beats::{Beat, BeatSequence, Countdown};
pub use difficulty::Difficulty;
pub use input::{map_key, matches_binding, parse_key, poll_input, InputAction};
pub use outcome::{goal_probability, resolve_save, resolve_shot};
pub use session::{KickInFlight, SessionStatus, Shootout, ShootoutEvent, ShootoutRules};
pub use state::{MatchState, PenaltiesLeft, Phase, Side, REGULATION_PENALTIES};
pub use stats::MatchStatistics;
pub use trajectory::{compute_trajectory, keeper_dive, penalty_spot, BallFlight, GoalFrame, Trajectory};
