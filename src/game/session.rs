// Shootout session: one match between the human and a computer shooter
//
// Owns every piece of per-match state and is driven by the frame loop
// through `update(dt)`. Input arrives as aim nudges and charge begin/release;
// everything the renderer needs is exposed read-only.

use std::time::Duration;

use rand::{Rng, RngCore};
use tracing::{debug, info};

use super::aim::{AimVector, ChargeState};
use super::beats::{Beat, BeatSequence, Countdown};
use super::difficulty::Difficulty;
use super::outcome::{resolve_save, resolve_shot};
use super::state::{MatchState, Phase, Side, REGULATION_PENALTIES};
use super::stats::MatchStatistics;
use super::trajectory::{compute_trajectory, keeper_dive, penalty_spot, BallFlight, GoalFrame, Trajectory};
use crate::ai::{hint_appears, predict_hint, KeeperHint, Shooter, HINT_ROLL_INTERVAL};
use crate::config::Config;

/// Time per ball-flight animation frame
const FLIGHT_FRAME_TIME: Duration = Duration::from_nanos(16_666_667);

/// Opponent kicks are struck at this power, give or take 20%
const OPPONENT_BASE_POWER: f32 = 50.0;

/// Keeper movement in scene units per frame
const KEEPER_DIVE_SPEED: f32 = 12.0;

/// Tunables for a shootout
#[derive(Debug, Clone, PartialEq)]
pub struct ShootoutRules {
    pub penalties_per_side: u32,
    pub countdown: Duration,
    /// Power per second while charging
    pub charge_rate: f32,
    pub boost_charge_rate: f32,
    pub flight: Duration,
    pub result: Duration,
    pub final_whistle: Duration,
}

impl ShootoutRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            penalties_per_side: config.gameplay.penalties_per_side,
            countdown: config.gameplay.countdown(),
            charge_rate: config.gameplay.charge_rate,
            boost_charge_rate: config.gameplay.boost_charge_rate,
            flight: config.timing.flight(),
            result: config.timing.result(),
            final_whistle: config.timing.final_whistle(),
        }
    }
}

impl Default for ShootoutRules {
    fn default() -> Self {
        Self {
            penalties_per_side: REGULATION_PENALTIES,
            countdown: Duration::from_secs(10),
            charge_rate: 48.0,
            boost_charge_rate: 90.0,
            flight: Duration::from_millis(1000),
            result: Duration::from_millis(2000),
            final_whistle: Duration::from_millis(2000),
        }
    }
}

/// Something that happened during `update` or `release`
#[derive(Debug, Clone, PartialEq)]
pub enum ShootoutEvent {
    /// Ball struck; the outcome is already decided but not yet shown
    KickTaken { side: Side, power: f32, target: AimVector },
    /// The human's kick landed
    ShotResolved { scored: bool },
    /// The opponent's kick landed
    SaveResolved { saved: bool },
    /// Roles swapped for the next kick
    PhaseChanged(Phase),
    /// Regulation ended level, one more kick each
    SuddenDeath,
    MatchOver { winner: Side },
}

/// A kick whose ball is still travelling or whose result is on screen
#[derive(Debug, Clone, PartialEq)]
pub struct KickInFlight {
    pub kicker: Side,
    pub power: f32,
    /// Where the ball goes
    pub shot: AimVector,
    /// Where the keeper dives
    pub keeper: AimVector,
    pub scored: bool,
    pub trajectory: Trajectory,
    /// Keeper's path from the middle of the goal line
    pub dive: Trajectory,
    pub flight: BallFlight,
    flight_clock: Duration,
}

/// Lifecycle of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Not started yet
    Idle,
    Playing,
    /// Decided, final whistle beat still running
    Decided,
    Over,
}

/// One penalty shootout against a computer shooter
pub struct Shootout {
    rules: ShootoutRules,
    difficulty: Difficulty,
    goal: GoalFrame,
    match_state: MatchState,
    aim: AimVector,
    charge: ChargeState,
    boost: bool,
    stats: MatchStatistics,
    beats: BeatSequence,
    countdown: Countdown,
    shooter: Box<dyn Shooter>,
    pending_opponent_shot: Option<AimVector>,
    hint: Option<KeeperHint>,
    hint_clock: Duration,
    kick: Option<KickInFlight>,
    status: SessionStatus,
    paused: bool,
    rng: Box<dyn RngCore>,
}

impl Shootout {
    pub fn new(
        rules: ShootoutRules,
        difficulty: Difficulty,
        shooter: Box<dyn Shooter>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let match_state = MatchState::new(rules.penalties_per_side);
        Self {
            rules,
            difficulty,
            goal: GoalFrame::default(),
            match_state,
            aim: AimVector::CENTER,
            charge: ChargeState::default(),
            boost: false,
            stats: MatchStatistics::default(),
            beats: BeatSequence::new(),
            countdown: Countdown::default(),
            shooter,
            pending_opponent_shot: None,
            hint: None,
            hint_clock: Duration::ZERO,
            kick: None,
            status: SessionStatus::Idle,
            paused: false,
            rng,
        }
    }

    /// Start (or restart) the match from 0-0 with the human shooting first
    pub fn start(&mut self) {
        self.match_state.reset();
        self.stats = MatchStatistics::default();
        self.beats.cancel();
        self.kick = None;
        self.boost = false;
        self.paused = false;
        self.shooter.reset();
        self.status = SessionStatus::Playing;
        info!(
            "Shootout started against {} on {}",
            self.shooter.name(),
            self.difficulty.display_name()
        );
        self.begin_phase();
    }

    /// Play again once the match is over
    pub fn rematch(&mut self) -> bool {
        if self.status != SessionStatus::Over {
            return false;
        }
        self.start();
        true
    }

    /// Reset per-kick state for the phase in `match_state`
    fn begin_phase(&mut self) {
        self.aim = AimVector::CENTER;
        self.charge.reset();
        self.hint = None;
        self.hint_clock = Duration::ZERO;
        self.countdown.start(self.rules.countdown);

        self.pending_opponent_shot = match self.match_state.phase {
            Phase::Save => Some(self.shooter.choose_target(&mut *self.rng)),
            Phase::Shoot => None,
        };
        debug!(
            "Phase {:?}, round {}, score {}-{}",
            self.match_state.phase,
            self.match_state.round(),
            self.match_state.player_score,
            self.match_state.opponent_score
        );
    }

    /// Whether a kick is being animated or its result shown
    pub fn animation_in_progress(&self) -> bool {
        self.beats.is_running()
    }

    fn accepts_input(&self) -> bool {
        self.status == SessionStatus::Playing && !self.paused && !self.animation_in_progress()
    }

    pub fn nudge_aim(&mut self, dx: f32, dy: f32) {
        if self.accepts_input() {
            self.aim.nudge(dx, dy);
        }
    }

    pub fn set_aim(&mut self, aim: AimVector) {
        if self.accepts_input() {
            self.aim = AimVector::new(aim.x, aim.y);
        }
    }

    /// Start charging. Refused while a kick is animating or one is charging.
    pub fn begin_charge(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        if !self.charge.begin() {
            return false;
        }
        // First hint roll happens on the next update
        self.hint_clock = HINT_ROLL_INTERVAL;
        true
    }

    /// Release the charge and take the kick (or dive)
    pub fn release(&mut self) -> Vec<ShootoutEvent> {
        if !self.accepts_input() {
            return Vec::new();
        }
        match self.charge.release() {
            Some(power) => self.execute_kick(power),
            None => Vec::new(),
        }
    }

    pub fn toggle_boost(&mut self) {
        self.boost = !self.boost;
    }

    pub fn toggle_pause(&mut self) {
        if self.status == SessionStatus::Playing {
            self.paused = !self.paused;
        }
    }

    /// Advance the session by `dt` of wall time
    pub fn update(&mut self, dt: Duration) -> Vec<ShootoutEvent> {
        let mut events = Vec::new();
        if self.paused || self.status == SessionStatus::Idle || self.status == SessionStatus::Over {
            return events;
        }

        if self.charge.is_charging {
            let rate = if self.boost {
                self.rules.boost_charge_rate
            } else {
                self.rules.charge_rate
            };
            self.charge.accumulate(dt.as_secs_f32(), rate);
            self.roll_hint(dt);
        }

        if self.status == SessionStatus::Playing
            && !self.animation_in_progress()
            && self.countdown.tick(dt)
        {
            debug!("Countdown expired, taking the kick");
            let power = self.charge.release().unwrap_or(self.charge.power);
            events.extend(self.execute_kick(power));
        }

        if let Some(kick) = self.kick.as_mut() {
            kick.flight_clock += dt;
            while kick.flight_clock >= FLIGHT_FRAME_TIME {
                kick.flight_clock -= FLIGHT_FRAME_TIME;
                if !kick.flight.step() {
                    break;
                }
            }
        }

        for beat in self.beats.tick(dt) {
            match beat {
                Beat::Flight => events.extend(self.land_kick()),
                Beat::ShowResult => events.extend(self.finish_kick()),
                Beat::FinalWhistle => {
                    self.status = SessionStatus::Over;
                    if let Some(winner) = self.match_state.leader() {
                        info!(
                            "Match over {}-{}, winner {:?}",
                            self.match_state.player_score, self.match_state.opponent_score, winner
                        );
                        events.push(ShootoutEvent::MatchOver { winner });
                    }
                }
            }
        }

        events
    }

    fn roll_hint(&mut self, dt: Duration) {
        if self.match_state.phase != Phase::Save || self.hint.is_some() {
            return;
        }
        let Some(actual) = self.pending_opponent_shot else {
            return;
        };

        self.hint_clock += dt;
        while self.hint_clock >= HINT_ROLL_INTERVAL {
            self.hint_clock -= HINT_ROLL_INTERVAL;
            if hint_appears(self.difficulty, &mut *self.rng) {
                let hint = predict_hint(&actual, self.difficulty, &mut *self.rng);
                debug!("Keeper hint at ({:.2}, {:.2})", hint.target.x, hint.target.y);
                self.hint = Some(hint);
                break;
            }
        }
    }

    /// Decide the kick, start its animation and queue the beats
    fn execute_kick(&mut self, power: f32) -> Vec<ShootoutEvent> {
        self.countdown.stop();
        self.hint = None;
        self.boost = false;

        let kicker = self.match_state.phase.kicker();
        let (shot, keeper, scored, ball_power) = match kicker {
            Side::Player => {
                let shot = self.aim;
                let scored = resolve_shot(power, &shot, self.difficulty, &mut *self.rng);
                self.shooter.observe_player_shot(&shot, power);
                self.stats.record_shot(power, scored);
                // The opponent's keeper goes the wrong way on a goal
                let keeper = if scored { shot.mirrored() } else { shot };
                (shot, keeper, scored, power)
            }
            Side::Opponent => {
                let shot = match self.pending_opponent_shot.take() {
                    Some(shot) => shot,
                    None => self.shooter.choose_target(&mut *self.rng),
                };
                let keeper = self.aim;
                let scored = !resolve_save(&keeper, &shot, self.difficulty);
                self.shooter.learn(scored, &shot, &mut *self.rng);
                self.stats.record_opponent_kick(scored);
                let ball_power = OPPONENT_BASE_POWER * self.rng.gen_range(0.8..=1.2);
                (shot, keeper, scored, ball_power)
            }
        };

        let trajectory = compute_trajectory(ball_power, &shot, penalty_spot(), &self.goal)
            .with_curve(ball_power, &mut *self.rng);
        let dive = keeper_dive(
            self.goal.to_scene(&AimVector::CENTER),
            self.goal.to_scene(&keeper),
            KEEPER_DIVE_SPEED,
        );
        debug!(
            "{:?} kick at ({:.2}, {:.2}) power {:.0}: {}",
            kicker,
            shot.x,
            shot.y,
            ball_power,
            if scored { "goal" } else { "no goal" }
        );

        self.kick = Some(KickInFlight {
            kicker,
            power: ball_power,
            shot,
            keeper,
            scored,
            trajectory,
            dive,
            flight: BallFlight::new(&trajectory),
            flight_clock: Duration::ZERO,
        });
        self.beats.push(Beat::Flight, self.rules.flight);
        self.beats.push(Beat::ShowResult, self.rules.result);

        vec![ShootoutEvent::KickTaken {
            side: kicker,
            power: ball_power,
            target: shot,
        }]
    }

    /// Ball arrived: book the result and check for the end of the match
    fn land_kick(&mut self) -> Vec<ShootoutEvent> {
        let Some(kick) = self.kick.as_ref() else {
            return Vec::new();
        };
        let (kicker, scored) = (kick.kicker, kick.scored);
        let mut events = vec![match kicker {
            Side::Player => ShootoutEvent::ShotResolved { scored },
            Side::Opponent => ShootoutEvent::SaveResolved { saved: !scored },
        }];

        self.match_state.record_kick(scored);
        let was_sudden_death = self.match_state.sudden_death;
        if self.match_state.check_match_over() {
            self.status = SessionStatus::Decided;
            self.beats.push(Beat::FinalWhistle, self.rules.final_whistle);
        } else if self.match_state.sudden_death && !was_sudden_death {
            info!("Level after regulation, sudden death");
            events.push(ShootoutEvent::SuddenDeath);
        }
        events
    }

    /// Result banner done: hand over to the next kick
    fn finish_kick(&mut self) -> Vec<ShootoutEvent> {
        self.kick = None;
        if self.status != SessionStatus::Playing {
            return Vec::new();
        }
        self.begin_phase();
        vec![ShootoutEvent::PhaseChanged(self.match_state.phase)]
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn aim(&self) -> &AimVector {
        &self.aim
    }

    pub fn charge(&self) -> &ChargeState {
        &self.charge
    }

    pub fn is_boosting(&self) -> bool {
        self.boost
    }

    pub fn stats(&self) -> &MatchStatistics {
        &self.stats
    }

    pub fn hint(&self) -> Option<&KeeperHint> {
        self.hint.as_ref()
    }

    pub fn kick(&self) -> Option<&KickInFlight> {
        self.kick.as_ref()
    }

    pub fn current_beat(&self) -> Option<Beat> {
        self.beats.current()
    }

    pub fn beat_progress(&self) -> f32 {
        self.beats.progress()
    }

    pub fn countdown_remaining(&self) -> Option<Duration> {
        self.countdown.remaining()
    }

    pub fn goal(&self) -> &GoalFrame {
        &self.goal
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn shooter(&self) -> &dyn Shooter {
        self.shooter.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }

    /// Winner once the match is decided
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            SessionStatus::Decided | SessionStatus::Over => self.match_state.leader(),
            _ => None,
        }
    }
}
