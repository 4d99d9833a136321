//! Common utilities shared across the game modes
//!
//! Frame pacing, shootout construction from the loaded configuration and
//! the frame loop that plays one shootout, shared by quick matches and
//! tournament matches.

use std::io;
use std::time::{Duration, Instant};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::Terminal;
use tracing::{debug, warn};

use crate::ai::{self, BehaviorStore, JsonFileStore, MemoryStore, OpponentKind};
use crate::config::{Config, KeyBindings};
use crate::game::{poll_input, Difficulty, InputAction, Phase, Shootout, ShootoutEvent, ShootoutRules, Side};
use crate::ui::{self, OverlayMessage, SceneView};
use crate::FRAME_DURATION;

/// Apply frame rate limiting to maintain consistent game speed.
///
/// This function should be called at the end of each game loop iteration.
/// It sleeps for the remaining time if the frame finished early, ensuring
/// a consistent frame rate across all game modes.
///
/// # Arguments
/// * `frame_start` - The `Instant` when the frame began (typically from `Instant::now()`)
/// * `frame` - Target frame length, see [`frame_duration`]
///
/// # Example
/// ```rust,no_run
/// use std::time::Instant;
/// # use spotkick::game_modes::common::{frame_duration, limit_frame_rate};
/// let frame = frame_duration(60);
/// let frame_start = Instant::now();
/// // ... game loop logic ...
/// limit_frame_rate(frame_start, frame);
/// ```
pub fn limit_frame_rate(frame_start: Instant, frame: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame {
        std::thread::sleep(frame - elapsed);
    }
}

/// Frame length for a configured frame rate (0 falls back to the default)
pub fn frame_duration(target_fps: u64) -> Duration {
    if target_fps == 0 {
        FRAME_DURATION
    } else {
        Duration::from_nanos(1_000_000_000 / target_fps)
    }
}

/// Choices made in the menu for the next match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSetup {
    pub difficulty: Difficulty,
    pub opponent: OpponentKind,
    /// Fixed seed for reproducible matches, entropy otherwise
    pub seed: Option<u64>,
}

impl MatchSetup {
    pub fn from_config(config: &Config, seed: Option<u64>) -> Self {
        Self {
            difficulty: config.gameplay.difficulty,
            opponent: config.ai.opponent,
            seed,
        }
    }
}

/// Where the opponent keeps what it has learned
pub fn behavior_store(config: &Config) -> Box<dyn BehaviorStore> {
    if config.ai.persist {
        Box::new(JsonFileStore::new(ai::store::default_store_path()))
    } else {
        Box::new(MemoryStore::new())
    }
}

pub fn session_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(ChaCha8Rng::from_entropy()),
    }
}

/// Build an unstarted shootout for the given setup
pub fn build_shootout(config: &Config, setup: &MatchSetup) -> Shootout {
    let shooter = ai::create_shooter(setup.opponent, config.ai.learning_rate, behavior_store(config));
    Shootout::new(
        ShootoutRules::from_config(config),
        setup.difficulty,
        shooter,
        session_rng(setup.seed),
    )
}

/// Wipe the adaptive opponent's saved learning
pub fn reset_opponent_memory(config: &Config) {
    let mut model = ai::OpponentModel::new(config.ai.learning_rate, behavior_store(config));
    model.forget();
    if !model.is_persisting() && config.ai.persist {
        warn!("Could not clear saved opponent memory");
    }
}

/// What the human can do once the final whistle has gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterMatch {
    /// Quick match: rematch or quit
    Rematch,
    /// Tournament: the kick key hands the result back
    Continue,
}

/// How a shootout loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShootoutExit {
    Finished { player: u32, opponent: u32, winner: Side },
    Quit,
}

/// Whether the frame loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Exit,
}

/// Apply one input action to the shootout, collecting any events it causes
fn apply_action(
    shootout: &mut Shootout,
    action: InputAction,
    aim_step: f32,
    after_match: AfterMatch,
    events: &mut Vec<ShootoutEvent>,
) -> Control {
    match action {
        InputAction::Quit => return Control::Exit,
        InputAction::Rematch => {
            if after_match == AfterMatch::Rematch && shootout.rematch() {
                debug!("Rematch started");
            }
        }
        InputAction::Pause => shootout.toggle_pause(),
        InputAction::AimLeft => shootout.nudge_aim(-aim_step, 0.0),
        InputAction::AimRight => shootout.nudge_aim(aim_step, 0.0),
        InputAction::AimUp => shootout.nudge_aim(0.0, -aim_step),
        InputAction::AimDown => shootout.nudge_aim(0.0, aim_step),
        InputAction::ToggleBoost => shootout.toggle_boost(),
        InputAction::Kick => {
            if shootout.is_over() {
                if after_match == AfterMatch::Continue {
                    return Control::Exit;
                }
            } else if shootout.charge().is_charging {
                events.extend(shootout.release());
            } else {
                shootout.begin_charge();
            }
        }
    }
    Control::Continue
}

/// Short status line for an event, from the human's point of view
fn status_for(event: &ShootoutEvent) -> Option<&'static str> {
    match event {
        ShootoutEvent::ShotResolved { scored: true } => Some("You scored!"),
        ShootoutEvent::ShotResolved { scored: false } => Some("Saved by the keeper"),
        ShootoutEvent::SaveResolved { saved: true } => Some("You kept it out!"),
        ShootoutEvent::SaveResolved { saved: false } => Some("They scored"),
        ShootoutEvent::PhaseChanged(Phase::Shoot) => Some("Your kick - aim and charge"),
        ShootoutEvent::PhaseChanged(Phase::Save) => Some("In goal - pick your dive"),
        ShootoutEvent::SuddenDeath => Some("Level! Sudden death"),
        ShootoutEvent::KickTaken { .. } | ShootoutEvent::MatchOver { .. } => None,
    }
}

/// Key hint line for the bottom of the scene
pub fn controls_hint(bindings: &KeyBindings) -> String {
    format!(
        "{}{}{}{}/Arrows: Aim  {}: Charge/Kick  {}: Boost  {}: Pause  {}: Quit",
        bindings.aim_up,
        bindings.aim_left,
        bindings.aim_down,
        bindings.aim_right,
        bindings.kick,
        bindings.boost,
        bindings.pause,
        bindings.quit
    )
}

fn overlay_for(shootout: &Shootout, config: &Config, after_match: AfterMatch) -> Option<OverlayMessage> {
    if shootout.is_paused() {
        return Some(OverlayMessage::paused(&config.keybindings.pause));
    }
    if !shootout.is_over() {
        return None;
    }
    let winner = shootout.winner()?;
    let footer = match after_match {
        AfterMatch::Rematch => format!(
            "{} to Rematch  |  {} to Quit",
            config.keybindings.rematch, config.keybindings.quit
        ),
        AfterMatch::Continue => format!("{} to continue", config.keybindings.kick),
    };
    let state = shootout.match_state();
    Some(OverlayMessage::match_over(
        winner,
        state.player_score,
        state.opponent_score,
        shootout.stats(),
        &footer,
    ))
}

/// Run the frame loop for one (already started) shootout
pub fn play_shootout<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    shootout: &mut Shootout,
    title: &str,
    after_match: AfterMatch,
) -> Result<ShootoutExit, io::Error> {
    let frame = frame_duration(config.display.target_fps);
    let controls = controls_hint(&config.keybindings);
    let mut status: Option<&'static str> = Some("Your kick - aim and charge");

    loop {
        let now = Instant::now();
        let mut events = Vec::new();

        for action in poll_input(&config.keybindings)? {
            let control = apply_action(shootout, action, config.gameplay.aim_step, after_match, &mut events);
            if control == Control::Exit {
                let state = shootout.match_state();
                return Ok(match shootout.winner() {
                    Some(winner) if shootout.is_over() => ShootoutExit::Finished {
                        player: state.player_score,
                        opponent: state.opponent_score,
                        winner,
                    },
                    _ => ShootoutExit::Quit,
                });
            }
        }

        events.extend(shootout.update(frame));
        for event in &events {
            debug!("Shootout event: {:?}", event);
            if let Some(text) = status_for(event) {
                status = Some(text);
            }
        }

        let overlay = overlay_for(shootout, config, after_match);
        let view = SceneView {
            title,
            status,
            controls: &controls,
            overlay: overlay.as_ref(),
        };
        terminal.draw(|f| ui::render(f, shootout, &config.display, &view))?;

        // Frame rate limiting
        limit_frame_rate(now, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.ai.persist = false;
        config
    }

    fn started(seed: u64) -> Shootout {
        let setup = MatchSetup {
            difficulty: Difficulty::Normal,
            opponent: OpponentKind::Streaky,
            seed: Some(seed),
        };
        let mut shootout = build_shootout(&quiet_config(), &setup);
        shootout.start();
        shootout
    }

    /// Tick until no animation is running (or the match is over)
    fn settle(shootout: &mut Shootout, events: &mut Vec<ShootoutEvent>) {
        for _ in 0..600 {
            events.extend(shootout.update(Duration::from_millis(16)));
            if !shootout.animation_in_progress() && shootout.status() != crate::game::SessionStatus::Decided {
                break;
            }
        }
    }

    #[test]
    fn test_kick_key_charges_then_shoots() {
        let mut shootout = started(1);
        let mut events = Vec::new();

        apply_action(&mut shootout, InputAction::Kick, 0.1, AfterMatch::Rematch, &mut events);
        assert!(shootout.charge().is_charging);
        shootout.update(Duration::from_millis(500));

        apply_action(&mut shootout, InputAction::Kick, 0.1, AfterMatch::Rematch, &mut events);
        assert!(matches!(events.as_slice(), [ShootoutEvent::KickTaken { side: Side::Player, .. }]));
        assert!(shootout.animation_in_progress());
    }

    #[test]
    fn test_aim_keys_move_the_aim() {
        let mut shootout = started(2);
        let mut events = Vec::new();
        apply_action(&mut shootout, InputAction::AimLeft, 0.1, AfterMatch::Rematch, &mut events);
        apply_action(&mut shootout, InputAction::AimUp, 0.1, AfterMatch::Rematch, &mut events);
        assert!((shootout.aim().x + 0.1).abs() < 1e-6);
        assert!((shootout.aim().y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_quit_exits() {
        let mut shootout = started(3);
        let mut events = Vec::new();
        assert_eq!(
            apply_action(&mut shootout, InputAction::Quit, 0.1, AfterMatch::Rematch, &mut events),
            Control::Exit
        );
    }

    #[test]
    fn test_kick_after_full_time_continues_only_in_tournament() {
        let mut shootout = started(4);
        let mut events = Vec::new();
        while !shootout.is_over() {
            apply_action(&mut shootout, InputAction::Kick, 0.1, AfterMatch::Continue, &mut events);
            shootout.update(Duration::from_millis(300));
            apply_action(&mut shootout, InputAction::Kick, 0.1, AfterMatch::Continue, &mut events);
            settle(&mut shootout, &mut events);
        }

        assert_eq!(
            apply_action(&mut shootout, InputAction::Kick, 0.1, AfterMatch::Rematch, &mut events),
            Control::Continue
        );
        assert_eq!(
            apply_action(&mut shootout, InputAction::Kick, 0.1, AfterMatch::Continue, &mut events),
            Control::Exit
        );
        assert!(overlay_for(&shootout, &quiet_config(), AfterMatch::Rematch).is_some());

        apply_action(&mut shootout, InputAction::Rematch, 0.1, AfterMatch::Rematch, &mut events);
        assert!(!shootout.is_over());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(status_for(&ShootoutEvent::ShotResolved { scored: true }), Some("You scored!"));
        assert_eq!(status_for(&ShootoutEvent::SuddenDeath), Some("Level! Sudden death"));
        assert_eq!(status_for(&ShootoutEvent::MatchOver { winner: Side::Player }), None);
    }

    #[test]
    fn test_pause_overlay() {
        let mut shootout = started(5);
        let mut events = Vec::new();
        apply_action(&mut shootout, InputAction::Pause, 0.1, AfterMatch::Rematch, &mut events);
        let overlay = overlay_for(&shootout, &quiet_config(), AfterMatch::Rematch);
        assert_eq!(overlay.map(|o| o.lines[0].clone()), Some("PAUSED".to_string()));
    }

    #[test]
    fn test_build_shootout_uses_setup() {
        let mut config = Config::default();
        config.ai.persist = false;
        let setup = MatchSetup {
            difficulty: Difficulty::Hard,
            opponent: OpponentKind::Streaky,
            seed: Some(3),
        };

        let mut shootout = build_shootout(&config, &setup);
        shootout.start();
        assert_eq!(shootout.difficulty(), Difficulty::Hard);
        assert_eq!(shootout.shooter().name(), "Streaky");
        assert_eq!(shootout.match_state().phase, Phase::Shoot);
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(0), FRAME_DURATION);
        assert_eq!(frame_duration(50), Duration::from_millis(20));
    }

    #[test]
    fn test_setup_from_config() {
        let config = Config::default();
        let setup = MatchSetup::from_config(&config, Some(9));
        assert_eq!(setup.difficulty, config.gameplay.difficulty);
        assert_eq!(setup.opponent, OpponentKind::Adaptive);
        assert_eq!(setup.seed, Some(9));
    }
}
