use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use tracing::{info, warn};

use crate::config::{Config, KeyBindings};
use crate::game::matches_binding;
use crate::tournament::{Fixture, GeneratedLeague, MatchRef, Team, TeamProgress, Tournament};
use crate::ui::{render_tournament, OverlayMessage};

use super::common::{build_shootout, play_shootout, AfterMatch, MatchSetup, ShootoutExit};

/// Id of the human's team in every tournament
pub const PLAYER_TEAM_ID: &str = "player";

/// Key press on a tournament screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewAction {
    Proceed,
    Leave,
}

fn view_action(code: KeyCode, bindings: &KeyBindings) -> Option<ViewAction> {
    if matches_binding(code, &bindings.menu_select) || matches_binding(code, &bindings.kick) {
        Some(ViewAction::Proceed)
    } else if matches_binding(code, &bindings.quit) || matches_binding(code, &bindings.menu_back) {
        Some(ViewAction::Leave)
    } else {
        None
    }
}

/// Show the tournament screen until the human proceeds or leaves
fn show_tournament<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    bindings: &KeyBindings,
    tournament: &Tournament,
    message: &OverlayMessage,
    footer: &str,
) -> Result<ViewAction, io::Error> {
    loop {
        terminal.draw(|f| render_tournament(f, tournament, footer, Some(message)))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = view_action(key.code, bindings) {
                        return Ok(action);
                    }
                }
            }
        }
    }
}

/// Shootout score as (team1, team2) for a fixture the human played
fn fixture_score(fixture: &Fixture, player: u32, opponent: u32) -> (u32, u32) {
    if fixture.team1.id == PLAYER_TEAM_ID {
        (player, opponent)
    } else {
        (opponent, player)
    }
}

fn opponent_of(fixture: &Fixture) -> &Team {
    if fixture.team1.id == PLAYER_TEAM_ID {
        fixture.team2.as_ref()
    } else {
        fixture.team1.as_ref()
    }
}

fn match_label(tournament: &Tournament, match_ref: MatchRef) -> String {
    match match_ref {
        MatchRef::Group { group, .. } => tournament
            .groups()
            .get(group)
            .map(|g| g.display_name())
            .unwrap_or_default(),
        MatchRef::Knockout { stage, .. } => stage.display_name().to_string(),
    }
}

fn next_match_message(tournament: &Tournament, match_ref: MatchRef, fixture: &Fixture) -> OverlayMessage {
    OverlayMessage::info(vec![
        match_label(tournament, match_ref),
        String::new(),
        format!("{}  vs  {}", fixture.team1.name, fixture.team2.name),
    ])
    .with_title("Next Match")
}

fn final_message(tournament: &Tournament) -> OverlayMessage {
    let progress = tournament.team_progress(PLAYER_TEAM_ID);
    let mut lines = vec![progress.display_name().to_string()];
    if let Some(winner) = tournament.winner() {
        lines.push(String::new());
        lines.push(format!("Champions: {}", winner.name));
    }

    let message = match progress {
        TeamProgress::Winner => OverlayMessage::success(lines),
        _ => OverlayMessage::warning(lines),
    };
    message.with_title("Tournament Over")
}

/// Play a 32-team tournament as `Spotkick FC`
///
/// Fixtures between computer teams are simulated; the human plays a full
/// shootout for each of their own.
pub fn run_tournament<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    setup: &MatchSetup,
) -> Result<(), io::Error> {
    let seed = setup.seed.unwrap_or_else(rand::random);
    let player_team = Team::new(PLAYER_TEAM_ID, "Spotkick FC", "Home").with_colors("#FFD700", "#000000");

    let mut tournament = match Tournament::new(player_team, &GeneratedLeague::all(), seed) {
        Ok(t) => t,
        Err(e) => {
            warn!("Could not draw tournament: {}", e);
            return Ok(());
        }
    };
    info!("Tournament started with seed {}", seed);

    let bindings = &config.keybindings;
    let mut played: u64 = 0;

    loop {
        let next = match tournament.play_until_player_match() {
            Ok(next) => next,
            Err(e) => {
                warn!("Tournament simulation stopped: {}", e);
                None
            }
        };

        let Some(match_ref) = next else {
            let footer = format!("{}: Back to menu", bindings.menu_select);
            show_tournament(terminal, bindings, &tournament, &final_message(&tournament), &footer)?;
            info!(
                "Tournament over: {}",
                tournament.team_progress(PLAYER_TEAM_ID).display_name()
            );
            return Ok(());
        };

        let Some(fixture) = tournament.fixture(match_ref).cloned() else {
            warn!("Fixture {:?} vanished", match_ref);
            return Ok(());
        };

        let footer = format!("{}: Play  |  {}: Leave tournament", bindings.menu_select, bindings.quit);
        let message = next_match_message(&tournament, match_ref, &fixture);
        if show_tournament(terminal, bindings, &tournament, &message, &footer)? == ViewAction::Leave {
            info!("Left the tournament");
            return Ok(());
        }

        // Each match gets its own stream so a seeded tournament replays exactly
        let match_setup = MatchSetup {
            seed: setup.seed.map(|s| s.wrapping_add(played + 1)),
            ..*setup
        };
        played += 1;

        let mut shootout = build_shootout(config, &match_setup);
        shootout.start();
        let title = format!(
            "{}  ·  vs {}",
            match_label(&tournament, match_ref),
            opponent_of(&fixture).name
        );

        match play_shootout(terminal, config, &mut shootout, &title, AfterMatch::Continue)? {
            ShootoutExit::Finished { player, opponent, .. } => {
                let (s1, s2) = fixture_score(&fixture, player, opponent);
                if let Err(e) = tournament.record_result(match_ref, s1, s2) {
                    warn!("Could not record result: {}", e);
                    return Ok(());
                }
            }
            ShootoutExit::Quit => {
                info!("Left the tournament mid-match");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn fixture(player_first: bool) -> Fixture {
        let me = Rc::new(Team::new(PLAYER_TEAM_ID, "Spotkick FC", "Home"));
        let them = Rc::new(Team::new("cpu", "Red Lions", "International"));
        if player_first {
            Fixture::new(me, them)
        } else {
            Fixture::new(them, me)
        }
    }

    #[test]
    fn test_fixture_score_follows_team_order() {
        assert_eq!(fixture_score(&fixture(true), 4, 2), (4, 2));
        assert_eq!(fixture_score(&fixture(false), 4, 2), (2, 4));
    }

    #[test]
    fn test_opponent_of() {
        assert_eq!(opponent_of(&fixture(true)).id, "cpu");
        assert_eq!(opponent_of(&fixture(false)).id, "cpu");
    }

    #[test]
    fn test_view_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(view_action(KeyCode::Enter, &bindings), Some(ViewAction::Proceed));
        assert_eq!(view_action(KeyCode::Char(' '), &bindings), Some(ViewAction::Proceed));
        assert_eq!(view_action(KeyCode::Char('Q'), &bindings), Some(ViewAction::Leave));
        assert_eq!(view_action(KeyCode::Esc, &bindings), Some(ViewAction::Leave));
        assert_eq!(view_action(KeyCode::Char('x'), &bindings), None);
    }

    #[test]
    fn test_final_message_names_champion() {
        let mut t = Tournament::new(
            Team::new(PLAYER_TEAM_ID, "Spotkick FC", "Home"),
            &GeneratedLeague::all(),
            21,
        )
        .unwrap();
        while let Some(next) = t.play_until_player_match().unwrap() {
            let f = t.fixture(next).unwrap().clone();
            let (s1, s2) = fixture_score(&f, 0, 3);
            t.record_result(next, s1, s2).unwrap();
        }

        let message = final_message(&t);
        assert_ne!(message.lines[0], TeamProgress::Winner.display_name());
        assert!(message.lines.iter().any(|l| l.starts_with("Champions: ")));
    }
}
