// Tournament screens: group tables and the knockout bracket

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::overlay::{render_overlay, OverlayMessage};
use crate::tournament::{Fixture, Group, Stage, Tournament};

const KNOCKOUT_STAGES: [Stage; 4] = [Stage::RoundOf16, Stage::QuarterFinals, Stage::SemiFinals, Stage::Final];

fn player_style(is_player: bool) -> Style {
    if is_player {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Table rows for one group: position, team, P W D L GD Pts
pub fn group_lines(group: &Group, tournament: &Tournament) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("{:<22} P  W  D  L  GD Pts", group.display_name()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    for (i, s) in group.standings.iter().enumerate() {
        let name: String = s.team.name.chars().take(19).collect();
        let text = format!(
            "{} {:<20} {:>1}  {:>1}  {:>1}  {:>1} {:>3} {:>3}",
            i + 1,
            name,
            s.played,
            s.won,
            s.drawn,
            s.lost,
            s.goal_difference(),
            s.points
        );
        // Top two go through
        let mut style = player_style(tournament.is_player_team(&s.team));
        if i >= 2 && !tournament.is_player_team(&s.team) {
            style = style.fg(Color::Gray);
        }
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines
}

/// One line per knockout fixture: "Team A  3-1  Team B"
pub fn fixture_line(fixture: &Fixture, tournament: &Tournament) -> Line<'static> {
    let score = match fixture.score {
        Some((a, b)) => format!(" {}-{} ", a, b),
        None => "  v  ".to_string(),
    };
    let through = |team_id: &str| {
        fixture
            .advancing
            .as_ref()
            .map_or(false, |winner| winner.id == team_id)
    };

    let side = |team: &crate::tournament::Team| {
        let mut style = player_style(tournament.is_player_team(team));
        if fixture.advancing.is_some() && !through(team.id.as_str()) {
            style = style.add_modifier(Modifier::DIM);
        }
        Span::styled(team.name.clone(), style)
    };

    Line::from(vec![
        side(fixture.team1.as_ref()),
        Span::styled(score, Style::default().fg(Color::Gray)),
        side(fixture.team2.as_ref()),
    ])
}

fn bracket_lines(tournament: &Tournament) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for stage in KNOCKOUT_STAGES {
        let round = tournament.knockout_round(stage);
        if round.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            stage.display_name().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.extend(round.iter().map(|f| fixture_line(f, tournament)));
        lines.push(Line::from(""));
    }
    lines
}

/// Whole tournament screen; `message` is shown centred on top
pub fn render_tournament(frame: &mut Frame, tournament: &Tournament, footer: &str, message: Option<&OverlayMessage>) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(5),    // Groups or bracket
            Constraint::Length(1), // Controls hint
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled("TOURNAMENT  ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(
            tournament.current_stage().display_name().to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("   ·   {}", tournament.team_progress(&tournament.player_team().id).display_name()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    if tournament.current_stage() == Stage::Group {
        render_groups(frame, tournament, chunks[1]);
    } else {
        let bracket = Paragraph::new(bracket_lines(tournament))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(bracket, chunks[1]);
    }

    let controls = Paragraph::new(Line::from(Span::styled(footer.to_string(), Style::default().fg(Color::DarkGray))))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[2]);

    if let Some(message) = message {
        render_overlay(frame, message, area);
    }
}

/// Eight tables in a 2 × 4 grid
fn render_groups(frame: &mut Frame, tournament: &Tournament, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (col, column_area) in columns.iter().enumerate() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*column_area);

        for (row, row_area) in rows.iter().enumerate() {
            if let Some(group) = tournament.groups().get(col * 4 + row) {
                let table = Paragraph::new(group_lines(group, tournament));
                frame.render_widget(table, *row_area);
            }
        }
    }
}
