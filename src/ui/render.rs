use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::{BrailleCanvas, DIGIT_WIDTH};
use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::trajectory::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::game::{penalty_spot, AimVector, Beat, Phase, SessionStatus, Shootout, Side, MAX_POWER};

// Layout: header with Braille scores + match info, the penalty scene, footer
// Rows 0-4: Score area (Braille digits are 15px tall = 4 rows, plus a status row)
// Rows 5 to N-3: Scene (goal, keeper, ball)
// Rows N-2, N-1: Power bar / countdown, controls hint
const UI_HEADER_ROWS: u16 = 5;
const UI_FOOTER_ROWS: u16 = 2;

// Sizes in virtual scene units
const KEEPER_WIDTH: f32 = 50.0;
const KEEPER_HEIGHT: f32 = 110.0;
const BALL_RADIUS: f32 = 10.0;
const NET_SPACING_PX: usize = 4;
const POWER_BAR_CELLS: usize = 20;

/// Text around the scene supplied by the game mode
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneView<'a> {
    /// Match title, e.g. "Quick Match" or "Group C: Red Lions"
    pub title: &'a str,
    /// Latest event ("GOAL!", "Sudden death", ...)
    pub status: Option<&'a str>,
    /// Key hint line at the bottom
    pub controls: &'a str,
    pub overlay: Option<&'a OverlayMessage>,
}

/// Maps virtual scene coordinates onto canvas pixels
struct SceneScale {
    scale_x: f32,
    scale_y: f32,
    offset_y: f32,
}

impl SceneScale {
    fn to_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x * self.scale_x).round() as i32,
            (y * self.scale_y + self.offset_y).round() as i32,
        )
    }

    fn width(&self, w: f32) -> i32 {
        (w * self.scale_x).round().max(1.0) as i32
    }

    fn height(&self, h: f32) -> i32 {
        (h * self.scale_y).round().max(1.0) as i32
    }
}

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

pub fn render(frame: &mut Frame, shootout: &Shootout, display: &DisplayConfig, view: &SceneView) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    // Create Braille canvas for entire screen (including score area)
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);

    draw_braille_scores(&mut canvas, shootout);

    let scene_rows = area.height.saturating_sub(UI_HEADER_ROWS + UI_FOOTER_ROWS);
    if scene_rows > 0 {
        let scene = SceneScale {
            scale_x: canvas.pixel_width() as f32 / VIRTUAL_WIDTH,
            scale_y: (scene_rows as usize * 4) as f32 / VIRTUAL_HEIGHT,
            offset_y: (UI_HEADER_ROWS as usize * 4) as f32,
        };

        canvas.set_pen(rgb(display.goal_color));
        draw_goal(&mut canvas, shootout, &scene);

        canvas.set_pen(rgb(display.keeper_color));
        draw_keeper(&mut canvas, shootout, &scene);

        if shootout.kick().is_none() && shootout.status() == SessionStatus::Playing {
            canvas.set_pen(rgb(display.aim_color));
            draw_aim_marker(&mut canvas, shootout, &scene);
        }

        if let Some(hint) = shootout.hint() {
            canvas.set_pen(rgb(display.hint_color));
            draw_hint(&mut canvas, shootout, &hint.target, &scene);
        }

        canvas.set_pen(rgb(display.ball_color));
        draw_ball(&mut canvas, shootout, &scene);
    }

    render_braille_canvas(frame, &canvas, area);

    draw_header_text(frame, shootout, view, area);
    if display.show_ai_weights {
        draw_ai_weights(frame, shootout, area);
    }
    if scene_rows > 0 {
        draw_result_banner(frame, shootout, area, scene_rows);
    }
    draw_footer(frame, shootout, view, area);

    if let Some(overlay) = view.overlay {
        render_overlay(frame, overlay, area);
    }
}

fn draw_braille_scores(canvas: &mut BrailleCanvas, shootout: &Shootout) {
    let state = shootout.match_state();
    let canvas_width_pixels = canvas.pixel_width();

    // Player score in the left third, opponent in the right third
    let player_x = (canvas_width_pixels / 3).saturating_sub(DIGIT_WIDTH / 2);
    let opponent_x = (canvas_width_pixels * 2 / 3).saturating_sub(DIGIT_WIDTH / 2);
    let score_y = 1;

    canvas.set_pen(Color::White);
    canvas.draw_number(state.player_score, player_x, score_y);
    canvas.draw_number(state.opponent_score, opponent_x, score_y);
}

fn draw_goal(canvas: &mut BrailleCanvas, shootout: &Shootout, scene: &SceneScale) {
    let goal = shootout.goal();
    let (left, top) = scene.to_pixel(goal.left, goal.top);
    let (right, bottom) = scene.to_pixel(goal.left + goal.width, goal.top + goal.height);

    // Goal line across the whole pitch
    canvas.draw_line((0, bottom), (canvas.pixel_width() as i32 - 1, bottom));

    // Posts and crossbar, two pixels thick
    for d in 0..2 {
        canvas.draw_line((left - d, top), (left - d, bottom));
        canvas.draw_line((right + d, top), (right + d, bottom));
        canvas.draw_line((left - 1, top - d), (right + 1, top - d));
    }

    // Net
    let mut y = top + NET_SPACING_PX as i32;
    while y < bottom {
        let mut x = left + NET_SPACING_PX as i32;
        while x < right {
            canvas.plot(x, y);
            x += NET_SPACING_PX as i32;
        }
        y += NET_SPACING_PX as i32;
    }

    let (spot_x, spot_y) = penalty_spot();
    let (sx, sy) = scene.to_pixel(spot_x, spot_y);
    canvas.draw_line((sx - 1, sy + 2), (sx + 1, sy + 2));
}

/// Keeper stands in the middle, or is part-way through the dive of the
/// current kick
fn keeper_position(shootout: &Shootout) -> (f32, f32) {
    match shootout.kick() {
        Some(kick) => {
            let t = match shootout.current_beat() {
                Some(Beat::Flight) => shootout.beat_progress(),
                _ => 1.0,
            };
            let dive = &kick.dive;
            (
                dive.start_x + (dive.target_x - dive.start_x) * t,
                dive.start_y + (dive.target_y - dive.start_y) * t,
            )
        }
        None => shootout.goal().to_scene(&AimVector::CENTER),
    }
}

fn draw_keeper(canvas: &mut BrailleCanvas, shootout: &Shootout, scene: &SceneScale) {
    let (x, y) = keeper_position(shootout);
    let (px, py) = scene.to_pixel(x, y);
    let w = scene.width(KEEPER_WIDTH);
    let h = scene.height(KEEPER_HEIGHT);

    for dy in 0..h {
        for dx in 0..w {
            canvas.plot(px - w / 2 + dx, py - h / 2 + dy);
        }
    }
}

fn draw_aim_marker(canvas: &mut BrailleCanvas, shootout: &Shootout, scene: &SceneScale) {
    let (x, y) = shootout.goal().to_scene(shootout.aim());
    let (px, py) = scene.to_pixel(x, y);
    canvas.draw_line((px - 3, py), (px + 3, py));
    canvas.draw_line((px, py - 3), (px, py + 3));
}

fn draw_hint(canvas: &mut BrailleCanvas, shootout: &Shootout, target: &AimVector, scene: &SceneScale) {
    let (x, y) = shootout.goal().to_scene(target);
    let (px, py) = scene.to_pixel(x, y);
    canvas.draw_line((px - 2, py - 2), (px + 2, py + 2));
    canvas.draw_line((px - 2, py + 2), (px + 2, py - 2));
}

fn draw_ball(canvas: &mut BrailleCanvas, shootout: &Shootout, scene: &SceneScale) {
    let (x, y) = match shootout.kick() {
        Some(kick) => (kick.flight.x, kick.flight.y),
        None => penalty_spot(),
    };
    let (px, py) = scene.to_pixel(x, y);
    canvas.fill_circle(px, py, scene.width(BALL_RADIUS));
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect) {
    // One line per cell row, split into spans wherever the pen colour changes
    for y in 0..canvas.cell_height() {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color = canvas.color_at(0, y);

        for x in 0..canvas.cell_width() {
            let color = canvas.color_at(x, y);
            if color != run_color && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), Style::default().fg(run_color)));
            }
            run_color = color;
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_color)));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn text_row(frame: &mut Frame, area: Rect, row: u16, text: Line, alignment: Alignment) {
    if row >= area.height {
        return;
    }
    let row_area = Rect {
        x: area.x,
        y: area.y + row,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(text).alignment(alignment), row_area);
}

/// "YOUR KICK" / "IN GOAL" with round and sudden death marker
fn phase_label(shootout: &Shootout) -> String {
    let state = shootout.match_state();
    let role = match state.phase {
        Phase::Shoot => "YOUR KICK",
        Phase::Save => "IN GOAL",
    };
    let mut label = format!("{}  ·  Round {}", role, state.round());
    if state.sudden_death {
        label.push_str("  ·  SUDDEN DEATH");
    }
    label
}

fn draw_header_text(frame: &mut Frame, shootout: &Shootout, view: &SceneView, area: Rect) {
    let state = shootout.match_state();

    text_row(
        frame,
        area,
        0,
        Line::from(Span::styled(
            view.title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Alignment::Center,
    );

    text_row(
        frame,
        area,
        1,
        Line::from(Span::styled(
            format!("YOU  vs  {}", shootout.shooter().name().to_uppercase()),
            Style::default().fg(Color::Gray),
        )),
        Alignment::Center,
    );

    if shootout.status() == SessionStatus::Playing {
        text_row(
            frame,
            area,
            2,
            Line::from(Span::styled(phase_label(shootout), Style::default().fg(Color::Yellow))),
            Alignment::Center,
        );
    }

    text_row(
        frame,
        area,
        3,
        Line::from(Span::styled(
            format!(
                "Kicks left  {} : {}",
                state.penalties_left.player, state.penalties_left.opponent
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Alignment::Center,
    );

    if let Some(status) = view.status {
        text_row(
            frame,
            area,
            4,
            Line::from(Span::styled(status.to_string(), Style::default().fg(Color::White))),
            Alignment::Center,
        );
    }
}

fn draw_ai_weights(frame: &mut Frame, shootout: &Shootout, area: Rect) {
    let Some(w) = shootout.shooter().weights() else {
        return;
    };
    let text = format!(
        "corner {:.2}  height {:.2}  pattern {:.2}  random {:.2}",
        w.corner_preference, w.height_variation, w.pattern_recognition, w.random_factor
    );
    text_row(
        frame,
        area,
        4,
        Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))),
        Alignment::Right,
    );
}

/// Text shown while the result beat plays
fn result_text(kicker: Side, scored: bool) -> (&'static str, Color) {
    match (kicker, scored) {
        (Side::Player, true) => ("GOAL!", Color::LightGreen),
        (Side::Player, false) => ("SAVED!", Color::LightRed),
        (Side::Opponent, true) => ("THEY SCORE", Color::LightRed),
        (Side::Opponent, false) => ("GREAT SAVE!", Color::LightGreen),
    }
}

fn draw_result_banner(frame: &mut Frame, shootout: &Shootout, area: Rect, scene_rows: u16) {
    let Some(kick) = shootout.kick() else {
        return;
    };
    if shootout.current_beat() != Some(Beat::ShowResult) {
        return;
    }
    let (text, color) = result_text(kick.kicker, kick.scored);
    // Between the goal and the penalty spot
    let row = UI_HEADER_ROWS + scene_rows * 3 / 5;
    text_row(
        frame,
        area,
        row,
        Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Alignment::Center,
    );
}

fn power_bar(power: f32) -> String {
    let filled = ((power / MAX_POWER) * POWER_BAR_CELLS as f32).round() as usize;
    let filled = filled.min(POWER_BAR_CELLS);
    format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(POWER_BAR_CELLS - filled),
        power.round() as u32
    )
}

fn draw_footer(frame: &mut Frame, shootout: &Shootout, view: &SceneView, area: Rect) {
    let power_row = area.height.saturating_sub(2);
    let controls_row = area.height.saturating_sub(1);

    let charge = shootout.charge();
    let label = match shootout.match_state().phase {
        Phase::Shoot => "Power ",
        Phase::Save => "Dive  ",
    };
    let bar_color = if charge.is_charging { Color::Yellow } else { Color::DarkGray };

    let mut spans = vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(power_bar(charge.power), Style::default().fg(bar_color)),
    ];
    if shootout.is_boosting() {
        spans.push(Span::styled("  BOOST", Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)));
    }
    if let Some(remaining) = shootout.countdown_remaining() {
        let secs = remaining.as_secs_f32().ceil() as u32;
        let color = if secs <= 3 { Color::LightRed } else { Color::Gray };
        spans.push(Span::styled(format!("   {}s", secs), Style::default().fg(color)));
    }
    text_row(frame, area, power_row, Line::from(spans), Alignment::Center);

    text_row(
        frame,
        area,
        controls_row,
        Line::from(Span::styled(view.controls.to_string(), Style::default().fg(Color::DarkGray))),
        Alignment::Center,
    );
}
