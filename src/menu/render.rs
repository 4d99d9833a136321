// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ai::OpponentKind;

use super::state::MenuState;

const TITLE: [&str; 6] = [
    "███████╗██████╗  ██████╗ ████████╗██╗  ██╗██╗ ██████╗██╗  ██╗",
    "██╔════╝██╔══██╗██╔═══██╗╚══██╔══╝██║ ██╔╝██║██╔════╝██║ ██╔╝",
    "███████╗██████╔╝██║   ██║   ██║   █████╔╝ ██║██║     █████╔╝ ",
    "╚════██║██╔═══╝ ██║   ██║   ██║   ██╔═██╗ ██║██║     ██╔═██╗ ",
    "███████║██║     ╚██████╔╝   ██║   ██║  ██╗██║╚██████╗██║  ██╗",
    "╚══════╝╚═╝      ╚═════╝    ╚═╝   ╚═╝  ╚═╝╚═╝ ╚═════╝╚═╝  ╚═╝",
];

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    // Draw background
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Title area
            Constraint::Min(8),     // Menu items
            Constraint::Length(2),  // Description and notice
            Constraint::Length(2),  // Controls hint
        ])
        .split(area);

    // Draw ASCII art title
    let title_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let mut title_text = vec![Line::from("")];
    title_text.extend(TITLE.iter().map(|row| Line::from(Span::styled(*row, title_style))));
    title_text.push(Line::from(Span::styled(
        "penalty shootouts against an opponent that learns",
        Style::default().fg(Color::DarkGray),
    )));

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Draw menu items
    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "  > " } else { "    " };
            let text = format!("{}{}", prefix, menu_state.item_label(*item));

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let mut info = vec![Line::from(Span::styled(
        menu_state.selected_description().unwrap_or_default().to_string(),
        Style::default().fg(Color::Gray),
    ))];
    if let Some(notice) = &menu_state.notice {
        info.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    frame.render_widget(Paragraph::new(info).alignment(Alignment::Center), chunks[2]);

    // Draw controls hint
    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("←/→", Style::default().fg(Color::Gray)),
        Span::styled(": Difficulty  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[3]);

    if menu_state.in_opponent_selection {
        render_opponent_dialog(frame, menu_state.opponent_index);
    }
}

/// Render the opponent picker over the menu
fn render_opponent_dialog(frame: &mut Frame, highlighted: usize) {
    let area = frame.area();
    let kinds = OpponentKind::all();

    let dialog_width = 64.min(area.width.saturating_sub(4));
    let dialog_height = (kinds.len() as u16 * 2 + 4).min(area.height);
    let dialog_area = Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Choose Opponent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    frame.render_widget(block, dialog_area);

    let inner = dialog_area.inner(ratatui::layout::Margin::new(2, 1));
    let dialog_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = Vec::new();
    for (i, kind) in kinds.iter().enumerate() {
        let selected = i == highlighted;
        let marker = if selected { "> " } else { "  " };
        let name_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, kind.display_name()), name_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", kind.description()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), dialog_chunks[0]);

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), dialog_chunks[1]);
}
