// Overlay message system for displaying centered text on screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{MatchStatistics, Side};

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayMessage {
    /// Lines of text to display
    pub lines: Vec<String>,
    /// Optional title for the overlay box
    pub title: Option<String>,
    /// Style preset for the overlay
    pub style: OverlayStyle,
}

/// Predefined styles for overlay messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Informational message (white/gray)
    Info,
    /// Bad news for the human (yellow)
    Warning,
    /// Good news for the human (green)
    Success,
}

impl OverlayMessage {
    /// Create an info-style message
    pub fn info(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Info,
        }
    }

    /// Create a warning-style message
    pub fn warning(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Warning,
        }
    }

    /// Create a success-style message
    pub fn success(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Success,
        }
    }

    /// Set the title for this message
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn paused(resume_key: &str) -> Self {
        Self::info(vec![
            "PAUSED".to_string(),
            String::new(),
            format!("{} to resume", resume_key),
        ])
        .with_title("Pause")
    }

    /// Full-time summary: result, score and the match statistics
    pub fn match_over(winner: Side, player: u32, opponent: u32, stats: &MatchStatistics, footer: &str) -> Self {
        let mut lines = vec![
            match winner {
                Side::Player => "YOU WIN!".to_string(),
                Side::Opponent => "YOU LOSE".to_string(),
            },
            format!("{} - {}", player, opponent),
            String::new(),
        ];
        lines.extend(
            stats
                .summary()
                .into_iter()
                .map(|(label, value)| format!("{:<18}{:>6}", label, value)),
        );
        lines.push(String::new());
        lines.push(footer.to_string());

        let message = match winner {
            Side::Player => Self::success(lines),
            Side::Opponent => Self::warning(lines),
        };
        message.with_title("Full Time")
    }

    /// Get the color for the border and title based on style
    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::Cyan,
            OverlayStyle::Warning => Color::Yellow,
            OverlayStyle::Success => Color::Green,
        }
    }

    /// Get the color for the message text based on style
    fn text_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::White,
            OverlayStyle::Warning => Color::Yellow,
            OverlayStyle::Success => Color::LightGreen,
        }
    }
}

/// Render an overlay message in the center of the screen
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    // Calculate overlay dimensions based on content
    let max_line_length = message
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    // Add padding for borders and spacing
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(4));
    let overlay_height = (message.lines.len() as u16 + 4).min(area.height.saturating_sub(4));
    if overlay_width < 3 || overlay_height < 3 {
        return;
    }

    // Center the overlay
    let overlay_area = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    // Create the border block
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(format!(" {} ", title));
    }

    frame.render_widget(block, overlay_area);

    // Render the message text inside the block
    let inner_area = overlay_area.inner(ratatui::layout::Margin::new(2, 1));

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            // First line is the headline
            let mut style = Style::default().fg(message.text_color());
            if i == 0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(line.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_match_over_styles_by_winner() {
        let stats = MatchStatistics::default();
        let win = OverlayMessage::match_over(Side::Player, 4, 2, &stats, "R to Rematch");
        let loss = OverlayMessage::match_over(Side::Opponent, 2, 4, &stats, "R to Rematch");

        assert_eq!(win.style, OverlayStyle::Success);
        assert_eq!(loss.style, OverlayStyle::Warning);
        assert_eq!(win.lines[0], "YOU WIN!");
        assert_eq!(win.lines[1], "4 - 2");
        assert_eq!(win.lines.last().map(String::as_str), Some("R to Rematch"));
    }

    #[test]
    fn test_overlay_on_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(5, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let message = OverlayMessage::paused("P");
        terminal
            .draw(|f| render_overlay(f, &message, f.area()))
            .unwrap();
    }
}
