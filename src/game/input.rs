use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputAction {
    Quit,
    Rematch,
    Pause,
    AimLeft,
    AimRight,
    AimUp,
    AimDown,
    /// First press starts the charge, second press kicks/dives
    Kick,
    ToggleBoost,
}

/// Parse a key name from the config file ("Space", "Up", "W", ...)
pub fn parse_key(name: &str) -> Option<KeyCode> {
    match name.trim() {
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "Enter" => Some(KeyCode::Enter),
        "Esc" => Some(KeyCode::Esc),
        "Space" => Some(KeyCode::Char(' ')),
        "Tab" => Some(KeyCode::Tab),
        "Backspace" => Some(KeyCode::Backspace),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

/// Compare a pressed key against a configured binding, ignoring case
pub fn matches_binding(code: KeyCode, binding: &str) -> bool {
    let normalized = match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    parse_key(binding) == Some(normalized)
}

/// Map a single key press to a game action
pub fn map_key(code: KeyCode, bindings: &KeyBindings) -> Option<InputAction> {
    let table = [
        (&bindings.quit, InputAction::Quit),
        (&bindings.rematch, InputAction::Rematch),
        (&bindings.pause, InputAction::Pause),
        (&bindings.aim_left, InputAction::AimLeft),
        (&bindings.aim_right, InputAction::AimRight),
        (&bindings.aim_up, InputAction::AimUp),
        (&bindings.aim_down, InputAction::AimDown),
        (&bindings.kick, InputAction::Kick),
        (&bindings.boost, InputAction::ToggleBoost),
    ];

    if let Some((_, action)) = table.iter().find(|(binding, _)| matches_binding(code, binding)) {
        return Some(*action);
    }

    // Arrow keys always aim, Esc always leaves
    match code {
        KeyCode::Left => Some(InputAction::AimLeft),
        KeyCode::Right => Some(InputAction::AimRight),
        KeyCode::Up => Some(InputAction::AimUp),
        KeyCode::Down => Some(InputAction::AimDown),
        KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Poll for input events and return actions.
/// Each Press event generates an immediate action - no state tracking needed.
pub fn poll_input(bindings: &KeyBindings) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    // Process all pending Press events
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(action) = map_key(key.code, bindings) {
                    actions.push(action);
                }
            }
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("W"), Some(KeyCode::Char('w')));
        assert_eq!(parse_key("Up"), Some(KeyCode::Up));
        assert_eq!(parse_key("Nope"), None);
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(map_key(KeyCode::Char(' '), &bindings), Some(InputAction::Kick));
        assert_eq!(map_key(KeyCode::Char('A'), &bindings), Some(InputAction::AimLeft));
        assert_eq!(map_key(KeyCode::Char('b'), &bindings), Some(InputAction::ToggleBoost));
        assert_eq!(map_key(KeyCode::Left, &bindings), Some(InputAction::AimLeft));
        assert_eq!(map_key(KeyCode::Char('z'), &bindings), None);
    }

    #[test]
    fn test_rebound_kick_key() {
        let bindings = KeyBindings {
            kick: "K".to_string(),
            ..KeyBindings::default()
        };
        assert_eq!(map_key(KeyCode::Char('k'), &bindings), Some(InputAction::Kick));
        assert_eq!(map_key(KeyCode::Char(' '), &bindings), None);
    }
}
