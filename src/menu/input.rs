// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;
use crate::game::matches_binding;

use super::state::{GameMode, MenuItem, MenuState};

/// Menu action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a game mode
    StartGame(GameMode),
    /// Wipe the adaptive opponent's learned weights
    ResetMemory,
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action
pub fn handle_menu_input(menu_state: &mut MenuState, bindings: &KeyBindings) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, bindings, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

fn is_up(code: KeyCode, bindings: &KeyBindings) -> bool {
    matches_binding(code, &bindings.menu_up) || matches!(code, KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K'))
}

fn is_down(code: KeyCode, bindings: &KeyBindings) -> bool {
    matches_binding(code, &bindings.menu_down) || matches!(code, KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J'))
}

fn is_select(code: KeyCode, bindings: &KeyBindings) -> bool {
    matches_binding(code, &bindings.menu_select) || matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

fn is_back(code: KeyCode, bindings: &KeyBindings) -> bool {
    matches_binding(code, &bindings.menu_back) || code == KeyCode::Esc
}

fn handle_key_press(menu_state: &mut MenuState, bindings: &KeyBindings, key_code: KeyCode) -> MenuAction {
    // If in opponent selection mode, handle that first
    if menu_state.in_opponent_selection {
        return handle_opponent_selection_input(menu_state, bindings, key_code);
    }

    // Any key press dismisses the last notice
    menu_state.notice = None;

    if is_up(key_code, bindings) {
        menu_state.select_previous();
        return MenuAction::None;
    }
    if is_down(key_code, bindings) {
        menu_state.select_next();
        return MenuAction::None;
    }
    if is_select(key_code, bindings) {
        return handle_menu_selection(menu_state);
    }
    if matches!(key_code, KeyCode::Left | KeyCode::Right) && menu_state.selected_item() == MenuItem::Difficulty {
        menu_state.cycle_difficulty();
        return MenuAction::None;
    }
    if is_back(key_code, bindings) || matches_binding(key_code, &bindings.quit) || matches!(key_code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return MenuAction::Quit;
    }
    MenuAction::None
}

fn handle_menu_selection(menu_state: &mut MenuState) -> MenuAction {
    match menu_state.selected_item() {
        MenuItem::QuickMatch => MenuAction::StartGame(GameMode::QuickMatch),
        MenuItem::Tournament => MenuAction::StartGame(GameMode::Tournament),
        MenuItem::Difficulty => {
            menu_state.cycle_difficulty();
            MenuAction::None
        }
        MenuItem::Opponent => {
            menu_state.start_opponent_selection();
            MenuAction::None
        }
        MenuItem::ResetMemory => MenuAction::ResetMemory,
        MenuItem::Quit => MenuAction::Quit,
    }
}

fn handle_opponent_selection_input(menu_state: &mut MenuState, bindings: &KeyBindings, key_code: KeyCode) -> MenuAction {
    if is_up(key_code, bindings) {
        menu_state.select_previous_opponent();
    } else if is_down(key_code, bindings) {
        menu_state.select_next_opponent();
    } else if is_select(key_code, bindings) {
        let kind = menu_state.submit_opponent_selection();
        menu_state.notice = Some(format!("Opponent set to {}", kind.display_name()));
    } else if is_back(key_code, bindings) {
        menu_state.cancel_opponent_selection();
    }
    MenuAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::OpponentKind;
    use crate::game::Difficulty;

    fn press(menu: &mut MenuState, code: KeyCode) -> MenuAction {
        handle_key_press(menu, &KeyBindings::default(), code)
    }

    #[test]
    fn test_start_modes() {
        let mut menu = MenuState::default();
        assert_eq!(press(&mut menu, KeyCode::Enter), MenuAction::StartGame(GameMode::QuickMatch));

        press(&mut menu, KeyCode::Down);
        assert_eq!(press(&mut menu, KeyCode::Enter), MenuAction::StartGame(GameMode::Tournament));
    }

    #[test]
    fn test_difficulty_cycles_in_place() {
        let mut menu = MenuState::new(Difficulty::Easy, OpponentKind::Adaptive);
        menu.selected_index = 2;
        assert_eq!(press(&mut menu, KeyCode::Enter), MenuAction::None);
        assert_eq!(menu.difficulty, Difficulty::Normal);
        press(&mut menu, KeyCode::Right);
        assert_eq!(menu.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_opponent_picker() {
        let mut menu = MenuState::default();
        menu.selected_index = 3;
        press(&mut menu, KeyCode::Enter);
        assert!(menu.in_opponent_selection);

        // Esc closes the picker, it does not quit
        assert_eq!(press(&mut menu, KeyCode::Esc), MenuAction::None);
        assert!(!menu.in_opponent_selection);

        press(&mut menu, KeyCode::Enter);
        press(&mut menu, KeyCode::Down);
        press(&mut menu, KeyCode::Enter);
        assert_eq!(menu.opponent, OpponentKind::Streaky);
        assert!(menu.notice.is_some());
    }

    #[test]
    fn test_reset_and_quit() {
        let mut menu = MenuState::default();
        menu.selected_index = 4;
        assert_eq!(press(&mut menu, KeyCode::Enter), MenuAction::ResetMemory);
        assert_eq!(press(&mut menu, KeyCode::Char('Q')), MenuAction::Quit);
        assert_eq!(press(&mut menu, KeyCode::Esc), MenuAction::Quit);
    }
}
