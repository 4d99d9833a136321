// Menu state management and game mode definitions

use crate::ai::OpponentKind;
use crate::game::Difficulty;

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Currently in the main menu
    Menu,
    /// Currently playing a game
    Game(GameMode),
    /// Graceful shutdown
    Exiting,
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One shootout, rematch as often as you like
    QuickMatch,
    /// 32 teams, groups then knockouts
    Tournament,
}

/// Menu items
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    QuickMatch,
    Tournament,
    Difficulty,
    Opponent,
    ResetMemory,
    Quit,
}

impl MenuItem {
    /// Get display text for menu item
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::QuickMatch => "Quick Match",
            MenuItem::Tournament => "Tournament",
            MenuItem::Difficulty => "Difficulty",
            MenuItem::Opponent => "Opponent",
            MenuItem::ResetMemory => "Reset Opponent Memory",
            MenuItem::Quit => "Quit",
        }
    }

    /// Get all menu items in order
    pub fn all() -> Vec<MenuItem> {
        vec![
            MenuItem::QuickMatch,
            MenuItem::Tournament,
            MenuItem::Difficulty,
            MenuItem::Opponent,
            MenuItem::ResetMemory,
            MenuItem::Quit,
        ]
    }
}

/// Menu state
pub struct MenuState {
    /// Currently selected menu item index
    pub selected_index: usize,
    /// All menu items
    pub items: Vec<MenuItem>,
    pub difficulty: Difficulty,
    pub opponent: OpponentKind,
    /// Whether the opponent picker is open
    pub in_opponent_selection: bool,
    /// Highlighted row in the opponent picker
    pub opponent_index: usize,
    /// One-off message under the menu ("Opponent memory cleared")
    pub notice: Option<String>,
}

impl MenuState {
    pub fn new(difficulty: Difficulty, opponent: OpponentKind) -> Self {
        Self {
            selected_index: 0,
            items: MenuItem::all(),
            difficulty,
            opponent,
            in_opponent_selection: false,
            opponent_index: 0,
            notice: None,
        }
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Text for a row, including the current value of settings
    pub fn item_label(&self, item: MenuItem) -> String {
        match item {
            MenuItem::Difficulty => format!("Difficulty: < {} >", self.difficulty.display_name()),
            MenuItem::Opponent => format!("Opponent: {}", self.opponent.display_name()),
            other => other.display_text().to_string(),
        }
    }

    /// Description of whatever the highlighted row controls
    pub fn selected_description(&self) -> Option<&str> {
        match self.selected_item() {
            MenuItem::Difficulty => Some(self.difficulty.description()),
            MenuItem::Opponent => Some(self.opponent.description()),
            MenuItem::ResetMemory => Some("Forget everything the adaptive opponent has learned"),
            _ => None,
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    pub fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
    }

    /// Open the opponent picker on the current opponent
    pub fn start_opponent_selection(&mut self) {
        self.in_opponent_selection = true;
        self.opponent_index = OpponentKind::all()
            .iter()
            .position(|k| *k == self.opponent)
            .unwrap_or(0);
    }

    pub fn cancel_opponent_selection(&mut self) {
        self.in_opponent_selection = false;
    }

    pub fn select_previous_opponent(&mut self) {
        let count = OpponentKind::all().len();
        self.opponent_index = (self.opponent_index + count - 1) % count;
    }

    pub fn select_next_opponent(&mut self) {
        self.opponent_index = (self.opponent_index + 1) % OpponentKind::all().len();
    }

    /// Take the highlighted opponent and close the picker
    pub fn submit_opponent_selection(&mut self) -> OpponentKind {
        if let Some(kind) = OpponentKind::all().get(self.opponent_index) {
            self.opponent = *kind;
        }
        self.in_opponent_selection = false;
        self.opponent
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(Difficulty::default(), OpponentKind::default())
    }
}
