// Main menu: navigation, difficulty and opponent choice, game mode selection

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, MenuAction};
pub use render::render_menu;
pub use state::{AppState, GameMode, MenuItem, MenuState};
