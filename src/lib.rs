// Spotkick - terminal penalty shootouts against a learning opponent

use std::time::Duration;

pub mod ai;
pub mod config;
pub mod game;
pub mod game_modes;
pub mod logging;
pub mod menu;
pub mod tournament;
pub mod ui;

pub const TARGET_FPS: u64 = 60;
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS);
