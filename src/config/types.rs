// Spotkick configuration types
// All settings with defaults matching the built-in tuning

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ai::OpponentKind;
use crate::game::Difficulty;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub gameplay: GameplayConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Aim controls (shooter and keeper share them)
    pub aim_left: String,
    pub aim_right: String,
    pub aim_up: String,
    pub aim_down: String,

    // Press once to start charging, again to kick/dive
    pub kick: String,
    // Toggle the faster charge rate
    pub boost: String,

    // Game controls
    pub rematch: String,
    pub quit: String,
    pub pause: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            aim_left: "A".to_string(),
            aim_right: "D".to_string(),
            aim_up: "W".to_string(),
            aim_down: "S".to_string(),
            kick: "Space".to_string(),
            boost: "B".to_string(),
            rematch: "R".to_string(),
            quit: "Q".to_string(),
            pause: "P".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayConfig {
    // "easy", "normal" or "hard"
    pub difficulty: Difficulty,

    // Regulation kicks per side before sudden death
    pub penalties_per_side: u32,

    // Seconds to act before the kick or dive fires by itself
    pub countdown_secs: u64,

    // Power gained per second while charging (full bar = 100)
    pub charge_rate: f32,
    pub boost_charge_rate: f32,

    // Aim movement per key press (x spans 2.0, y spans 1.0)
    pub aim_step: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            penalties_per_side: 5,
            countdown_secs: 10,
            charge_rate: 48.0,
            boost_charge_rate: 90.0,
            aim_step: 0.1,
        }
    }
}

impl GameplayConfig {
    pub fn countdown(&self) -> Duration {
        Duration::from_secs(self.countdown_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // "adaptive" learns from you, "streaky" shoots at random
    pub opponent: OpponentKind,

    // Step size for weight updates (0.0 = never adapts)
    pub learning_rate: f32,

    // Remember what the opponent learned between sessions
    pub persist: bool,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            opponent: OpponentKind::Adaptive,
            learning_rate: 0.05,
            persist: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    // Ball flight animation before the result shows
    pub flight_ms: u64,

    // How long the GOAL!/SAVED! banner stays up
    pub result_ms: u64,

    // Pause on the final score before the summary
    pub final_whistle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            flight_ms: 1000,
            result_ms: 2000,
            final_whistle_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn flight(&self) -> Duration {
        Duration::from_millis(self.flight_ms)
    }

    pub fn result(&self) -> Duration {
        Duration::from_millis(self.result_ms)
    }

    pub fn final_whistle(&self) -> Duration {
        Duration::from_millis(self.final_whistle_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Colors (RGB values 0-255)
    pub goal_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub aim_color: [u8; 3],
    pub keeper_color: [u8; 3],
    pub hint_color: [u8; 3],

    // Show the opponent's behavior weights in the corner
    pub show_ai_weights: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            goal_color: [255, 255, 255],   // White
            ball_color: [255, 255, 255],   // White
            aim_color: [255, 215, 0],      // Gold
            keeper_color: [0, 180, 255],   // Blue
            hint_color: [200, 80, 255],    // Purple
            show_ai_weights: false,
        }
    }
}
