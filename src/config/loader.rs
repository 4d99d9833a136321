// Config file: read it, or write the defaults on first run

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HEADER: &str = "\
# Spotkick Configuration File
# Edit this file to customize game behavior
# After editing, restart the game for changes to take effect
#
# Key binding format: Use \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\"
#                     or single characters like \"W\", \"S\", \"Q\", etc.
#
# Colors: RGB values from 0-255
#
# Difficulties: \"easy\", \"normal\", \"hard\"
# Opponents: \"adaptive\", \"streaky\"

";

/// `<config_dir>/spotkick/config.toml`, or `./spotkick/config.toml` without a config dir
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spotkick")
        .join("config.toml")
}

/// Load the config at `path`, or at [`get_config_path`] when `None`
///
/// A missing file is written out with the defaults. A file that does not
/// parse is left alone and the defaults are used for this run.
pub fn load_config(path: Option<&Path>) -> Result<Config, io::Error> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    match fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents).unwrap_or_else(|e| {
            warn!("Ignoring unreadable config {}: {}", path.display(), e);
            Config::default()
        })),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            write_default_config(&path)?;
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn write_default_config(path: &Path) -> Result<(), io::Error> {
    let body = toml::to_string_pretty(&Config::default())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}{}", HEADER, body))?;
    info!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::OpponentKind;
    use crate::game::Difficulty;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Parsed values must match the original defaults
        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.gameplay.charge_rate, config.gameplay.charge_rate);
        assert_eq!(parsed.gameplay.difficulty, config.gameplay.difficulty);
        assert_eq!(parsed.keybindings.kick, config.keybindings.kick);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.ai.opponent, config.ai.opponent);
        assert_eq!(parsed.timing.flight_ms, config.timing.flight_ms);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let partial_toml = r#"
            [gameplay]
            difficulty = "hard"
            penalties_per_side = 3

            [ai]
            opponent = "streaky"
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        // Custom values
        assert_eq!(config.gameplay.difficulty, Difficulty::Hard);
        assert_eq!(config.gameplay.penalties_per_side, 3);
        assert_eq!(config.ai.opponent, OpponentKind::Streaky);

        // Default values should still be there
        assert_eq!(config.gameplay.countdown_secs, 10);
        assert_eq!(config.ai.learning_rate, 0.05);
        assert_eq!(config.keybindings.aim_left, "A");
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotkick").join("config.toml");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.gameplay.penalties_per_side, 5);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Spotkick Configuration File"));
        let reparsed: Config = toml::from_str(&written).unwrap();
        assert_eq!(reparsed.timing.result_ms, 2000);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[gameplay\ndifficulty = ").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.gameplay.difficulty, Difficulty::Normal);
        // The broken file is not overwritten
        assert_eq!(fs::read_to_string(&path).unwrap(), "[gameplay\ndifficulty = ");
    }

    #[test]
    fn test_default_location() {
        let path = get_config_path();
        assert!(path.ends_with("spotkick/config.toml"));
    }
}
