use anyhow::{bail, Context};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{info, warn};

use spotkick::config::{load_config, Config};
use spotkick::game_modes::{common::reset_opponent_memory, run_quick_match, run_tournament, MatchSetup};
use spotkick::menu::{handle_menu_input, render_menu, AppState, GameMode, MenuAction, MenuState};

/// Command line options
#[derive(Debug, Default)]
struct Args {
    debug: bool,
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let Some(options) = parse_args(&args)? else {
        print_usage(args.first().map(String::as_str).unwrap_or("spotkick"));
        return Ok(());
    };

    // Runs before the TUI so file logging covers the whole session
    spotkick::logging::init(options.debug).context("could not start debug logging")?;
    info!("Spotkick starting");

    let config = match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to default config: {}", e);
            Config::default()
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, options.seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Spotkick exiting");
    result.context("game loop failed")
}

/// Parse command line arguments, `None` means usage was requested
fn parse_args(args: &[String]) -> anyhow::Result<Option<Args>> {
    let mut options = Args::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--seed" | "-s" => {
                let Some(value) = rest.next() else {
                    bail!("--seed requires a number");
                };
                let seed = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(Some(options))
}

fn print_usage(program: &str) {
    println!("Spotkick - Terminal Penalty Shootouts");
    println!();
    println!("Usage:");
    println!("  {}                  # Open the main menu", program);
    println!("  {} --seed <n>       # Replay the same kicks and draws", program);
    println!("  {} --debug          # Log to {}", program, spotkick::logging::LOG_FILE_PATH);
    println!();
    println!("Config is read from {}", spotkick::config::get_config_path().display());
}

/// Menu loop, dispatching into game modes until the player quits
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    seed: Option<u64>,
) -> Result<(), io::Error> {
    let mut menu_state = MenuState::new(config.gameplay.difficulty, config.ai.opponent);
    let mut app_state = AppState::Menu;

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| render_menu(f, &menu_state))?;

                app_state = match handle_menu_input(&mut menu_state, &config.keybindings)? {
                    MenuAction::None => AppState::Menu,
                    MenuAction::StartGame(mode) => AppState::Game(mode),
                    MenuAction::ResetMemory => {
                        reset_opponent_memory(config);
                        menu_state.notice = Some("Opponent memory cleared".to_string());
                        AppState::Menu
                    }
                    MenuAction::Quit => AppState::Exiting,
                };
            }
            AppState::Game(mode) => {
                let setup = MatchSetup {
                    difficulty: menu_state.difficulty,
                    opponent: menu_state.opponent,
                    ..MatchSetup::from_config(config, seed)
                };
                match mode {
                    GameMode::QuickMatch => run_quick_match(terminal, config, &setup)?,
                    GameMode::Tournament => run_tournament(terminal, config, &setup)?,
                }
                app_state = AppState::Menu;
            }
            AppState::Exiting => return Ok(()),
        }
    }
}
