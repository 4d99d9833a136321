use std::io;

use ratatui::Terminal;
use tracing::info;

use crate::config::Config;

use super::common::{build_shootout, play_shootout, AfterMatch, MatchSetup};

/// Run single shootouts against the chosen opponent until the human quits
pub fn run_quick_match<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    setup: &MatchSetup,
) -> Result<(), io::Error> {
    info!(
        "Quick match vs {} on {}",
        setup.opponent.display_name(),
        setup.difficulty.display_name()
    );

    let mut shootout = build_shootout(config, setup);
    shootout.start();

    let title = format!("Quick Match  ·  {}", setup.difficulty.display_name());
    play_shootout(terminal, config, &mut shootout, &title, AfterMatch::Rematch)?;

    let stats = shootout.stats();
    info!(
        "Quick match left: {} goals from {} shots, {} saves",
        stats.goals, stats.shots, stats.saves
    );
    Ok(())
}
