// Debug logging for Spotkick
// File-based tracing output, enabled via the --debug flag

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::Level;

/// The TUI owns the terminal, so log lines go to a file instead
pub const LOG_FILE_PATH: &str = "/tmp/spotkick-debug.log";

/// Install the global tracing subscriber
///
/// # Behavior
/// - If enabled=false: nothing is installed and every `tracing` macro is a no-op
/// - If enabled=true: truncates the log file, writes a header and routes
///   DEBUG and above into it
pub fn init(enabled: bool) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE_PATH)?;

    writeln!(file, "=== Spotkick Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", LOG_FILE_PATH)?;
    writeln!(file, "========================================\n")?;

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
