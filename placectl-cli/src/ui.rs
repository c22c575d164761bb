//! Terminal helpers for the placectl CLI
//!
//! # Quiet Mode
//!
//! Screen clearing and pause prompts are suppressed when:
//! - `--quiet` flag is passed
//! - `PLACECTL_QUIET=1` environment variable is set
//! - stdout is not a TTY (piped output)
//!
//! This lets scripted input drive the menu without the pause prompt
//! swallowing the next selection.

use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Global quiet mode state
static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize quiet mode from flags and environment.
///
/// Call this once at startup with the --quiet flag value.
pub fn init_quiet_mode(quiet_flag: bool) {
    let is_quiet = quiet_flag
        || std::env::var("PLACECTL_QUIET").map(|v| v == "1").unwrap_or(false)
        || !io::stdout().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

/// Check if we're in quiet mode
pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

/// Clear the screen and home the cursor before redrawing the menu.
pub fn clear_screen() {
    if is_quiet() {
        return;
    }
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)).ok();
}

/// Confirmation pause after a successful operation.
pub fn pause() {
    if is_quiet() {
        return;
    }
    print!("\nSuccess. Press any key to continue...");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
}
