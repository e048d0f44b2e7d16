use crossterm::ExecutableCommand;
use crossterm::cursor::{Hide, Show};
use crossterm::style::ResetColor;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};
use tracing::warn;

use crate::common::error::Result;

/// Raw mode plus alternate screen for the lifetime of the guard.
///
/// Dropping the guard restores the terminal even when the caller bails out
/// with an error.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        Ok(Self { active: true })
    }

    /// Restores the terminal now and reports any failure.
    pub fn leave(mut self) -> Result<()> {
        self.active = false;
        cleanup_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(error) = cleanup_terminal() {
                warn!(%error, "Failed to restore terminal");
            }
        }
    }
}

/// Restores the terminal to its original state after an interactive session.
///
/// Resets colors, shows the cursor, leaves the alternate screen and disables
/// raw mode.
pub fn cleanup_terminal() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(ResetColor)?;
    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    stdout.flush()?;
    Ok(())
}
