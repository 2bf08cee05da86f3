//! Raw-mode terminal setup with guaranteed restore.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the guard leaves raw mode and the alternate screen, so the
/// terminal is restored on every path out of the session, including a
/// failed setup. Restore errors are logged, never returned.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    pub fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            warn!(%error, "Failed to leave raw mode");
        }
        if let Err(error) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(%error, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail_after_setup(out: &mut Vec<u8>) -> Result<()> {
        let _guard = TerminalGuard { out };
        anyhow::bail!("setup failed");
    }

    #[test]
    fn test_drop_leaves_alternate_screen() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "{:?}", written);
        assert!(written.contains("\x1b[?25h"), "{:?}", written);
    }

    #[test]
    fn test_early_error_still_restores() {
        let mut out = Vec::new();
        let err = fail_after_setup(&mut out).unwrap_err();
        assert_eq!(err.to_string(), "setup failed");
        assert!(String::from_utf8_lossy(&out).contains("\x1b[?1049l"));
    }
}
