//! Entering and leaving TUI mode.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and hide the cursor.
///
/// # Errors
///
/// Returns an error if any terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal from any state, ignoring errors.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_tui_mode_writes_alternate_screen() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049h"));
    }

    #[test]
    fn test_leave_tui_mode_writes_restore_sequences() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn test_emergency_restore_does_not_panic() {
        emergency_restore();
    }
}
