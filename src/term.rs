//! Terminal introspection for picking a render size.

use std::io;

use crossterm::tty::IsTty;
use log::debug;

/// Module count used when no usable terminal geometry is available.
pub const DEFAULT_SIZE: usize = 25;

/// Returns true when standard output is attached to an interactive terminal.
pub fn is_interactive() -> bool {
    io::stdout().is_tty()
}

/// Picks a target module count from the terminal's cell geometry.
///
/// Queries the cell width and height once. Each module renders two character
/// cells wide, and a few rows and columns are reserved for the banner and
/// border, so the candidate is `min(width / 2 - 4, height - 6)`. Candidates
/// outside `(10, 50)` fall back to [`DEFAULT_SIZE`], as does a failed query
/// or a non-interactive stdout.
pub fn auto_size() -> usize {
    if !is_interactive() {
        return DEFAULT_SIZE;
    }

    match crossterm::terminal::size() {
        Ok((width, height)) => {
            let candidate = (i32::from(width) / 2 - 4).min(i32::from(height) - 6);
            if candidate > 10 && candidate < 50 {
                debug!("terminal is {}x{} cells, auto size {}", width, height, candidate);
                candidate as usize
            } else {
                debug!("terminal is {}x{} cells, falling back to {}", width, height, DEFAULT_SIZE);
                DEFAULT_SIZE
            }
        }
        Err(_) => DEFAULT_SIZE,
    }
}
