//! Minimal terminal styling, trimmed from the teacher's `styling` module down
//! to the handful of constants the core's error/hint messages use.
//!
//! - **stdout**: primary output (nav target paths, shell-init scripts).
//! - **stderr**: status messages (errors, warnings).

pub use anstream::{eprintln, println};

use anstyle::{AnsiColor, Style};

pub const ERROR: Style = AnsiColor::Red.on_default();
pub const ERROR_BOLD: Style = AnsiColor::Red.on_default().bold();
pub const HINT: Style = AnsiColor::BrightBlack.on_default();

pub const ERROR_EMOJI: &str = "✗";
pub const HINT_EMOJI: &str = "→";
pub const WARNING_EMOJI: &str = "⚠";

/// Format a one-line warning for stderr, matching the teacher's
/// `warning_message` helper (`styling::constants`).
pub fn warning_message(msg: impl std::fmt::Display) -> String {
    use anstyle::AnsiColor;
    let warn = AnsiColor::Yellow.on_default();
    format!("{WARNING_EMOJI} {warn}{msg}{warn:#}")
}
