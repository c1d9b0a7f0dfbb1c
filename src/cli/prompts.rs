//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

pub const FALLBACK_NOTICE: &str =
    "Please select at least one character type. Defaulting to lowercase.";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if quiet::enabled() {
        return;
    }
    if count == 1 {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    } else {
        eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard can't be used.
/// In quiet/non-interactive mode, silently falls back to printing.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
