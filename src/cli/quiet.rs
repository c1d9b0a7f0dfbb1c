//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppress notices and prompts).
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if both stdin and stdout are ttys.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 }
}

/// True when quiet mode is on or nobody is there to answer a prompt.
pub fn skip_prompt() -> bool {
    enabled() || unsafe { libc::isatty(0) != 1 }
}
