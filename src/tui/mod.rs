//! Interactive TUI menu.

mod input;
mod options;
mod text;

use std::process::ExitCode;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() -> ExitCode {
    gen_main_menu();
    ExitCode::SUCCESS
}
