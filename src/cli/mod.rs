//! Flag-driven, non-interactive mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

/// Parse `args`, generate, and report any error once.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match CliFlags::try_parse_from(&args) {
        Ok(flags) => flags,
        Err(e) => {
            // Help and version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    match Context::new(flags).and_then(|mut ctx| ctx.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
