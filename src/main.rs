use std::env;
use std::process::ExitCode;

use classpass::{cli, exits, tui};

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    init_logger();
    exits::reset_terminal();
    exits::install_handlers();
    exits::suppress_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if cli::quiet::is_interactive() => tui::run(),
        _ => cli::run(args),
    }
}
