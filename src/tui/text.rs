use crate::entropy;
use crate::pass::{CharacterClass, charset};
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{
    BOLD, INNER_WIDTH, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    clear, flush, print_error, print_notice, print_rule, print_success,
};

use super::Status;

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

/// Split a password into rows that fit inside a box.
fn password_rows(password: &str, width: usize) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut rest = password;
    while !rest.is_empty() {
        let cut = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
        let (row, tail) = rest.split_at(cut);
        rows.push(row);
        rest = tail;
    }
    rows
}

pub fn print_main_menu(settings: &Settings, password: Option<&str>, status: &Status) {
    clear();

    box_top("Password");
    box_line("");
    match password.map(|p| password_rows(p, INNER_WIDTH)) {
        Some(rows) if rows.len() == 1 => box_line_center(&format!("{BOLD}{}{RESET}", rows[0])),
        Some(rows) if !rows.is_empty() => {
            for row in rows {
                box_line(&format!("{BOLD}{row}{RESET}"));
            }
        }
        _ => box_line_center("(none yet)"),
    }
    box_line("");
    box_bottom();
    println!();

    box_top("Options");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");
    box_line(&format!("{UNDERLINE}Length{RESET}:"));
    box_line(&format!(
        "  1) Password Length: {} ({}-{})",
        settings.length, MIN_LENGTH, MAX_LENGTH
    ));
    box_line("");
    box_line(&format!("{UNDERLINE}Character Types{RESET}:"));
    for (i, class) in CharacterClass::ALL.iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            i + 2,
            checkbox(settings.classes.contains(*class)),
            class.name()
        ));
    }
    box_line(&format!(
        "     Pool: {} characters",
        charset::size(settings.classes)
    ));
    box_line("");
    box_line(&format!("{UNDERLINE}Randomness{RESET}:"));
    box_line(&format!("  6) Index sampling: {}", settings.sampling.label()));
    box_line(&format!("     Source: {}", entropy::source_name()));
    box_line("");
    print_rule();
    box_line("  c) copy  |  s) save  |  r) load defaults  |  f) load saved");
    box_line("  h) help  |  q) quit");
    box_bottom();

    match status {
        Status::None => println!(),
        Status::Notice(msg) => print_notice(msg),
        Status::Success(msg) => print_success(msg),
        Status::Error(msg) => print_error(msg),
    }
    flush();
}

pub fn print_help() {
    clear();
    box_top("Classpass");
    box_line_center("Password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Pick a length and character");
    box_line("     types, press Enter to generate, 'c' to copy.");
    box_line("  2) Client: Pass flags (e.g., -l 20 -n 5) to print passwords");
    box_line("     without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  classpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt(
        "      --lower --upper",
        "Use only the named character types. Combine freely.",
    );
    box_opt("      --digits --symbols", "");
    box_opt("      --no-<type>", "Leave one character type out");
    box_opt(
        "      --modulo",
        "Plain modulo index reduction (slightly biased; default is exact)",
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress notices; print passwords only");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings (saved from the menu)");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display help");
    box_opt("  -V, --version", "Display version");
    box_line("");
    box_line("With no character type selected, lowercase is used.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  classpass -l 12                12 characters, all types");
    box_line("  classpass -l 8 --lower         8 lowercase letters");
    box_line("  classpass -n 3 --no-symbols    Three alphanumeric passwords");
    box_line("  classpass -b                   One password to the clipboard");
    box_line("");
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MAX_LENGTH;

    #[test]
    fn short_password_is_one_row() {
        assert_eq!(password_rows("abc", INNER_WIDTH), vec!["abc"]);
        assert!(password_rows("", INNER_WIDTH).is_empty());
    }

    #[test]
    fn longest_password_wraps_inside_the_box() {
        let password = "x".repeat(MAX_LENGTH);
        let rows = password_rows(&password, INNER_WIDTH);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), INNER_WIDTH);
        assert_eq!(rows[1].len(), MAX_LENGTH - INNER_WIDTH);
        assert_eq!(rows.concat(), password);
    }
}
