//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print a notice in yellow.
pub fn print_notice(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

/// Print a success message in green.
pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Usable width between `│ ` and ` │`.
pub const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    println!("{}", padded_line(content));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap_words(desc, desc_col);

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

fn padded_line(content: &str) -> String {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let padding = INNER_WIDTH - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_codes_have_no_width() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(console_width("[x] ✓"), 5);
    }

    #[test]
    fn lines_pad_to_box_width() {
        let line = padded_line(&format!("{UNDERLINE}Options{RESET}:"));
        assert_eq!(console_width(&line), BOX_WIDTH);
        assert!(line.starts_with("│ ") && line.ends_with(" │"));
    }

    #[test]
    fn wrap_keeps_words_whole() {
        let lines = wrap_words("copy the generated password to the clipboard", 16);
        assert_eq!(lines, vec!["copy the", "generated", "password to the", "clipboard"]);
        assert!(wrap_words("   ", 10).is_empty());
    }
}
