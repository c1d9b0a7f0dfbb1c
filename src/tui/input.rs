use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// What a key press did to the line being edited.
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Exit,
}

/// Single-line editor state, independent of the terminal.
#[derive(Debug)]
pub struct LineEditor {
    chars: Vec<char>,
    /// 0-based position the next character is inserted at.
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one key. `accept` filters which characters may be typed.
    pub fn handle(&mut self, key: KeyEvent, accept: fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Exit,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

fn any_char(_: char) -> bool {
    true
}

fn digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// Free-text input. `None` on Esc/Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, any_char)
}

/// Digits-only input, returned as typed so the caller can bounds-check it.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<String> {
    edit_line(prompt, &initial_value.to_string(), digit_char)
}

/// Feed one terminal event to the editor. A failed read ends the program;
/// retrying it would spin.
fn step(editor: &mut LineEditor, event: io::Result<Event>, accept: fn(char) -> bool) -> Edit {
    match event {
        Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => editor.handle(key, accept),
        Ok(_) => Edit::Continue,
        Err(_) => Edit::Exit,
    }
}

fn edit_line(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut editor = LineEditor::new(initial);

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        // No raw mode (not a tty): take the initial value.
        Err(_) => return Some(editor.text()),
    };

    redraw(prompt, &editor);

    let outcome = loop {
        match step(&mut editor, read(), accept) {
            Edit::Continue => redraw(prompt, &editor),
            done => break done,
        }
    };

    drop(guard);
    println!();

    match outcome {
        Edit::Exit => {
            // process::exit skips destructors; restore the terminal first.
            reset_terminal();
            std::process::exit(0);
        }
        Edit::Cancel => None,
        _ => Some(editor.text()),
    }
}

fn redraw(prompt: &str, editor: &LineEditor) {
    print!("\r\x1b[2K{}: {}", prompt, editor.text());
    // Column is 1-based: prompt, ": ", then the cursor offset.
    print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor());
    flush();
}
