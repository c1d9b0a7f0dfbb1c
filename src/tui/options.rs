use log::debug;

use crate::cli::prompts::FALLBACK_NOTICE;
use crate::clipboard::Clipboard;
use crate::entropy::{self, Sampling};
use crate::error::{Error, Result};
use crate::pass::{self, CharacterClass, Generated};
use crate::settings::Settings;
use crate::terminal::reset_terminal;

use super::{enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_menu};

/// Message shown under the menu after the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    None,
    Notice(String),
    Success(String),
    Error(String),
}

use LoopAction::*;
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Break,
    Continue,
}

/// Everything the menu owns: settings, the displayed password, clipboard.
pub struct Session {
    pub settings: Settings,
    password: Option<Generated>,
    clipboard: Option<Clipboard>,
    pub status: Status,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            password: None,
            clipboard: None,
            status: Status::None,
        }
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|g| g.password.as_str())
    }

    /// Generate into the display field, reflecting a fallback in the toggles.
    pub fn generate(&mut self) {
        let generated = pass::generate_with(
            &mut entropy::source(),
            self.settings.sampling,
            self.settings.length,
            self.settings.classes,
        );

        self.status = if self.settings.apply_fallback(generated.fell_back) {
            Status::Notice(FALLBACK_NOTICE.to_string())
        } else {
            Status::None
        };
        self.password = Some(generated);
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.settings.classes.toggle(class);
        self.status = Status::None;
    }

    pub fn toggle_sampling(&mut self) {
        self.settings.sampling = match self.settings.sampling {
            Sampling::Rejection => Sampling::Modulo,
            Sampling::Modulo => Sampling::Rejection,
        };
        self.status = Status::None;
    }

    pub fn set_length(&mut self, input: &str) {
        self.status = match Settings::parse_length(input) {
            Ok(len) => {
                self.settings.length = len;
                Status::None
            }
            Err(e) => Status::Error(e.to_string()),
        };
    }

    pub fn copy(&mut self) {
        self.status = match self.copy_password() {
            Ok(()) => Status::Success("Copied!".to_string()),
            Err(e) => Status::Error(e.to_string()),
        };
    }

    fn copy_password(&mut self) -> Result<()> {
        let text = match self.password.as_ref() {
            Some(g) if !g.password.is_empty() => g.password.as_str(),
            _ => return Err(Error::NothingToCopy),
        };

        // Keep the context open for the session; on X11 the contents go
        // away with it.
        let board = match self.clipboard.take() {
            Some(board) => board,
            None => Clipboard::open()?,
        };
        self.clipboard.insert(board).copy(text)
    }

    /// Apply one menu choice that needs no further input.
    pub fn command(&mut self, choice: &str) -> LoopAction {
        match choice {
            "" => self.generate(),
            "2" => self.toggle(CharacterClass::Lowercase),
            "3" => self.toggle(CharacterClass::Uppercase),
            "4" => self.toggle(CharacterClass::Digit),
            "5" => self.toggle(CharacterClass::Symbol),
            "6" => self.toggle_sampling(),
            "c" => self.copy(),
            "s" => {
                self.status = match self.settings.save_to_file() {
                    Ok(()) => Status::Success("Settings saved.".to_string()),
                    Err(e) => Status::Error(format!("Error saving settings: {}", e)),
                };
            }
            "r" => {
                self.settings = Settings::default();
                self.status = Status::Success("Defaults loaded.".to_string());
            }
            "f" => {
                self.status = match Settings::load_from_file() {
                    Ok(s) => {
                        self.settings = s;
                        Status::Success("Saved settings loaded.".to_string())
                    }
                    Err(e) => Status::Error(format!("Error loading settings: {}", e)),
                };
            }
            "q" => return Break,
            _ => self.status = Status::Error("Invalid option.".to_string()),
        }
        Continue
    }
}

pub fn gen_main_menu() {
    reset_terminal();

    let (settings, status) = match Settings::load_from_file() {
        Ok(s) => (s, Status::None),
        Err(e) => (
            Settings::default(),
            Status::Error(format!("Error loading settings: {}", e)),
        ),
    };

    let mut session = Session::new(settings);
    session.generate();
    if session.status == Status::None {
        session.status = status;
    }

    loop {
        print_main_menu(&session.settings, session.password(), &session.status);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                session.status = Status::None;
                continue;
            }
        };
        let choice = input.trim().to_lowercase();
        debug!("menu choice {:?}", choice);

        match choice.as_str() {
            "1" => {
                if let Some(len) =
                    get_numeric_input("Enter new password length", session.settings.length)
                {
                    session.set_length(&len);
                }
            }
            "h" | "help" => {
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
                session.status = Status::None;
            }
            other => {
                if session.command(other) == Break {
                    break;
                }
            }
        }
    }

    reset_terminal();
}
