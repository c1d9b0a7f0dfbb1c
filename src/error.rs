//! Crate error type.
//!
//! The generator itself never fails; everything here comes from the layers
//! around it (input validation, clipboard, settings file, terminal).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Password length must be a number between {min} and {max} (got {value}).")]
    LengthOutOfRange { value: i64, min: usize, max: usize },

    #[error("Number of passwords must be between 1 and {max} (got {value}).")]
    CountOutOfRange { value: i64, max: usize },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Nothing to copy. Generate a password first.")]
    NothingToCopy,

    #[error("Failed to copy password ({0}). Please try again or copy manually.")]
    Clipboard(String),

    #[error("Settings file error: {0}")]
    SettingsIo(#[from] std::io::Error),

    #[error("Settings file is malformed: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("No config directory available on this system")]
    NoConfigDir,

    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
