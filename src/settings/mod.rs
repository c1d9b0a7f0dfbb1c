//! Password generation settings.
//!
//! This is the state the UI layer owns: the generator only ever sees a length
//! and a `ClassSet` taken from here.

mod file;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::entropy::Sampling;
use crate::error::{Error, Result};
use crate::pass::{CharacterClass, ClassSet};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 16;
pub const MAX_COUNT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub count: usize,
    pub sampling: Sampling,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        file::load(&file::path()?)
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(&file::path()?, self)
    }

    /// Saved settings, or defaults with a warning when the file can't be used.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            warn!("using default settings: {}", e);
            Settings::default()
        })
    }

    /// Check a user-supplied length against the configured bounds.
    pub fn validate_length(value: i64) -> Result<usize> {
        match usize::try_from(value) {
            Ok(len) if (MIN_LENGTH..=MAX_LENGTH).contains(&len) => Ok(len),
            _ => Err(Error::LengthOutOfRange {
                value,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            }),
        }
    }

    pub fn parse_length(input: &str) -> Result<usize> {
        Self::validate_length(parse_number(input)?)
    }

    pub fn validate_count(value: i64) -> Result<usize> {
        match usize::try_from(value) {
            Ok(n) if (1..=MAX_COUNT).contains(&n) => Ok(n),
            _ => Err(Error::CountOutOfRange {
                value,
                max: MAX_COUNT,
            }),
        }
    }

    /// Make the controls reflect a fallback the generator reported.
    /// Returns whether anything changed.
    pub fn apply_fallback(&mut self, fell_back: bool) -> bool {
        if !fell_back || self.classes.lowercase {
            return false;
        }
        info!("no character class selected, enabling lowercase");
        self.classes.set(CharacterClass::Lowercase, true);
        true
    }

    /// Replace out-of-range values (hand-edited file) with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            warn!("saved length {} out of range, using {}", self.length, defaults.length);
            self.length = defaults.length;
        }
        if !(1..=MAX_COUNT).contains(&self.count) {
            warn!("saved count {} out of range, using {}", self.count, defaults.count);
            self.count = defaults.count;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::ALL,
            count: 1,
            sampling: Sampling::Rejection,
            to_clipboard: false,
        }
    }
}

fn parse_number(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| Error::InvalidNumber(trimmed.to_string()))
}
