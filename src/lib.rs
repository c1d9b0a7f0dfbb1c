//! Password generation from four fixed character classes.
//!
//! [`pass::generate`] is the whole contract: a length and a [`pass::ClassSet`]
//! in, a password and a fallback flag out. The rest of the crate is the
//! terminal front end around it.

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
pub use pass::{CharacterClass, ClassSet, Generated, generate};
