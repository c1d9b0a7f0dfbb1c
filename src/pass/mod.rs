//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{Batch, Generated, generate, generate_batch, generate_with};
