use clap::Parser;

use crate::pass::ClassSet;

/// Generate passwords from lowercase, uppercase, digit and symbol characters.
///
/// Run without arguments for the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "classpass", version)]
pub struct CliFlags {
    /// Characters per password (1-128)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// How many passwords to generate (1-1000)
    #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Use lowercase letters (naming any class selects only the named ones)
    #[arg(long)]
    pub lower: bool,

    /// Use uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Use digits
    #[arg(long)]
    pub digits: bool,

    /// Use symbols
    #[arg(long)]
    pub symbols: bool,

    /// Leave out lowercase letters
    #[arg(long, conflicts_with = "lower")]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long, conflicts_with = "upper")]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long, conflicts_with = "digits")]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long, conflicts_with = "symbols")]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress notices; only passwords are printed
    #[arg(short, long)]
    pub quiet: bool,

    /// Start from saved settings instead of defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Reduce draws with plain modulo (slightly biased, matches older generators)
    #[arg(long)]
    pub modulo: bool,
}

impl CliFlags {
    pub fn has_class_selection(&self) -> bool {
        self.lower || self.upper || self.digits || self.symbols
    }

    /// Classes to use, starting from `base` (defaults or saved settings).
    pub fn apply_classes(&self, base: ClassSet) -> ClassSet {
        let mut classes = if self.has_class_selection() {
            ClassSet {
                lowercase: self.lower,
                uppercase: self.upper,
                digit: self.digits,
                symbol: self.symbols,
            }
        } else {
            base
        };

        classes.lowercase &= !self.no_lower;
        classes.uppercase &= !self.no_upper;
        classes.digit &= !self.no_digits;
        classes.symbol &= !self.no_symbols;
        classes
    }
}
