//! Character classes and pool building.

use serde::{Deserialize, Serialize};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed, ordered characters of this class. All ASCII.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Digit => "Numbers (0-9)",
            CharacterClass::Symbol => "Symbols (!@#...)",
        }
    }
}

/// Which classes are enabled. Any combination is valid, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl ClassSet {
    pub const NONE: ClassSet = ClassSet {
        lowercase: false,
        uppercase: false,
        digit: false,
        symbol: false,
    };

    pub const ALL: ClassSet = ClassSet {
        lowercase: true,
        uppercase: true,
        digit: true,
        symbol: true,
    };

    pub fn only(class: CharacterClass) -> Self {
        let mut set = Self::NONE;
        set.set(class, true);
        set
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digit,
            CharacterClass::Symbol => self.symbol,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Digit => self.digit = enabled,
            CharacterClass::Symbol => self.symbol = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !CharacterClass::ALL.iter().any(|&c| self.contains(c))
    }

    /// Enabled classes in pool order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&c| self.contains(c))
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// The characters a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub chars: Vec<u8>,
    /// True when no class was enabled and lowercase was substituted.
    pub fell_back: bool,
}

/// Concatenate the enabled classes in fixed order, falling back to lowercase
/// when none is enabled.
///
/// The fallback depends only on `classes`, so a zero-length request on an
/// empty selection still reports it.
pub fn build(classes: ClassSet) -> Pool {
    let mut chars: Vec<u8> = Vec::with_capacity(size(classes));

    for class in classes.iter() {
        chars.extend_from_slice(class.chars());
    }

    if chars.is_empty() {
        return Pool {
            chars: LOWERCASE.to_vec(),
            fell_back: true,
        };
    }

    Pool {
        chars,
        fell_back: false,
    }
}

/// Pool size for the given classes, before any fallback.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes_match_fixed_sets() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 30);
        assert_eq!(size(ClassSet::ALL), 92);
    }

    #[test]
    fn symbol_set_is_exact() {
        assert_eq!(
            std::str::from_utf8(SYMBOLS).unwrap(),
            r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#
        );
    }

    #[test]
    fn pool_is_concatenated_in_fixed_order() {
        let classes = ClassSet {
            lowercase: false,
            uppercase: true,
            digit: true,
            symbol: false,
        };
        let pool = build(classes);
        assert!(!pool.fell_back);
        assert_eq!(pool.chars, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".to_vec());

        let all = build(ClassSet::ALL);
        assert_eq!(&all.chars[..26], LOWERCASE);
        assert_eq!(&all.chars[62..], SYMBOLS);
    }

    #[test]
    fn empty_selection_falls_back_to_lowercase() {
        let pool = build(ClassSet::NONE);
        assert!(pool.fell_back);
        assert_eq!(pool.chars, LOWERCASE.to_vec());
        assert_eq!(size(ClassSet::NONE), 0);
    }

    #[test]
    fn toggle_flips_one_class() {
        let mut set = ClassSet::only(CharacterClass::Digit);
        assert!(set.contains(CharacterClass::Digit));
        set.toggle(CharacterClass::Digit);
        assert!(set.is_empty());
        set.toggle(CharacterClass::Symbol);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![CharacterClass::Symbol]);
    }
}
