//! Character classification for subword splitting.
//!
//! Every character of an identifier falls into exactly one [`CharClass`].
//! A [`CharTypeTable`] holds flag bytes for the low code points so callers can
//! override how individual characters are treated (for example, to make `$`
//! part of words). Code points beyond the table, and table entries that are not
//! a single valid flag, use the default Unicode classification.

use lazy_static::lazy_static;

/// Flag for lower-case letters.
pub const LOWER: u8 = 0x01;
/// Flag for upper-case (and uncased) letters.
pub const UPPER: u8 = 0x02;
/// Flag for digits.
pub const DIGIT: u8 = 0x04;
/// Flag for intra-word delimiters.
pub const SUBWORD_DELIM: u8 = 0x08;

const DEFAULT_TABLE_SIZE: usize = 256;

lazy_static! {
    static ref DEFAULT_TABLE: Vec<u8> = (0..DEFAULT_TABLE_SIZE as u32)
        .map(|code| {
            char::from_u32(code)
                .map(|ch| CharClass::default_for(ch).flag())
                .unwrap_or(SUBWORD_DELIM)
        })
        .collect();
}

/// The class of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Delimiter,
}

impl CharClass {
    /// Classify a character by its Unicode properties.
    pub fn default_for(ch: char) -> Self {
        if ch.is_lowercase() {
            CharClass::Lower
        } else if ch.is_alphabetic() {
            CharClass::Upper
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Delimiter
        }
    }

    /// Decode a table flag byte. Returns `None` for anything that is not exactly one flag.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            LOWER => Some(CharClass::Lower),
            UPPER => Some(CharClass::Upper),
            DIGIT => Some(CharClass::Digit),
            SUBWORD_DELIM => Some(CharClass::Delimiter),
            _ => None,
        }
    }

    /// The table flag byte of this class.
    pub fn flag(self) -> u8 {
        match self {
            CharClass::Lower => LOWER,
            CharClass::Upper => UPPER,
            CharClass::Digit => DIGIT,
            CharClass::Delimiter => SUBWORD_DELIM,
        }
    }

    /// Letters of either case.
    pub fn is_alpha(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper)
    }
}

/// Lookup table from low code points to character classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharTypeTable {
    table: Vec<u8>,
}

impl Default for CharTypeTable {
    fn default() -> Self {
        CharTypeTable {
            table: DEFAULT_TABLE.clone(),
        }
    }
}

impl CharTypeTable {
    /// Build a table from raw flag bytes indexed by code point.
    pub fn from_bytes(table: Vec<u8>) -> Self {
        CharTypeTable { table }
    }

    /// Return a copy of this table with `ch` forced into `class`.
    ///
    /// The table grows if `ch` lies beyond it; new slots are filled with the
    /// default classification of their code point.
    pub fn with_class(mut self, ch: char, class: CharClass) -> Self {
        let index = ch as usize;
        if index >= self.table.len() {
            let old_len = self.table.len();
            self.table.extend((old_len..=index).map(|code| {
                char::from_u32(code as u32)
                    .map(|c| CharClass::default_for(c).flag())
                    .unwrap_or(SUBWORD_DELIM)
            }));
        }
        self.table[index] = class.flag();
        self
    }

    /// Classify a character.
    pub fn classify(&self, ch: char) -> CharClass {
        self.table
            .get(ch as usize)
            .and_then(|&flag| CharClass::from_flag(flag))
            .unwrap_or_else(|| CharClass::default_for(ch))
    }

    /// Number of code points covered by the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table covers no code points at all.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
