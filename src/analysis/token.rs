//! Token types for identifier analysis.
//!
//! A [`Token`] is one unit produced by the analysis pipeline. Tokens carry
//! character offsets into the analyzed text and graph information
//! (`position_increment`, `position_length`) so that catenated and adjusted
//! variants can overlap the subwords they were built from:
//!
//! ```text
//! Input: "PowerShot" (generate parts + catenate words)
//!
//!   Position 0: "Power"     (pos_inc=1, pos_len=1)
//!   Position 0: "PowerShot" (pos_inc=0, pos_len=2)  ← overlaps both parts
//!   Position 1: "Shot"      (pos_inc=1, pos_len=1)
//! ```
//!
//! # Examples
//!
//! ```
//! use termsmith::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("Shot", 1, 5, 9).with_token_type(TokenType::Word);
//! assert_eq!(token.text, "Shot");
//! assert_eq!(token.start_offset, 5);
//! assert_eq!(token.end_offset, 9);
//! assert_eq!(token.position_increment, 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single analyzed unit of text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// Character offset where this token starts in the analyzed text.
    pub start_offset: usize,

    /// Character offset where this token ends in the analyzed text (exclusive).
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1: next position
    /// - 0: same position as the previous token (catenations, adjusted variants)
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    ///
    /// A catenation of three subwords spans three positions.
    pub position_length: usize,

    /// What kind of token this is.
    pub token_type: TokenType,
}

/// Classification of tokens produced by identifier analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// A run of letters, or an unsplit identifier.
    Word,
    /// A run of digits.
    Number,
    /// A catenation of several subwords.
    Catenated,
    /// A variant produced by the abbreviation heuristic ("XMLElement" → "XML", "Element").
    Abbreviation,
}

impl Token {
    /// Create a new word token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            position_length: 1,
            token_type: TokenType::Word,
        }
    }

    /// Create a new word token with text, position, and character offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            position_length: 1,
            token_type: TokenType::Word,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the position length.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is a sequence of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Assign absolute positions to tokens from their position increments.
///
/// The first token lands on `increment - 1` (never below zero), every following
/// token on the previous position plus its increment.
pub(crate) fn assign_positions(tokens: &mut [Token]) {
    let mut last: Option<usize> = None;
    for token in tokens.iter_mut() {
        let position = match last {
            None => token.position_increment.saturating_sub(1),
            Some(previous) => previous + token.position_increment,
        };
        token.position = position;
        last = Some(position);
    }
}
