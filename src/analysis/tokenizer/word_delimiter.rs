//! Word delimiter tokenizer: treats the whole input as one identifier.
//!
//! # Examples
//!
//! ```
//! use termsmith::analysis::tokenizer::Tokenizer;
//! use termsmith::analysis::tokenizer::word_delimiter::WordDelimiterTokenizer;
//!
//! let tokenizer = WordDelimiterTokenizer::new();
//! let texts: Vec<String> = tokenizer
//!     .tokenize("PowerShot")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["Power", "Shot"]);
//! ```

use super::Tokenizer;

use crate::analysis::char_type::CharTypeTable;
use crate::analysis::token::TokenStream;
use crate::analysis::word_delimiter::{WordDelimiter, WordDelimiterConfig};
use crate::error::Result;

/// A tokenizer that splits its entire input into subwords.
#[derive(Clone, Debug, Default)]
pub struct WordDelimiterTokenizer {
    delimiter: WordDelimiter,
}

impl WordDelimiterTokenizer {
    /// Create a tokenizer that generates word and number parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with explicit emission flags.
    pub fn with_config(config: WordDelimiterConfig) -> Self {
        WordDelimiterTokenizer {
            delimiter: WordDelimiter::new(config),
        }
    }

    /// Create a tokenizer with explicit flags and character table.
    pub fn with_table(config: WordDelimiterConfig, table: CharTypeTable) -> Self {
        WordDelimiterTokenizer {
            delimiter: WordDelimiter::with_table(config, table),
        }
    }

    /// The underlying delimiter engine.
    pub fn delimiter(&self) -> &WordDelimiter {
        &self.delimiter
    }
}

impl Tokenizer for WordDelimiterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.delimiter.split(text, 0, 1);
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_delimiter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_tokenize_identifier() {
        let tokenizer = WordDelimiterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("getUserName2").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["get", "User", "Name", "2"]);
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_catenating_tokenizer() {
        let tokenizer = WordDelimiterTokenizer::with_config(WordDelimiterConfig::indexing());
        let tokens: Vec<Token> = tokenizer.tokenize("wi-fi").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["wi", "wifi", "wi-fi", "fi"]);
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordDelimiterTokenizer::new().name(), "word_delimiter");
    }
}
