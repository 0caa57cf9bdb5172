//! Word delimiter filter: splits every incoming token into subwords.
//!
//! Offsets of the produced tokens are shifted by the offset of the token they
//! came from. A token that consists only of delimiters is dropped and its
//! position increment carries over to the next emitted token.
//!
//! # Examples
//!
//! ```
//! use termsmith::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//! use termsmith::analysis::token_filter::{Filter, WordDelimiterFilter};
//!
//! let tokens = WhitespaceTokenizer::new().tokenize("parse XMLElement").unwrap();
//! let texts: Vec<String> = WordDelimiterFilter::new()
//!     .filter(tokens)
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["parse", "XML", "XMLE", "Element", "lement"]);
//! ```

use crate::analysis::char_type::CharTypeTable;
use crate::analysis::token::{Token, TokenStream, assign_positions};
use crate::analysis::token_filter::Filter;
use crate::analysis::word_delimiter::{WordDelimiter, WordDelimiterConfig};
use crate::error::Result;

/// A filter that applies the word delimiter to each token of a stream.
#[derive(Clone, Debug, Default)]
pub struct WordDelimiterFilter {
    delimiter: WordDelimiter,
}

impl WordDelimiterFilter {
    /// Create a filter that generates word and number parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with explicit emission flags.
    pub fn with_config(config: WordDelimiterConfig) -> Self {
        WordDelimiterFilter {
            delimiter: WordDelimiter::new(config),
        }
    }

    /// Create a filter with explicit flags and character table.
    pub fn with_table(config: WordDelimiterConfig, table: CharTypeTable) -> Self {
        WordDelimiterFilter {
            delimiter: WordDelimiter::with_table(config, table),
        }
    }
}

impl Filter for WordDelimiterFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut output: Vec<Token> = Vec::new();
        let mut pending_increment = 0;

        for token in tokens {
            pending_increment += token.position_increment;
            let parts = self
                .delimiter
                .split(&token.text, token.start_offset, pending_increment);
            if !parts.is_empty() {
                pending_increment = 0;
                output.extend(parts);
            }
        }

        assign_positions(&mut output);
        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_delimiter"
    }
}
