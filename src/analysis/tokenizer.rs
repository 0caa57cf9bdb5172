//! Tokenizers: the first step of the analysis pipeline.
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`word_delimiter::WordDelimiterTokenizer`] - Splits one identifier into subwords
//!
//! # Examples
//!
//! ```
//! use termsmith::analysis::tokenizer::Tokenizer;
//! use termsmith::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("parse XMLElement").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared between the
/// synchronous and background reformation paths.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
pub mod word_delimiter;

pub use whitespace::WhitespaceTokenizer;
pub use word_delimiter::WordDelimiterTokenizer;
