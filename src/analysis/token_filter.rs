//! Token filters transforming token streams produced by tokenizers.
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`word_delimiter::WordDelimiterFilter`] - Splits every token into subwords
//!
//! # Examples
//!
//! ```
//! use termsmith::analysis::token_filter::Filter;
//! use termsmith::analysis::token_filter::lowercase::LowercaseFilter;
//! use termsmith::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod word_delimiter;

pub use lowercase::LowercaseFilter;
pub use word_delimiter::WordDelimiterFilter;
