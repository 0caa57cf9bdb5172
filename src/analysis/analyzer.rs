//! Analyzers combine a tokenizer with filters into one analysis pipeline.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`identifier::IdentifierAnalyzer`] - Whitespace, word delimiter, lowercase
//!
//! # Examples
//!
//! ```
//! use termsmith::analysis::analyzer::Analyzer;
//! use termsmith::analysis::analyzer::identifier::IdentifierAnalyzer;
//!
//! let analyzer = IdentifierAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("getUser").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "get");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod identifier;
pub mod pipeline;

pub use identifier::IdentifierAnalyzer;
pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
