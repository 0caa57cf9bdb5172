//! Text analysis for source-code identifiers.
//!
//! This module turns raw identifiers such as `XMLElement`, `wi-fi` or
//! `getUserName2` into subword tokens. The heart of it is the
//! [`word_delimiter::WordDelimiter`] engine; tokenizers, filters and analyzers
//! wrap it into streaming pipelines.
//!
//! ```text
//! "parseXMLElement" → Whitespace → WordDelimiter → Lowercase
//!                   → parse, xmle, lement, element, xml, ...
//! ```

pub mod analyzer;
pub mod char_type;
pub mod stemmer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
pub mod word_delimiter;

pub use analyzer::{Analyzer, IdentifierAnalyzer};
pub use char_type::{CharClass, CharTypeTable};
pub use stemmer::{Stemmer, SuffixStemmer};
pub use token::{Token, TokenStream, TokenType};
pub use token_filter::{Filter, LowercaseFilter, WordDelimiterFilter};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer, WordDelimiterTokenizer};
pub use word_delimiter::{WordDelimiter, WordDelimiterConfig};
