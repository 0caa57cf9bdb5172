//! # termsmith
//!
//! Identifier tokenization and query reformation for code search.
//!
//! ## Features
//!
//! - Subword splitting of identifiers (`parseXMLElement`, `wi-fi`, `SD500`)
//! - Vocabulary lookups with light stemming
//! - Bigram based typo correction
//! - Sparse word co-occurrence statistics with on-disk persistence
//! - Query reformation: splitting, typo correction, thesauri, co-occurrence
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use termsmith::prelude::*;
//!
//! let vocabulary = Arc::new(Vocabulary::from_words(["open", "file", "reader"]));
//! let index = Arc::new(FuzzyWordIndex::from_vocabulary(&vocabulary));
//!
//! let manager = QueryReformerManager::builder(vocabulary)
//!     .splitter()
//!     .typo_correction(index)
//!     .build()
//!     .unwrap();
//!
//! let queries = manager.reform(&parse_query("openfile reader"));
//! assert_eq!(queries[0].query_string(), "open file reader");
//! ```

pub mod analysis;
pub mod cooccurrence;
pub mod error;
pub mod reform;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{
        Analyzer, IdentifierAnalyzer, Token, TokenType, Tokenizer, WordDelimiterConfig,
        WordDelimiterTokenizer,
    };
    pub use crate::cooccurrence::SparseCoOccurrenceMatrix;
    pub use crate::error::{Result, TermsmithError};
    pub use crate::reform::{
        QueryReformerManager, QueryTerm, ReformCategory, ReformedQuery, ReformedWord,
        ReformerConfig, Thesaurus, parse_query,
    };
    pub use crate::spelling::{FuzzyWordIndex, Vocabulary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
