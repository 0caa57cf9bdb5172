//! Vocabulary lookups and spelling correction for code terms.
//!
//! - [`vocabulary::Vocabulary`] answers "is this a known word?", optionally
//!   ignoring inflection.
//! - [`fuzzy_index::FuzzyWordIndex`] proposes corrections for unknown words
//!   using bigram overlap and edit distance.
//! - [`splitter::DictionaryBasedSplitter`] segments run-together identifiers
//!   ("getfilename") into known words.

pub mod fuzzy_index;
pub mod levenshtein;
pub mod splitter;
pub mod vocabulary;

pub use fuzzy_index::{FuzzyIndexConfig, FuzzyWordIndex};
pub use levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
pub use splitter::DictionaryBasedSplitter;
pub use vocabulary::{DictionaryOption, Vocabulary};
