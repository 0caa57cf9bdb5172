//! Query reformation.
//!
//! A code search query often fails because one of its terms does not occur in
//! the code base: it is misspelled, run together, or uses a different word for
//! the same concept. This module proposes alternative queries by running each
//! unknown term through a set of [`QueryReformer`] strategies and combining the
//! results into ranked [`ReformedQuery`] values.

pub mod builder;
pub mod config;
pub mod cooccurrence;
pub mod manager;
pub mod reformer;
pub mod sorter;
pub mod splitter;
pub mod term;
pub mod thesaurus;
pub mod typo;
pub mod types;

pub use builder::ReformedQueryBuilder;
pub use config::ReformerConfig;
pub use cooccurrence::CoOccurrenceReformer;
pub use manager::{QueryReformerManager, QueryReformerManagerBuilder, ReformHandle};
pub use reformer::QueryReformer;
pub use sorter::{ReformedQuerySorter, ScoreSorter, compare_queries};
pub use splitter::SplitterReformer;
pub use term::{QueryTerm, TermKind, parse_query};
pub use thesaurus::{Thesaurus, ThesaurusReformer};
pub use typo::TypoCorrectionReformer;
pub use types::{ReformCategory, ReformedQuery, ReformedWord, remove_redundance};
