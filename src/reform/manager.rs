//! Orchestration of the reformation pipeline.
//!
//! For every term of a query the manager decides whether the term needs
//! reforming, collects alternatives from each registered strategy in order,
//! merges them, and finally combines the per-term alternatives into ranked
//! full queries:
//!
//! ```text
//! terms ─┬─ known / quoted / flag / short ──────────────→ unchanged
//!        └─ otherwise → split → typo → thesauri → co-occurrence
//!                      → dedupe → top-k → (identity if empty)
//!                                   ↓
//!                      ReformedQueryBuilder → ReformedQuerySorter
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use termsmith::reform::QueryReformerManager;
//! use termsmith::spelling::{FuzzyWordIndex, Vocabulary};
//!
//! let vocabulary = Arc::new(Vocabulary::from_words(["open", "file", "stream"]));
//! let index = Arc::new(FuzzyWordIndex::from_vocabulary(&vocabulary));
//!
//! let manager = QueryReformerManager::builder(vocabulary)
//!     .splitter()
//!     .typo_correction(index)
//!     .build()
//!     .unwrap();
//!
//! let queries = manager.reform_strs(&["open", "streem"]);
//! assert_eq!(queries[0].query_string(), "open stream");
//! ```

use std::fmt;
use std::sync::Arc;

use crossbeam_channel::Receiver;
use tracing::debug;

use crate::cooccurrence::matrix::SparseCoOccurrenceMatrix;
use crate::error::{Result, TermsmithError};
use crate::spelling::fuzzy_index::FuzzyWordIndex;
use crate::spelling::vocabulary::{DictionaryOption, Vocabulary};

use super::builder::ReformedQueryBuilder;
use super::config::ReformerConfig;
use super::cooccurrence::CoOccurrenceReformer;
use super::reformer::QueryReformer;
use super::sorter::{ReformedQuerySorter, ScoreSorter};
use super::splitter::SplitterReformer;
use super::term::QueryTerm;
use super::thesaurus::{Thesaurus, ThesaurusReformer};
use super::typo::TypoCorrectionReformer;
use super::types::{ReformCategory, ReformedQuery, ReformedWord, remove_redundance};

/// Runs the reformation pipeline over whole queries.
///
/// Cloning is cheap; all clones share the same vocabulary, strategies and
/// sorter. Independent requests may run concurrently.
#[derive(Clone)]
pub struct QueryReformerManager {
    vocabulary: Arc<Vocabulary>,
    reformers: Arc<Vec<Arc<dyn QueryReformer>>>,
    sorter: Arc<dyn ReformedQuerySorter>,
    config: Arc<ReformerConfig>,
}

impl fmt::Debug for QueryReformerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryReformerManager")
            .field("reformers", &self.reformer_names())
            .field("sorter", &self.sorter.name())
            .field("config", &self.config)
            .finish()
    }
}

impl QueryReformerManager {
    /// Start building a manager around a vocabulary.
    pub fn builder(vocabulary: Arc<Vocabulary>) -> QueryReformerManagerBuilder {
        QueryReformerManagerBuilder::new(vocabulary)
    }

    pub fn config(&self) -> &ReformerConfig {
        &self.config
    }

    /// Names of the registered strategies, in the order they run.
    pub fn reformer_names(&self) -> Vec<&'static str> {
        self.reformers.iter().map(|r| r.name()).collect()
    }

    /// Reform a query and return the alternatives, best first.
    ///
    /// When no term needs reforming the result is the single original query.
    pub fn reform(&self, terms: &[QueryTerm]) -> Vec<ReformedQuery> {
        if terms.is_empty() {
            return Vec::new();
        }

        let mut builder = ReformedQueryBuilder::new(self.config.max_reformed_queries);
        for (index, term) in terms.iter().enumerate() {
            let neighbors: Vec<String> = terms
                .iter()
                .enumerate()
                .filter(|&(other, neighbor)| {
                    other != index && neighbor.is_plain() && neighbor.text != term.text
                })
                .map(|(_, neighbor)| neighbor.text.clone())
                .collect();
            builder.add_reformed_terms(self.reform_term(term, &neighbors));
        }

        let queries = self.sorter.sort(builder.build());
        debug!(
            terms = terms.len(),
            queries = queries.len(),
            sorter = self.sorter.name(),
            "reformed query"
        );
        queries
    }

    /// Reform raw terms, classifying each with [`QueryTerm::classify`].
    pub fn reform_strs(&self, terms: &[&str]) -> Vec<ReformedQuery> {
        let terms: Vec<QueryTerm> = terms.iter().map(|t| QueryTerm::classify(t)).collect();
        self.reform(&terms)
    }

    /// Reform on the rayon pool and hand the result to `callback`.
    ///
    /// The callback runs exactly once, on a pool thread. There is no way to
    /// cancel a started request.
    pub fn reform_async<F>(&self, terms: Vec<QueryTerm>, callback: F)
    where
        F: FnOnce(Vec<ReformedQuery>) + Send + 'static,
    {
        let manager = self.clone();
        rayon::spawn(move || callback(manager.reform(&terms)));
    }

    /// Reform on the rayon pool and return a handle to the pending result.
    pub fn spawn_reform(&self, terms: Vec<QueryTerm>) -> ReformHandle {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        self.reform_async(terms, move |queries| {
            // The handle may already be gone; nobody is waiting then.
            let _ = sender.send(queries);
        });
        ReformHandle { receiver }
    }

    fn needs_reform(&self, term: &QueryTerm) -> bool {
        term.is_plain()
            && term.text.chars().count() >= self.config.min_term_length
            && !self
                .vocabulary
                .contains(&term.text, DictionaryOption::IncludingStemming)
    }

    fn reform_term(&self, term: &QueryTerm, neighbors: &[String]) -> Vec<ReformedWord> {
        if !self.needs_reform(term) {
            return vec![ReformedWord::unchanged(term.text.as_str())];
        }

        let mut candidates = Vec::new();
        for reformer in self.reformers.iter() {
            let proposed = reformer.reform(&term.text, neighbors);
            debug!(
                term = %term.text,
                reformer = reformer.name(),
                candidates = proposed.len(),
                "reformer proposals"
            );
            candidates.extend(proposed);
        }

        let mut candidates = remove_redundance(candidates);
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(self.config.max_candidates_per_term);

        if candidates.is_empty() {
            debug!(term = %term.text, "no alternatives, keeping term");
            candidates.push(ReformedWord::unchanged(term.text.as_str()));
        }
        candidates
    }
}

/// Pending result of [`QueryReformerManager::spawn_reform`].
#[derive(Debug)]
pub struct ReformHandle {
    receiver: Receiver<Vec<ReformedQuery>>,
}

impl ReformHandle {
    /// Block until the result is available.
    pub fn wait(self) -> Result<Vec<ReformedQuery>> {
        self.receiver
            .recv()
            .map_err(|_| TermsmithError::other("reformation worker ended without a result"))
    }

    /// Return the result if it is ready, without blocking.
    ///
    /// Returns `None` while the request is still running, and after the
    /// result has been taken once.
    pub fn try_result(&self) -> Option<Vec<ReformedQuery>> {
        self.receiver.try_recv().ok()
    }
}

/// A strategy registered on the builder, resolved once the config is known.
enum PendingReformer {
    Splitter,
    Typo(Arc<FuzzyWordIndex>),
    Thesaurus(Arc<Thesaurus>, ReformCategory),
    CoOccurrence(Arc<SparseCoOccurrenceMatrix>),
    Custom(Arc<dyn QueryReformer>),
}

/// Builder for [`QueryReformerManager`].
///
/// Strategies run in the order they are registered.
pub struct QueryReformerManagerBuilder {
    vocabulary: Arc<Vocabulary>,
    pending: Vec<PendingReformer>,
    sorter: Arc<dyn ReformedQuerySorter>,
    config: ReformerConfig,
}

impl QueryReformerManagerBuilder {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        QueryReformerManagerBuilder {
            vocabulary,
            pending: Vec::new(),
            sorter: Arc::new(ScoreSorter),
            config: ReformerConfig::default(),
        }
    }

    /// Register the dictionary based splitter over the manager's vocabulary.
    pub fn splitter(mut self) -> Self {
        self.pending.push(PendingReformer::Splitter);
        self
    }

    /// Register typo correction against a fuzzy index.
    pub fn typo_correction(mut self, index: Arc<FuzzyWordIndex>) -> Self {
        self.pending.push(PendingReformer::Typo(index));
        self
    }

    /// Register a thesaurus scored as `category`.
    pub fn thesaurus(mut self, thesaurus: Arc<Thesaurus>, category: ReformCategory) -> Self {
        self.pending
            .push(PendingReformer::Thesaurus(thesaurus, category));
        self
    }

    /// Register co-occurrence suggestions from a matrix.
    pub fn cooccurrence(mut self, matrix: Arc<SparseCoOccurrenceMatrix>) -> Self {
        self.pending.push(PendingReformer::CoOccurrence(matrix));
        self
    }

    /// Register a custom strategy.
    pub fn reformer(mut self, reformer: Arc<dyn QueryReformer>) -> Self {
        self.pending.push(PendingReformer::Custom(reformer));
        self
    }

    /// Replace the default [`ScoreSorter`].
    pub fn sorter(mut self, sorter: Arc<dyn ReformedQuerySorter>) -> Self {
        self.sorter = sorter;
        self
    }

    pub fn config(mut self, config: ReformerConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and assemble the manager.
    pub fn build(self) -> Result<QueryReformerManager> {
        self.config.validate()?;

        let config = self.config;
        let vocabulary = self.vocabulary;
        let reformers: Vec<Arc<dyn QueryReformer>> = self
            .pending
            .into_iter()
            .map(|pending| -> Arc<dyn QueryReformer> {
                match pending {
                    PendingReformer::Splitter => {
                        Arc::new(SplitterReformer::new(vocabulary.clone()))
                    }
                    PendingReformer::Typo(index) => Arc::new(TypoCorrectionReformer::new(
                        index,
                        config.max_typo_suggestions,
                        config.max_edit_distance,
                    )),
                    PendingReformer::Thesaurus(thesaurus, category) => {
                        let reformer = ThesaurusReformer::new(thesaurus, category);
                        if config.thesaurus_requires_vocabulary {
                            Arc::new(reformer.with_vocabulary(vocabulary.clone()))
                        } else {
                            Arc::new(reformer)
                        }
                    }
                    PendingReformer::CoOccurrence(matrix) => Arc::new(CoOccurrenceReformer::new(
                        matrix,
                        config.max_cooccurrence_suggestions,
                    )),
                    PendingReformer::Custom(reformer) => reformer,
                }
            })
            .collect();

        debug!(
            reformers = reformers.len(),
            vocabulary = vocabulary.len(),
            "built query reformer manager"
        );

        Ok(QueryReformerManager {
            vocabulary,
            reformers: Arc::new(reformers),
            sorter: self.sorter,
            config: Arc::new(config),
        })
    }
}
