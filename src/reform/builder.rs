//! Combination of per-term alternatives into full queries.
//!
//! The candidate queries are the Cartesian product of the alternatives of
//! every term. The product is pruned to the best `max_queries` after each
//! term; since a query's score is the product of its word scores (all within
//! `[0, 1]`), pruning never discards a query that would rank in the final top.

use super::sorter::compare_queries;
use super::types::{ReformedQuery, ReformedWord};

/// Accumulates alternatives term by term.
#[derive(Clone, Debug)]
pub struct ReformedQueryBuilder {
    max_queries: usize,
    queries: Vec<ReformedQuery>,
    terms: usize,
}

impl ReformedQueryBuilder {
    pub fn new(max_queries: usize) -> Self {
        ReformedQueryBuilder {
            max_queries,
            queries: vec![ReformedQuery::new(Vec::new())],
            terms: 0,
        }
    }

    /// Add the alternatives of the next query term. An empty list is ignored.
    pub fn add_reformed_terms(&mut self, alternatives: Vec<ReformedWord>) {
        if alternatives.is_empty() {
            return;
        }
        let mut next: Vec<ReformedQuery> = self
            .queries
            .iter()
            .flat_map(|query| {
                alternatives
                    .iter()
                    .map(move |alternative| query.extended(alternative.clone()))
            })
            .collect();
        next.sort_by(compare_queries);
        next.truncate(self.max_queries);
        self.queries = next;
        self.terms += 1;
    }

    /// Number of terms added so far.
    pub fn term_count(&self) -> usize {
        self.terms
    }

    /// All combinations built so far, best first. Empty when no term was added.
    pub fn build(&self) -> Vec<ReformedQuery> {
        if self.terms == 0 {
            return Vec::new();
        }
        self.queries.clone()
    }
}
