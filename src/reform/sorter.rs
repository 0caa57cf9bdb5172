//! Ordering of reformed queries.

use std::cmp::Ordering;

use super::types::ReformedQuery;

/// Total order on reformed queries: higher score first, then the replacement
/// texts compared term by term in original query order.
pub fn compare_queries(a: &ReformedQuery, b: &ReformedQuery) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| {
        let a_texts = a.words.iter().map(|w| w.replacement_text());
        let b_texts = b.words.iter().map(|w| w.replacement_text());
        a_texts.cmp(b_texts)
    })
}

/// Ranks the candidate queries produced by the builder.
pub trait ReformedQuerySorter: Send + Sync {
    /// Return the queries in ranked order.
    fn sort(&self, queries: Vec<ReformedQuery>) -> Vec<ReformedQuery>;

    /// Get the name of this sorter for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Sorts by [`compare_queries`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreSorter;

impl ReformedQuerySorter for ScoreSorter {
    fn sort(&self, mut queries: Vec<ReformedQuery>) -> Vec<ReformedQuery> {
        queries.sort_by(compare_queries);
        queries
    }

    fn name(&self) -> &'static str {
        "score"
    }
}
