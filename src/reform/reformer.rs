//! Query reformer trait definition.

use super::types::ReformedWord;

/// A strategy proposing alternatives for one query term.
///
/// Implementations never fail: a strategy that has nothing to offer returns
/// an empty list.
pub trait QueryReformer: Send + Sync {
    /// Propose alternatives for `word`.
    ///
    /// # Arguments
    /// * `word` - The term to reform
    /// * `context` - The other terms of the same query
    fn reform(&self, word: &str, context: &[String]) -> Vec<ReformedWord>;

    /// Get the name of this reformer for debugging and logging.
    fn name(&self) -> &'static str;
}
