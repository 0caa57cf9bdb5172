//! Typo correction against the local vocabulary.

use std::sync::Arc;

use crate::spelling::fuzzy_index::FuzzyWordIndex;
use crate::spelling::levenshtein::levenshtein_distance_threshold;

use super::reformer::QueryReformer;
use super::types::{ReformCategory, ReformedWord};

/// Proposes close vocabulary words for a misspelled term.
///
/// Candidates come from the fuzzy index in its ranking order; only those
/// within `max_edit_distance` survive. The score decays with the edit distance
/// relative to the longer of the two words.
#[derive(Debug)]
pub struct TypoCorrectionReformer {
    index: Arc<FuzzyWordIndex>,
    max_suggestions: usize,
    max_edit_distance: usize,
}

impl TypoCorrectionReformer {
    pub fn new(index: Arc<FuzzyWordIndex>, max_suggestions: usize, max_edit_distance: usize) -> Self {
        TypoCorrectionReformer {
            index,
            max_suggestions,
            max_edit_distance,
        }
    }
}

impl QueryReformer for TypoCorrectionReformer {
    fn reform(&self, word: &str, _context: &[String]) -> Vec<ReformedWord> {
        let query = word.to_lowercase();
        let query_len = query.chars().count();

        self.index
            .find_similar_words(&query)
            .into_iter()
            .filter(|candidate| *candidate != query)
            .filter_map(|candidate| {
                let distance =
                    levenshtein_distance_threshold(&query, &candidate, self.max_edit_distance)?;
                let longest = query_len.max(candidate.chars().count()).max(1);
                let score = ReformCategory::Typo.base_score()
                    * (1.0 - distance as f64 / longest as f64);
                Some(ReformedWord::new(
                    word,
                    vec![candidate],
                    ReformCategory::Typo,
                    score,
                ))
            })
            .take(self.max_suggestions)
            .collect()
    }

    fn name(&self) -> &'static str {
        "typo"
    }
}
