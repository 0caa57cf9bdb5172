//! Co-occurrence based reformation.
//!
//! A term that is unknown or unusual is probably related to words that
//! always appear alongside the rest of the query. The candidates are the
//! common co-occurrence neighbours of every other query term the matrix
//! has seen. Context words never recorded are ignored.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::cooccurrence::SparseCoOccurrenceMatrix;

use super::reformer::QueryReformer;
use super::types::{ReformCategory, ReformedWord};

/// Proposes words co-occurring with all other query terms.
#[derive(Debug)]
pub struct CoOccurrenceReformer {
    matrix: Arc<SparseCoOccurrenceMatrix>,
    max_suggestions: usize,
}

impl CoOccurrenceReformer {
    pub fn new(matrix: Arc<SparseCoOccurrenceMatrix>, max_suggestions: usize) -> Self {
        CoOccurrenceReformer {
            matrix,
            max_suggestions,
        }
    }
}

impl QueryReformer for CoOccurrenceReformer {
    fn reform(&self, word: &str, context: &[String]) -> Vec<ReformedWord> {
        let word_lower = word.to_lowercase();
        let mut context: Vec<String> = context
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| !w.is_empty() && *w != word_lower)
            .filter(|w| self.matrix.word_count(w) > 0)
            .collect();
        context.sort();
        context.dedup();
        if context.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(String, u64)> = self
            .matrix
            .common_neighbors(&context)
            .into_iter()
            .filter(|(neighbor, _)| *neighbor != word_lower && !context.contains(neighbor))
            .collect();
        candidates.sort_by(|(a_word, a_count), (b_word, b_count)| {
            (Reverse(a_count), a_word).cmp(&(Reverse(b_count), b_word))
        });
        candidates.truncate(self.max_suggestions);

        let Some(max_count) = candidates.first().map(|(_, count)| *count) else {
            return Vec::new();
        };
        candidates
            .into_iter()
            .map(|(neighbor, count)| {
                let score =
                    ReformCategory::CoOccurrence.base_score() * count as f64 / max_count as f64;
                ReformedWord::new(word, vec![neighbor], ReformCategory::CoOccurrence, score)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "cooccurrence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Arc<SparseCoOccurrenceMatrix> {
        let matrix = SparseCoOccurrenceMatrix::in_memory();
        for _ in 0..4 {
            matrix.record(["open", "file", "stream"]);
        }
        matrix.record(["open", "file", "handle"]);
        matrix.record(["open", "file", "handle"]);
        matrix.record(["open", "socket"]);
        Arc::new(matrix)
    }

    #[test]
    fn test_common_neighbors_of_context() {
        let reformer = CoOccurrenceReformer::new(matrix(), 3);
        let context = vec!["Open".to_string(), "file".to_string()];
        let reformed = reformer.reform("strem", &context);

        let texts: Vec<String> = reformed.iter().map(|r| r.replacement_text()).collect();
        assert_eq!(texts, vec!["stream", "handle"]);
        assert!((reformed[0].score - 0.6).abs() < 1e-9);
        assert!((reformed[1].score - 0.3).abs() < 1e-9);
        assert_eq!(reformed[0].category, ReformCategory::CoOccurrence);
    }

    #[test]
    fn test_excludes_context_and_word() {
        let reformer = CoOccurrenceReformer::new(matrix(), 3);
        let reformed = reformer.reform("file", &["open".to_string()]);

        let texts: Vec<String> = reformed.iter().map(|r| r.replacement_text()).collect();
        assert_eq!(texts, vec!["stream", "handle", "socket"]);
    }

    #[test]
    fn test_no_context() {
        let reformer = CoOccurrenceReformer::new(matrix(), 3);
        assert!(reformer.reform("file", &[]).is_empty());
        assert!(reformer.reform("file", &["file".to_string()]).is_empty());
    }

    #[test]
    fn test_unrecorded_context_words_ignored() {
        let reformer = CoOccurrenceReformer::new(matrix(), 3);
        let context = vec![
            "open".to_string(),
            "zqxj".to_string(),
            "file:cs".to_string(),
            "file".to_string(),
        ];
        let texts: Vec<String> = reformer
            .reform("strem", &context)
            .iter()
            .map(|r| r.replacement_text())
            .collect();
        assert_eq!(texts, vec!["stream", "handle"]);

        let unknown_only = vec!["zqxj".to_string(), "\"main\"".to_string()];
        assert!(reformer.reform("strem", &unknown_only).is_empty());
    }

    #[test]
    fn test_limit() {
        let reformer = CoOccurrenceReformer::new(matrix(), 1);
        assert_eq!(reformer.reform("x", &["open".to_string()]).len(), 1);
    }
}
