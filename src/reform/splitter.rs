//! Split-based reformation: "getfilename" → "get file name".

use std::sync::Arc;

use crate::spelling::splitter::DictionaryBasedSplitter;
use crate::spelling::vocabulary::Vocabulary;

use super::reformer::QueryReformer;
use super::types::{ReformCategory, ReformedWord};

/// Proposes the dictionary based segmentation of a term.
#[derive(Debug)]
pub struct SplitterReformer {
    splitter: DictionaryBasedSplitter,
}

impl SplitterReformer {
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        SplitterReformer {
            splitter: DictionaryBasedSplitter::new(vocabulary),
        }
    }
}

impl QueryReformer for SplitterReformer {
    fn reform(&self, word: &str, _context: &[String]) -> Vec<ReformedWord> {
        match self.splitter.split(word) {
            Some(pieces) => vec![ReformedWord::new(
                word,
                pieces,
                ReformCategory::Split,
                ReformCategory::Split.base_score(),
            )],
            None => Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "splitter"
    }
}
