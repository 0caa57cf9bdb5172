//! Splits run-together identifiers into known words.
//!
//! "getfilename" has no case or delimiter boundaries, so the word delimiter
//! leaves it whole. The splitter finds a segmentation into vocabulary words
//! instead, preferring cuts that coincide with boundaries the identifier
//! analyzer already found.

use std::cmp::Reverse;
use std::sync::Arc;

use ahash::AHashSet;
use tracing::debug;

use crate::analysis::analyzer::{Analyzer, IdentifierAnalyzer};
use crate::spelling::vocabulary::{DictionaryOption, Vocabulary};

/// Words longer than this are never split.
const MAX_SPLIT_LENGTH: usize = 64;
/// Vocabulary pieces must be at least this long.
const MIN_PIECE_LENGTH: usize = 2;

#[derive(Clone, Debug)]
struct Segmentation {
    cost: usize,
    pieces: Vec<(usize, usize)>,
}

impl Segmentation {
    /// Lower cost first, then fewer pieces, then earlier pieces longer.
    fn rank(&self) -> (usize, usize, Reverse<Vec<usize>>) {
        (
            self.cost,
            self.pieces.len(),
            Reverse(self.pieces.iter().map(|(s, e)| e - s).collect()),
        )
    }

    fn extend(&self, start: usize, end: usize, cost: usize) -> Self {
        let mut pieces = self.pieces.clone();
        pieces.push((start, end));
        Segmentation {
            cost: self.cost + cost,
            pieces,
        }
    }
}

/// Vocabulary driven identifier splitter.
#[derive(Debug)]
pub struct DictionaryBasedSplitter {
    vocabulary: Arc<Vocabulary>,
    analyzer: IdentifierAnalyzer,
}

impl DictionaryBasedSplitter {
    /// Create a splitter over a vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        DictionaryBasedSplitter {
            vocabulary,
            analyzer: IdentifierAnalyzer::new(),
        }
    }

    /// Split `word` into two or more lower-cased vocabulary words or digit runs.
    ///
    /// Returns `None` when no such segmentation covers the whole word.
    pub fn split(&self, word: &str) -> Option<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 2 || chars.len() > MAX_SPLIT_LENGTH {
            return None;
        }
        let n = chars.len();
        let boundaries = self.boundaries(word, n);

        let mut best: Vec<Option<Segmentation>> = vec![None; n + 1];
        best[0] = Some(Segmentation {
            cost: 0,
            pieces: Vec::new(),
        });

        for i in 0..n {
            let Some(current) = best[i].clone() else {
                continue;
            };

            if !chars[i].is_alphanumeric() {
                relax(&mut best, i + 1, current);
                continue;
            }

            for j in i + 1..=n {
                if !chars[j - 1].is_alphanumeric() {
                    break;
                }
                if !self.is_piece(&chars, i, j) {
                    continue;
                }
                let cost = if boundaries.contains(&i) && boundaries.contains(&j) {
                    1
                } else {
                    2
                };
                relax(&mut best, j, current.extend(i, j, cost));
            }
        }

        let segmentation = best[n].take()?;
        if segmentation.pieces.len() < 2 {
            return None;
        }
        let pieces: Vec<String> = segmentation
            .pieces
            .iter()
            .map(|&(s, e)| chars[s..e].iter().collect::<String>().to_lowercase())
            .collect();
        debug!(word, ?pieces, "split identifier");
        Some(pieces)
    }

    fn is_piece(&self, chars: &[char], start: usize, end: usize) -> bool {
        let piece = &chars[start..end];
        if piece.iter().all(|c| c.is_numeric()) {
            // only whole digit runs
            let starts_run = start == 0 || !chars[start - 1].is_numeric();
            let ends_run = end == chars.len() || !chars[end].is_numeric();
            return starts_run && ends_run;
        }
        if piece.len() < MIN_PIECE_LENGTH {
            return false;
        }
        let text: String = piece.iter().collect();
        self.vocabulary
            .contains(&text, DictionaryOption::IncludingStemming)
    }

    /// Char offsets where the identifier analyzer starts or ends a token.
    fn boundaries(&self, word: &str, len: usize) -> AHashSet<usize> {
        let mut boundaries = AHashSet::new();
        boundaries.insert(0);
        boundaries.insert(len);
        if let Ok(tokens) = self.analyzer.analyze(word) {
            for token in tokens {
                boundaries.insert(token.start_offset);
                boundaries.insert(token.end_offset);
            }
        }
        boundaries
    }
}

fn relax(best: &mut [Option<Segmentation>], at: usize, candidate: Segmentation) {
    let better = match &best[at] {
        Some(existing) => candidate.rank() < existing.rank(),
        None => true,
    };
    if better {
        best[at] = Some(candidate);
    }
}
