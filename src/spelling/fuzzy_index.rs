//! Bigram index for finding likely corrections of misspelled words.
//!
//! Every indexed word is stored under each of its character n-grams. A lookup
//! collects all words sharing at least one n-gram with the query, then ranks
//! them by number of shared n-grams (descending), Levenshtein distance
//! (ascending) and finally the word itself so results are deterministic.
//!
//! # Examples
//!
//! ```
//! use termsmith::spelling::FuzzyWordIndex;
//!
//! let index = FuzzyWordIndex::new();
//! index.add_words(["user", "users", "use", "buffer"]);
//!
//! let similar = index.find_similar_words("usr");
//! assert_eq!(similar[0], "user");
//! ```

use std::cmp::Reverse;

use ahash::{AHashMap, AHashSet};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TermsmithError};
use crate::spelling::levenshtein::levenshtein_distance;
use crate::spelling::vocabulary::Vocabulary;

/// Configuration for [`FuzzyWordIndex`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyIndexConfig {
    /// Length of the character shingles words are indexed under.
    pub gram_size: usize,
    /// Maximum number of suggestions returned by a lookup.
    pub max_results: usize,
}

impl Default for FuzzyIndexConfig {
    fn default() -> Self {
        FuzzyIndexConfig {
            gram_size: 2,
            max_results: 10,
        }
    }
}

impl FuzzyIndexConfig {
    /// Reject zero-sized grams and result limits.
    pub fn validate(&self) -> Result<()> {
        if self.gram_size == 0 {
            return Err(TermsmithError::config("gram_size must be positive"));
        }
        if self.max_results == 0 {
            return Err(TermsmithError::config("max_results must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct GramTable {
    grams: AHashMap<String, AHashSet<String>>,
    words: usize,
}

/// N-gram index over known words.
#[derive(Debug)]
pub struct FuzzyWordIndex {
    config: FuzzyIndexConfig,
    table: Mutex<GramTable>,
}

impl FuzzyWordIndex {
    /// Create an empty index with bigrams and ten results per lookup.
    pub fn new() -> Self {
        FuzzyWordIndex {
            config: FuzzyIndexConfig::default(),
            table: Mutex::new(GramTable::default()),
        }
    }

    /// Create an empty index with a custom configuration.
    pub fn with_config(config: FuzzyIndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(FuzzyWordIndex {
            config,
            table: Mutex::new(GramTable::default()),
        })
    }

    /// Create an index over every word of a vocabulary.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let index = Self::new();
        index.add_words(vocabulary.words());
        index
    }

    /// Index words. Words are lower-cased; empty strings are ignored.
    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = self.table.lock();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let mut is_new = false;
            for gram in grams(&word, self.config.gram_size) {
                is_new |= table.grams.entry(gram).or_default().insert(word.clone());
            }
            if is_new {
                table.words += 1;
            }
        }
    }

    /// Words similar to `word`, best first. Unknown shingles yield an empty list.
    pub fn find_similar_words(&self, word: &str) -> Vec<String> {
        let query = word.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut overlap: AHashMap<&str, usize> = AHashMap::new();
        let table = self.table.lock();
        let mut seen = AHashSet::new();
        for gram in grams(&query, self.config.gram_size) {
            // a gram repeated in the query only counts once
            if !seen.insert(gram.clone()) {
                continue;
            }
            if let Some(words) = table.grams.get(&gram) {
                for candidate in words {
                    *overlap.entry(candidate.as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(usize, usize, &str)> = overlap
            .into_iter()
            .map(|(candidate, shared)| (shared, levenshtein_distance(&query, candidate), candidate))
            .collect();
        ranked.sort_by_key(|&(shared, distance, candidate)| (Reverse(shared), distance, candidate));

        ranked
            .into_iter()
            .take(self.config.max_results)
            .map(|(_, _, candidate)| candidate.to_string())
            .collect()
    }

    /// Number of distinct indexed words.
    pub fn len(&self) -> usize {
        self.table.lock().words
    }

    /// Whether no words are indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The active configuration.
    pub fn config(&self) -> &FuzzyIndexConfig {
        &self.config
    }
}

impl Default for FuzzyWordIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Character n-grams of a word; words shorter than `n` are their own single gram.
fn grams(word: &str, n: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= n {
        return vec![word.to_string()];
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams() {
        assert_eq!(grams("user", 2), vec!["us", "se", "er"]);
        assert_eq!(grams("a", 2), vec!["a"]);
        assert_eq!(grams("ab", 2), vec!["ab"]);
    }

    #[test]
    fn test_ranking_by_overlap_then_distance() {
        let index = FuzzyWordIndex::new();
        index.add_words(["user", "users", "buffer", "sequence"]);

        let similar = index.find_similar_words("usr");
        // "user" and "users" share only "us"; "user" is closer by edit distance.
        assert_eq!(similar[0], "user");
        assert_eq!(similar[1], "users");
        assert!(!similar.contains(&"buffer".to_string()));
    }

    #[test]
    fn test_exact_word_ranks_first() {
        let index = FuzzyWordIndex::new();
        index.add_words(["user", "users", "username", "use", "a"]);

        let similar = index.find_similar_words("user");
        assert_eq!(similar[0], "user");
        assert_eq!(index.find_similar_words("User")[0], "user");
    }

    #[test]
    fn test_word_breaks_remaining_ties() {
        let index = FuzzyWordIndex::new();
        index.add_words(["cb", "ab"]);
        // both share nothing with "xy"
        assert!(index.find_similar_words("xy").is_empty());

        index.add_words(["xa", "xb"]);
        assert_eq!(index.find_similar_words("xc"), Vec::<String>::new());
        assert_eq!(index.find_similar_words("xaxb"), vec!["xa", "xb"]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let index = FuzzyWordIndex::new();
        index.add_words(["Widget"]);
        assert_eq!(index.find_similar_words("WIDGIT"), vec!["widget"]);
    }

    #[test]
    fn test_result_limit() {
        let index = FuzzyWordIndex::with_config(FuzzyIndexConfig {
            gram_size: 2,
            max_results: 3,
        })
        .unwrap();
        index.add_words((0..20).map(|i| format!("ab{i}")));
        assert_eq!(index.find_similar_words("ab").len(), 3);
        assert_eq!(index.len(), 20);
    }

    #[test]
    fn test_invalid_config() {
        let config = FuzzyIndexConfig {
            gram_size: 0,
            max_results: 10,
        };
        assert!(FuzzyWordIndex::with_config(config).is_err());
    }

    #[test]
    fn test_from_vocabulary() {
        let vocabulary = Vocabulary::from_words(["parser", "token"]);
        let index = FuzzyWordIndex::from_vocabulary(&vocabulary);
        assert_eq!(index.len(), 2);
        assert_eq!(index.find_similar_words("parsr")[0], "parser");
    }
}
