//! The set of words known to the local code base.
//!
//! Reads are frequent (every query term is checked) while writes only happen
//! when new identifiers are indexed, so the word and stem sets sit behind a
//! single [`RwLock`].

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::analysis::stemmer::{Stemmer, SuffixStemmer};
use crate::error::Result;

/// How a vocabulary lookup treats inflected forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DictionaryOption {
    /// Only the exact (lower-cased) word counts.
    Exact,
    /// A word also counts when it shares a stem with a known word.
    #[default]
    IncludingStemming,
}

#[derive(Debug, Default)]
struct VocabularyInner {
    words: AHashSet<String>,
    stems: AHashSet<String>,
}

/// Lower-cased word set with a stem index.
pub struct Vocabulary {
    inner: RwLock<VocabularyInner>,
    stemmer: Arc<dyn Stemmer>,
}

impl Vocabulary {
    /// Create an empty vocabulary using the default suffix stemmer.
    pub fn new() -> Self {
        Self::with_stemmer(Arc::new(SuffixStemmer::new()))
    }

    /// Create an empty vocabulary with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        Vocabulary {
            inner: RwLock::new(VocabularyInner::default()),
            stemmer,
        }
    }

    /// Create a vocabulary containing the given words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = Self::new();
        vocabulary.add_words(words);
        vocabulary
    }

    /// Load a word list: one word per line, blank lines and `#` comments skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let vocabulary = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        info!(path = %path.display(), words = vocabulary.len(), "loaded vocabulary");
        Ok(vocabulary)
    }

    /// Load a word list, falling back to an empty vocabulary when it cannot be read.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(vocabulary) => vocabulary,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "vocabulary unavailable, starting empty");
                Self::new()
            }
        }
    }

    /// Add words. Empty strings are ignored.
    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inner = self.inner.write();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if !inner.words.contains(&word) {
                inner.stems.insert(self.stemmer.stem(&word));
                inner.words.insert(word);
            }
        }
    }

    /// Check whether a word is known.
    pub fn contains(&self, word: &str, option: DictionaryOption) -> bool {
        let word = word.to_lowercase();
        let inner = self.inner.read();
        if inner.words.contains(&word) {
            return true;
        }
        match option {
            DictionaryOption::Exact => false,
            DictionaryOption::IncludingStemming => inner.stems.contains(&self.stemmer.stem(&word)),
        }
    }

    /// Stem a word with this vocabulary's stemmer.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.read().words.len()
    }

    /// Whether no words are known.
    pub fn is_empty(&self) -> bool {
        self.inner.read().words.is_empty()
    }

    /// Snapshot of all words, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.inner.read().words.iter().cloned().collect();
        words.sort();
        words
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vocabulary")
            .field("words", &self.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}
