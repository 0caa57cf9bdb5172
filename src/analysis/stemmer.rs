//! Stemming for vocabulary lookups.
//!
//! Stems are only ever compared with other stems produced by the same
//! stemmer, so a light suffix stripper is enough: "parsing", "parser" and
//! "parsed" all reduce to "pars".

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

const DEFAULT_SUFFIXES: &[&str] = &[
    "ing", "ed", "er", "ers", "est", "ly", "s", "es", "ies", "ied", "tion", "tions", "sion",
    "able", "ible", "ment", "ness", "ful",
];

/// Stemmer that removes common English suffixes, longest first.
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    suffixes: Vec<String>,
}

impl Default for SuffixStemmer {
    fn default() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }
}

impl SuffixStemmer {
    /// Create a stemmer with the default English suffixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stemmer with custom suffixes.
    pub fn with_suffixes(mut suffixes: Vec<String>) -> Self {
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.len()));
        SuffixStemmer { suffixes }
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if word.chars().count() <= 3 {
            return word;
        }

        for suffix in &self.suffixes {
            if word.len() > suffix.len() + 2 && word.ends_with(suffix.as_str()) {
                return word[..word.len() - suffix.len()].to_string();
            }
        }

        word
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
