//! Reformed words and queries.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// How a query term was changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReformCategory {
    /// The term is kept as typed.
    Unchanged,
    /// A run-together identifier split into words.
    Split,
    /// A misspelling corrected against the local vocabulary.
    Typo,
    /// A synonym from the software-engineering thesaurus.
    DomainThesaurus,
    /// A synonym from the general English thesaurus.
    GeneralThesaurus,
    /// A word that co-occurs with the other query terms in the code base.
    CoOccurrence,
}

impl ReformCategory {
    /// Confidence assigned to candidates of this category.
    pub fn base_score(self) -> f64 {
        match self {
            ReformCategory::Unchanged => 1.0,
            ReformCategory::Split => 0.9,
            ReformCategory::Typo => 0.85,
            ReformCategory::DomainThesaurus => 0.7,
            ReformCategory::CoOccurrence => 0.6,
            ReformCategory::GeneralThesaurus => 0.5,
        }
    }
}

/// One alternative for a single query term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReformedWord {
    /// The term as it appeared in the query.
    pub original: String,
    /// The replacement terms; more than one for splits and multi-word synonyms.
    pub new_terms: Vec<String>,
    /// Which strategy produced this alternative.
    pub category: ReformCategory,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

impl ReformedWord {
    /// Create a reformed word.
    pub fn new<S: Into<String>>(
        original: S,
        new_terms: Vec<String>,
        category: ReformCategory,
        score: f64,
    ) -> Self {
        ReformedWord {
            original: original.into(),
            new_terms,
            category,
            score,
        }
    }

    /// The identity alternative: the term itself with full confidence.
    pub fn unchanged<S: Into<String>>(word: S) -> Self {
        let word = word.into();
        ReformedWord {
            new_terms: vec![word.clone()],
            original: word,
            category: ReformCategory::Unchanged,
            score: ReformCategory::Unchanged.base_score(),
        }
    }

    /// The replacement terms joined by a space.
    pub fn replacement_text(&self) -> String {
        self.new_terms.join(" ")
    }

    /// Whether this is the identity alternative.
    pub fn is_unchanged(&self) -> bool {
        self.category == ReformCategory::Unchanged
    }
}

/// Collapse alternatives with the same replacement text (ignoring case).
///
/// The highest scoring duplicate survives, the earliest one on ties, and the
/// result keeps first-occurrence order.
pub fn remove_redundance(words: Vec<ReformedWord>) -> Vec<ReformedWord> {
    let mut slots: AHashMap<String, usize> = AHashMap::new();
    let mut kept: Vec<ReformedWord> = Vec::with_capacity(words.len());

    for word in words {
        let key = word.replacement_text().to_lowercase();
        match slots.get(&key) {
            Some(&slot) => {
                if word.score > kept[slot].score {
                    kept[slot] = word;
                }
            }
            None => {
                slots.insert(key, kept.len());
                kept.push(word);
            }
        }
    }
    kept
}

/// A complete alternative query: one reformed word per original term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReformedQuery {
    /// Alternatives in original term order.
    pub words: Vec<ReformedWord>,
    /// Product of the word scores.
    pub score: f64,
}

impl ReformedQuery {
    /// Create a query from its words, scoring it by the product of their scores.
    pub fn new(words: Vec<ReformedWord>) -> Self {
        let score = words.iter().map(|w| w.score).product();
        ReformedQuery { words, score }
    }

    /// This query extended by one more word.
    pub fn extended(&self, word: ReformedWord) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend(self.words.iter().cloned());
        let score = self.score * word.score;
        words.push(word);
        ReformedQuery { words, score }
    }

    /// All replacement terms in order.
    pub fn terms(&self) -> Vec<&str> {
        self.words
            .iter()
            .flat_map(|w| w.new_terms.iter().map(String::as_str))
            .collect()
    }

    /// The terms joined by spaces, ready to hand to a search engine.
    pub fn query_string(&self) -> String {
        self.terms().join(" ")
    }

    /// The original query terms.
    pub fn original_terms(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.original.as_str()).collect()
    }

    /// Whether no term was changed.
    pub fn is_original(&self) -> bool {
        self.words.iter().all(ReformedWord::is_unchanged)
    }

    /// Human readable summary of the changes, e.g. `Corrected "usr" to "user"`.
    pub fn explanation(&self) -> String {
        self.words
            .iter()
            .filter(|w| !w.is_unchanged())
            .map(|w| {
                let replacement = w.replacement_text();
                match w.category {
                    ReformCategory::Split => {
                        format!("Split \"{}\" into \"{}\"", w.original, replacement)
                    }
                    ReformCategory::Typo => {
                        format!("Corrected \"{}\" to \"{}\"", w.original, replacement)
                    }
                    ReformCategory::DomainThesaurus | ReformCategory::GeneralThesaurus => {
                        format!("Replaced \"{}\" with synonym \"{}\"", w.original, replacement)
                    }
                    ReformCategory::CoOccurrence => format!(
                        "Replaced \"{}\" with related term \"{}\"",
                        w.original, replacement
                    ),
                    ReformCategory::Unchanged => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ReformedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_string())
    }
}
