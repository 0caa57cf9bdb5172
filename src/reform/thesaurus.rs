//! Thesaurus lookups.
//!
//! A thesaurus file is a JSON array of synonym groups; every term of a group
//! is a synonym of every other term in it:
//!
//! ```json
//! [
//!   ["delete", "remove", "erase"],
//!   ["initialize", "init", "setup"]
//! ]
//! ```
//!
//! Lookups try the lower-cased word first and fall back to its stem, so
//! "searching" finds the synonyms of "search".

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;
use tracing::{info, warn};

use crate::analysis::stemmer::{Stemmer, SuffixStemmer};
use crate::error::Result;
use crate::spelling::vocabulary::{DictionaryOption, Vocabulary};

use super::reformer::QueryReformer;
use super::types::{ReformCategory, ReformedWord};

/// Immutable word → synonyms map.
#[derive(Debug, Default)]
pub struct Thesaurus {
    synonyms: AHashMap<String, Vec<String>>,
    by_stem: AHashMap<String, Vec<String>>,
    stemmer: SuffixStemmer,
}

impl Thesaurus {
    /// Build a thesaurus from synonym groups. Terms are lower-cased.
    pub fn from_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut thesaurus = Thesaurus::default();
        for group in groups {
            let terms: Vec<String> = group
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            thesaurus.add_group(&terms);
        }
        thesaurus
    }

    fn add_group(&mut self, terms: &[String]) {
        for term in terms {
            let others = terms.iter().filter(|other| *other != term);
            let stem = self.stemmer.stem(term);
            for other in others {
                push_unique(self.synonyms.entry(term.clone()).or_default(), other);
                push_unique(self.by_stem.entry(stem.clone()).or_default(), other);
            }
        }
    }

    /// Load a thesaurus file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content)?;
        let thesaurus = Self::from_groups(groups);
        info!(path = %path.display(), entries = thesaurus.len(), "loaded thesaurus");
        Ok(thesaurus)
    }

    /// Load a thesaurus file, falling back to an empty thesaurus when it cannot be read.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(thesaurus) => thesaurus,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "thesaurus unavailable, starting empty");
                Self::default()
            }
        }
    }

    /// Synonyms of `word`, falling back to synonyms of its stem.
    pub fn synonyms(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let found = self
            .synonyms
            .get(&word)
            .or_else(|| self.by_stem.get(&self.stemmer.stem(&word)));
        match found {
            Some(synonyms) => synonyms.iter().filter(|s| **s != word).cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Number of words with synonyms.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, term: &str) {
    if !list.iter().any(|t| t == term) {
        list.push(term.to_string());
    }
}

/// Proposes thesaurus synonyms of a term.
#[derive(Debug)]
pub struct ThesaurusReformer {
    thesaurus: Arc<Thesaurus>,
    category: ReformCategory,
    vocabulary: Option<Arc<Vocabulary>>,
}

impl ThesaurusReformer {
    /// Create a reformer scoring its candidates as `category`.
    pub fn new(thesaurus: Arc<Thesaurus>, category: ReformCategory) -> Self {
        ThesaurusReformer {
            thesaurus,
            category,
            vocabulary: None,
        }
    }

    /// Only propose synonyms whose words all occur in `vocabulary`.
    pub fn with_vocabulary(mut self, vocabulary: Arc<Vocabulary>) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    fn is_known(&self, synonym: &str) -> bool {
        match &self.vocabulary {
            Some(vocabulary) => synonym
                .split_whitespace()
                .all(|w| vocabulary.contains(w, DictionaryOption::IncludingStemming)),
            None => true,
        }
    }
}

impl QueryReformer for ThesaurusReformer {
    fn reform(&self, word: &str, _context: &[String]) -> Vec<ReformedWord> {
        self.thesaurus
            .synonyms(word)
            .into_iter()
            .filter(|synonym| self.is_known(synonym))
            .map(|synonym| {
                ReformedWord::new(
                    word,
                    synonym.split_whitespace().map(str::to_string).collect(),
                    self.category,
                    self.category.base_score(),
                )
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        match self.category {
            ReformCategory::DomainThesaurus => "domain_thesaurus",
            ReformCategory::GeneralThesaurus => "general_thesaurus",
            _ => "thesaurus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thesaurus() -> Thesaurus {
        Thesaurus::from_groups(vec![
            vec!["delete", "remove", "erase"],
            vec!["Init", "initialize", "set up"],
            vec!["remove", "discard"],
        ])
    }

    #[test]
    fn test_synonym_groups() {
        let thesaurus = thesaurus();
        assert_eq!(thesaurus.synonyms("delete"), vec!["remove", "erase"]);
        assert_eq!(
            thesaurus.synonyms("remove"),
            vec!["delete", "erase", "discard"]
        );
        assert_eq!(thesaurus.synonyms("INIT"), vec!["initialize", "set up"]);
        assert!(thesaurus.synonyms("unknown").is_empty());
        assert_eq!(thesaurus.len(), 7);
    }

    #[test]
    fn test_stem_fallback() {
        let thesaurus = Thesaurus::from_groups([["search", "find"]]);
        assert_eq!(thesaurus.synonyms("searching"), vec!["find"]);
        assert_eq!(thesaurus.synonyms("finds"), vec!["search"]);
    }

    #[test]
    fn test_reformer_scores_by_category() {
        let reformer = ThesaurusReformer::new(Arc::new(thesaurus()), ReformCategory::DomainThesaurus);
        let reformed = reformer.reform("init", &[]);

        assert_eq!(reformed.len(), 2);
        assert_eq!(reformed[1].new_terms, vec!["set", "up"]);
        assert_eq!(reformed[0].score, 0.7);
        assert_eq!(reformer.name(), "domain_thesaurus");
    }

    #[test]
    fn test_vocabulary_filter() {
        let vocabulary = Arc::new(Vocabulary::from_words(["erase"]));
        let reformer = ThesaurusReformer::new(Arc::new(thesaurus()), ReformCategory::GeneralThesaurus)
            .with_vocabulary(vocabulary);

        let reformed = reformer.reform("delete", &[]);
        assert_eq!(reformed.len(), 1);
        assert_eq!(reformed[0].replacement_text(), "erase");
        assert_eq!(reformed[0].score, 0.5);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thesaurus.json");
        fs::write(&path, r#"[["find", "search", "lookup"]]"#).unwrap();

        let thesaurus = Thesaurus::from_file(&path).unwrap();
        assert_eq!(thesaurus.synonyms("lookup"), vec!["find", "search"]);

        fs::write(&path, "not json").unwrap();
        assert!(Thesaurus::from_file(&path).is_err());
        assert!(Thesaurus::load_or_empty(&path).is_empty());
    }
}
