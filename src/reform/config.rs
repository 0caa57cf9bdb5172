//! Limits for the reformation pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TermsmithError};

/// Configuration for [`QueryReformerManager`](super::manager::QueryReformerManager).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReformerConfig {
    /// Alternatives kept per query term after merging all strategies.
    pub max_candidates_per_term: usize,
    /// Queries kept while combining terms, and returned at the end.
    pub max_reformed_queries: usize,
    /// Corrections proposed by the typo strategy.
    pub max_typo_suggestions: usize,
    /// Largest edit distance a typo correction may have.
    pub max_edit_distance: usize,
    /// Related words proposed by the co-occurrence strategy.
    pub max_cooccurrence_suggestions: usize,
    /// Terms shorter than this (in chars) are never reformed. The default of 1
    /// reforms every plain term outside the vocabulary.
    pub min_term_length: usize,
    /// Only propose synonyms that occur in the local vocabulary.
    pub thesaurus_requires_vocabulary: bool,
}

impl Default for ReformerConfig {
    fn default() -> Self {
        ReformerConfig {
            max_candidates_per_term: 5,
            max_reformed_queries: 10,
            max_typo_suggestions: 3,
            max_edit_distance: 2,
            max_cooccurrence_suggestions: 3,
            min_term_length: 1,
            thesaurus_requires_vocabulary: true,
        }
    }
}

impl ReformerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ReformerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero limits.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_candidates_per_term", self.max_candidates_per_term),
            ("max_reformed_queries", self.max_reformed_queries),
            ("max_typo_suggestions", self.max_typo_suggestions),
            ("max_cooccurrence_suggestions", self.max_cooccurrence_suggestions),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(TermsmithError::config(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReformerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_candidates_per_term, 5);
        assert_eq!(config.max_reformed_queries, 10);
        assert_eq!(config.min_term_length, 1);
        assert!(config.thesaurus_requires_vocabulary);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = ReformerConfig {
            max_reformed_queries: 0,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Configuration error: max_reformed_queries must be positive"
        );
    }

    #[test]
    fn test_partial_json() {
        let config: ReformerConfig =
            serde_json::from_str(r#"{"max_edit_distance": 1, "min_term_length": 3}"#).unwrap();
        assert_eq!(config.max_edit_distance, 1);
        assert_eq!(config.min_term_length, 3);
        assert_eq!(config.max_typo_suggestions, 3);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reformer.json");
        fs::write(&path, r#"{"max_candidates_per_term": 2}"#).unwrap();
        assert_eq!(ReformerConfig::from_file(&path).unwrap().max_candidates_per_term, 2);

        fs::write(&path, r#"{"max_candidates_per_term": 0}"#).unwrap();
        assert!(ReformerConfig::from_file(&path).is_err());
    }
}
