//! Query terms as handed over by the query parser.
//!
//! Quoted literals and search flags (`-test`, `+exact`, `file:cs`) are never
//! reformed; they pass through unchanged.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref FIELD_FLAG: Regex =
        Regex::new(r"^[A-Za-z]+:[^:\s]*$").expect("field flag pattern is valid");
}

/// Classification of a query term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TermKind {
    /// An ordinary search word.
    #[default]
    Plain,
    /// A quoted literal, matched verbatim.
    Quoted,
    /// A search flag or operator.
    Flag,
}

/// One term of a search query.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryTerm {
    pub text: String,
    pub kind: TermKind,
}

impl QueryTerm {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        QueryTerm {
            text: text.into(),
            kind: TermKind::Plain,
        }
    }

    pub fn quoted<S: Into<String>>(text: S) -> Self {
        QueryTerm {
            text: text.into(),
            kind: TermKind::Quoted,
        }
    }

    pub fn flag<S: Into<String>>(text: S) -> Self {
        QueryTerm {
            text: text.into(),
            kind: TermKind::Flag,
        }
    }

    /// Infer the kind of a raw term.
    ///
    /// Quoted: wrapped in double quotes. Flag: starts with `-` or `+`, or has a
    /// `name:` prefix. Everything else is plain.
    pub fn classify(raw: &str) -> Self {
        let kind = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            TermKind::Quoted
        } else if (raw.len() > 1 && (raw.starts_with('-') || raw.starts_with('+')))
            || FIELD_FLAG.is_match(raw)
        {
            TermKind::Flag
        } else {
            TermKind::Plain
        };
        QueryTerm {
            text: raw.to_string(),
            kind,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TermKind::Plain
    }
}

/// Split a raw query on whitespace, keeping quoted phrases together.
///
/// An unterminated quote runs to the end of the query.
pub fn parse_query(raw: &str) -> Vec<QueryTerm> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in raw.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                terms.push(QueryTerm::classify(&current));
                current.clear();
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        terms.push(QueryTerm::classify(&current));
    }
    terms
}
