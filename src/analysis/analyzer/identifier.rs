//! Analyzer for source-code identifiers.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, WordDelimiterFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::analysis::word_delimiter::WordDelimiterConfig;
use crate::error::Result;

/// Whitespace tokenizer, word delimiter with catenation, lowercase.
///
/// `"wi-fi PowerShot"` analyzes to `wi wifi wi-fi fi power powershot shot`.
#[derive(Clone, Debug)]
pub struct IdentifierAnalyzer {
    inner: PipelineAnalyzer,
}

impl IdentifierAnalyzer {
    /// Create an analyzer that emits parts and word/number catenations.
    pub fn new() -> Self {
        Self::with_config(WordDelimiterConfig::indexing())
    }

    /// Create an analyzer with explicit word delimiter flags.
    pub fn with_config(config: WordDelimiterConfig) -> Self {
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(WordDelimiterFilter::with_config(config)))
            .add_filter(Arc::new(LowercaseFilter::new()));
        IdentifierAnalyzer { inner }
    }
}

impl Default for IdentifierAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for IdentifierAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "identifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_identifier_analyzer() {
        let analyzer = IdentifierAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("wi-fi PowerShot").unwrap().collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(
            texts,
            vec!["wi", "wifi", "wi-fi", "fi", "power", "powershot", "shot"]
        );
        assert_eq!(analyzer.name(), "identifier");
    }

    #[test]
    fn test_offsets_refer_to_input() {
        let analyzer = IdentifierAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("x getName").unwrap().collect();
        let name = tokens.iter().find(|t| t.text == "name").unwrap();
        assert_eq!((name.start_offset, name.end_offset), (5, 9));
    }
}
