//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use termsmith::analysis::analyzer::Analyzer;
//! use termsmith::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use termsmith::analysis::tokenizer::WordDelimiterTokenizer;
//! use termsmith::analysis::token_filter::LowercaseFilter;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WordDelimiterTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()));
//!
//! let tokens: Vec<_> = analyzer.analyze("PowerShot").unwrap().collect();
//! assert_eq!(tokens[0].text, "power");
//! assert_eq!(tokens[1].text, "shot");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
