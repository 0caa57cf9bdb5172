//! Lowercase filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            if token.text.chars().any(char::is_uppercase) {
                token.text = token.text.to_lowercase();
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::with_offsets("XML", 0, 0, 3),
            Token::new("Element", 1),
            Token::new("größe", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "xml");
        assert_eq!((result[0].start_offset, result[0].end_offset), (0, 3));
        assert_eq!(result[1].text, "element");
        assert_eq!(result[2].text, "größe");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
