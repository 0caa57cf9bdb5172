//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Offsets are char offsets, matching the offsets produced by the word
/// delimiter so the two can be chained.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    fn detect_token_type(word: &str) -> TokenType {
        if word.chars().all(|c| c.is_numeric()) {
            TokenType::Number
        } else {
            TokenType::Word
        }
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut start = 0;

        for (index, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    let token_type = Self::detect_token_type(&word);
                    tokens.push(
                        Token::with_offsets(std::mem::take(&mut word), tokens.len(), start, index)
                            .with_token_type(token_type),
                    );
                }
            } else {
                if word.is_empty() {
                    start = index;
                }
                word.push(ch);
            }
        }
        if !word.is_empty() {
            let end = start + word.chars().count();
            let token_type = Self::detect_token_type(&word);
            tokens.push(
                Token::with_offsets(word, tokens.len(), start, end).with_token_type(token_type),
            );
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 12));
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_char_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("größe 42").unwrap().collect();

        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 5));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (6, 8));
        assert_eq!(tokens[1].token_type, TokenType::Number);
    }

    #[test]
    fn test_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("   \n ").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
