//! Token classification.
//!
//! Each token lands in exactly one of four buckets, tested in order:
//! signed integer, ASCII-alphabetic word, everything else. Letters are
//! harvested from every token independently of its bucket.

use bigdecimal::BigDecimal;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

use super::concat::derive_concat_string;
use super::token::Token;

// Compiled once; the patterns are literals so a failure here is a bug.
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("Invalid regex: integer pattern"));

static ALPHA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("Invalid regex: alphabetic pattern"));

/// Output of a single classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    /// Alphabetic tokens, uppercased.
    pub alphabets: Vec<String>,
    /// Tokens matching neither pattern, unchanged.
    pub special_characters: Vec<String>,
    /// Decimal rendering of the integer total.
    pub sum: String,
    pub concat_string: String,
}

/// Faults raised while classifying a token list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("token '{token}' matched the integer pattern but could not be parsed: {reason}")]
    MalformedInteger { token: String, reason: String },
}

/// Stateless classifier; one instance can serve any number of requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenClassifier;

impl TokenClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies `tokens` in order.
    ///
    /// Integers are summed with arbitrary precision and re-rendered from
    /// the parsed value, so `"007"` becomes `"7"` and `"-0"` becomes `"0"`.
    pub fn classify(&self, tokens: &[Token]) -> Result<ClassificationResult, ClassifyError> {
        let mut odd_numbers = Vec::new();
        let mut even_numbers = Vec::new();
        let mut alphabets = Vec::new();
        let mut special_characters = Vec::new();
        let mut total = BigDecimal::from(0);
        let mut letters_in_input = Vec::new();

        for token in tokens {
            let s = token.as_str();

            letters_in_input.extend(s.chars().filter(char::is_ascii_alphabetic));

            if INTEGER_PATTERN.is_match(s) {
                let n = parse_integer(s)?;
                let rendered = n.to_string();
                total += n;
                if is_even(&rendered) {
                    even_numbers.push(rendered);
                } else {
                    odd_numbers.push(rendered);
                }
            } else if ALPHA_PATTERN.is_match(s) {
                alphabets.push(s.to_ascii_uppercase());
            } else {
                special_characters.push(s.to_string());
            }
        }

        Ok(ClassificationResult {
            odd_numbers,
            even_numbers,
            alphabets,
            special_characters,
            sum: total.to_string(),
            concat_string: derive_concat_string(&letters_in_input),
        })
    }
}

/// Defensive guard: callers only pass strings matching `INTEGER_PATTERN`,
/// which always parse.
fn parse_integer(s: &str) -> Result<BigDecimal, ClassifyError> {
    BigDecimal::from_str(s).map_err(|e| ClassifyError::MalformedInteger {
        token: s.to_string(),
        reason: e.to_string(),
    })
}

/// Parity of a rendered integer is the parity of its last digit.
fn is_even(rendered: &str) -> bool {
    matches!(
        rendered.as_bytes().last(),
        Some(b'0' | b'2' | b'4' | b'6' | b'8')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<Token> {
        items.iter().map(|s| Token::from(*s)).collect()
    }

    #[test]
    fn test_leading_zeros_are_normalized() {
        let result = TokenClassifier::new().classify(&tokens(&["007", "0010"])).unwrap();
        assert_eq!(result.odd_numbers, vec!["7"]);
        assert_eq!(result.even_numbers, vec!["10"]);
        assert_eq!(result.sum, "17");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let result = TokenClassifier::new().classify(&tokens(&["-0"])).unwrap();
        assert_eq!(result.even_numbers, vec!["0"]);
        assert_eq!(result.sum, "0");
    }

    #[test]
    fn test_negative_integers_reduce_the_total() {
        let result = TokenClassifier::new().classify(&tokens(&["-3", "10", "-4"])).unwrap();
        assert_eq!(result.odd_numbers, vec!["-3"]);
        assert_eq!(result.even_numbers, vec!["10", "-4"]);
        assert_eq!(result.sum, "3");
    }

    #[test]
    fn test_plus_sign_is_not_an_integer() {
        let result = TokenClassifier::new().classify(&tokens(&["+5"])).unwrap();
        assert!(result.odd_numbers.is_empty());
        assert_eq!(result.special_characters, vec!["+5"]);
    }

    #[test]
    fn test_large_integers_do_not_wrap() {
        let big = "123456789012345678901234567890";
        let result = TokenClassifier::new().classify(&tokens(&[big, big, "1"])).unwrap();
        assert_eq!(result.sum, "246913578024691357802469135781");
        assert_eq!(result.even_numbers, vec![big, big]);
    }

    #[test]
    fn test_mixed_token_is_special_but_feeds_letters() {
        let result = TokenClassifier::new().classify(&tokens(&["12a", "b"])).unwrap();
        assert_eq!(result.special_characters, vec!["12a"]);
        assert_eq!(result.alphabets, vec!["B"]);
        assert_eq!(result.concat_string, "Ba");
    }

    #[test]
    fn test_non_ascii_letters_are_special_and_not_harvested() {
        let result = TokenClassifier::new().classify(&tokens(&["é", "١٢"])).unwrap();
        assert_eq!(result.special_characters, vec!["é", "١٢"]);
        assert_eq!(result.concat_string, "");
        assert_eq!(result.sum, "0");
    }

    #[test]
    fn test_trailing_newline_is_not_an_integer() {
        let result = TokenClassifier::new().classify(&tokens(&["5\n"])).unwrap();
        assert_eq!(result.special_characters, vec!["5\n"]);
    }

    #[test]
    fn test_parity_helper() {
        assert!(is_even("0"));
        assert!(is_even("-12"));
        assert!(!is_even("-1"));
        assert!(!is_even("339"));
    }
}
