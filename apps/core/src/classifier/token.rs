//! Request token.
//!
//! Elements of the `data` array may be any JSON value; classification only
//! ever looks at their string form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single input element, reduced to its string representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(s: impl Into<String>) -> Self {
        Token(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Value> for Token {
    /// Strings are kept verbatim and numbers keep their source digits.
    /// `null` and booleans render as `None`, `True` and `False`; arrays and
    /// objects use their compact JSON text (`[1,"a"]`).
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Token(s),
            Value::Null => Token::new("None"),
            Value::Bool(true) => Token::new("True"),
            Value::Bool(false) => Token::new("False"),
            other => Token(other.to_string()),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::new(s)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Token::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_values_are_verbatim() {
        assert_eq!(Token::from(json!("ABcD")).as_str(), "ABcD");
        assert_eq!(Token::from(json!(" 12 ")).as_str(), " 12 ");
    }

    #[test]
    fn test_numbers_use_json_rendering() {
        assert_eq!(Token::from(json!(334)).as_str(), "334");
        assert_eq!(Token::from(json!(-7)).as_str(), "-7");
        assert_eq!(Token::from(json!(1.5)).as_str(), "1.5");
    }

    #[test]
    fn test_null_and_booleans_use_capitalized_names() {
        assert_eq!(Token::from(json!(null)).as_str(), "None");
        assert_eq!(Token::from(json!(true)).as_str(), "True");
        assert_eq!(Token::from(json!(false)).as_str(), "False");
    }

    #[test]
    fn test_containers_use_compact_json() {
        assert_eq!(Token::from(json!([1, "a"])).as_str(), "[1,\"a\"]");
        assert_eq!(Token::from(json!({"k": null})).as_str(), "{\"k\":null}");
    }

    #[test]
    fn test_deserialize_mixed_array() {
        let tokens: Vec<Token> = serde_json::from_str(r#"["a", 1, false]"#).unwrap();
        assert_eq!(tokens, vec![Token::new("a"), Token::new("1"), Token::new("False")]);
    }

    #[test]
    fn test_deserialize_keeps_digits_beyond_u64() {
        let tokens: Vec<Token> =
            serde_json::from_str("[123456789012345678901234567890, 18446744073709551616]").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new("123456789012345678901234567890"),
                Token::new("18446744073709551616"),
            ]
        );
    }
}
