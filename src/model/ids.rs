use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote service.
///
/// The service hands out numeric ids, but nothing in the API promises that,
/// so string ids are accepted too and round-trip in the shape they arrived.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Zero, negative, and blank ids are never produced by the service.
    pub fn is_valid(&self) -> bool {
        match self {
            RecordId::Number(n) => *n > 0,
            RecordId::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Parses user input (CLI arguments); digits become numeric ids.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_keep_their_wire_shape() {
        let n: RecordId = serde_json::from_str("5").unwrap();
        assert_eq!(n, RecordId::Number(5));
        assert_eq!(serde_json::to_string(&n).unwrap(), "5");

        let t: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(t, RecordId::Text("abc".to_string()));
        assert_eq!(t.to_string(), "abc");
    }

    #[test]
    fn falsy_ids_are_invalid() {
        assert!(!RecordId::Number(0).is_valid());
        assert!(!RecordId::Number(-3).is_valid());
        assert!(!RecordId::Text("  ".to_string()).is_valid());
        assert!(RecordId::Number(3).is_valid());
        assert!(RecordId::parse(" 42 ").is_valid());
        assert_eq!(RecordId::parse("42"), RecordId::Number(42));
        assert_eq!(RecordId::parse("x-1"), RecordId::Text("x-1".to_string()));
    }
}
