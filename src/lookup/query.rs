//! Query normalization
//!
//! Turns raw user input into the canonical query form used by the matcher.
//! Normalization is deliberately minimal: trim plus ASCII-agnostic
//! lowercasing, nothing else. No Unicode folding, no interior whitespace
//! collapsing; the matching behavior depends on the input staying otherwise
//! untouched.

use crate::error::AppError;

/// Canonical query form, constructed once per lookup.
///
/// `raw` is the trimmed input and is what serial numbers are compared
/// against; `normalized` is the lowercased form used for name containment.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub raw: String,
    pub normalized: String,
}

impl Query {
    /// Parse raw user text into a query. Fails on input that trims to empty.
    pub fn parse(input: &str) -> Result<Query, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "Please provide a serial number or name".to_string(),
            ));
        }

        Ok(Query {
            raw: trimmed.to_string(),
            normalized: trimmed.to_lowercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let query = Query::parse("  IEEE20240007  ").unwrap();
        assert_eq!(query.raw, "IEEE20240007");
        assert_eq!(query.normalized, "ieee20240007");
    }

    #[test]
    fn test_parse_preserves_interior_whitespace() {
        let query = Query::parse("Ayesha  Rahman").unwrap();
        assert_eq!(query.raw, "Ayesha  Rahman");
        assert_eq!(query.normalized, "ayesha  rahman");
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(Query::parse("").is_err());
        assert!(Query::parse("   ").is_err());
        assert!(Query::parse("\t\n").is_err());
    }

    #[test]
    fn test_empty_input_is_invalid_input_error() {
        match Query::parse("  ") {
            Err(AppError::InvalidInput(msg)) => {
                assert!(msg.contains("serial number or name"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
