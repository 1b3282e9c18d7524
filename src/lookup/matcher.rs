//! Record matching predicate
//!
//! A record matches when either its serial number equals the trimmed raw
//! query exactly (serials are opaque, case-sensitive identifiers) or its
//! name contains the lowercased query as a substring (names are natural
//! text, matched case-insensitively). The asymmetry is intentional:
//! lowercasing a serial would make distinct identifiers collide.

use crate::lookup::query::Query;
use crate::registry::record::Record;

/// Evaluate one record against a query. Pure and order-independent.
pub fn matches(record: &Record, query: &Query) -> bool {
    if !record.serial_number.is_empty() && record.serial_number == query.raw {
        return true;
    }

    !record.name.is_empty() && record.name.to_lowercase().contains(&query.normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: &str, name: &str) -> Record {
        Record {
            serial_number: serial.to_string(),
            name: name.to_string(),
            program_events: String::new(),
            issue_date: String::new(),
            position: String::new(),
            program_photo_link: String::new(),
            certificate_url: String::new(),
        }
    }

    #[test]
    fn test_serial_match_is_exact_and_case_sensitive() {
        let r = record("IEEE20240007", "");

        assert!(matches(&r, &Query::parse("IEEE20240007").unwrap()));
        assert!(!matches(&r, &Query::parse("ieee20240007").unwrap()));
        assert!(!matches(&r, &Query::parse("IEEE2024000").unwrap()));
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let r = record("S1", "Ayesha Rahman");

        assert!(matches(&r, &Query::parse("ayesha").unwrap()));
        assert!(matches(&r, &Query::parse("RAHMAN").unwrap()));
        assert!(matches(&r, &Query::parse("esha rah").unwrap()));
        assert!(!matches(&r, &Query::parse("ayeshax").unwrap()));
    }

    #[test]
    fn test_lowercased_serial_only_matches_via_name_rule() {
        // A lowercase query misses the serial rule but can still hit the
        // name rule when the name happens to contain it.
        let r = record("ABC", "abc ceremony");
        assert!(matches(&r, &Query::parse("abc").unwrap()));

        let r2 = record("ABC", "Winter Gala");
        assert!(!matches(&r2, &Query::parse("abc").unwrap()));
    }

    #[test]
    fn test_missing_fields_disable_their_rule() {
        let no_name = record("S1", "");
        assert!(matches(&no_name, &Query::parse("S1").unwrap()));
        assert!(!matches(&no_name, &Query::parse("jane").unwrap()));

        let no_serial = record("", "Jane Doe");
        assert!(matches(&no_serial, &Query::parse("doe").unwrap()));
        assert!(!matches(&no_serial, &Query::parse("S1").unwrap()));
    }

    #[test]
    fn test_whitespace_sensitive_serial_comparison() {
        // The query is trimmed before comparison, but interior whitespace
        // still has to line up exactly.
        let r = record("AB 12", "");
        assert!(matches(&r, &Query::parse("  AB 12  ").unwrap()));
        assert!(!matches(&r, &Query::parse("AB12").unwrap()));
    }
}
