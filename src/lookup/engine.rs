//! Lookup engine
//!
//! Orchestrates one verification: normalize the query, fetch a fresh record
//! snapshot, scan it in source order, and classify the outcome. The engine
//! is stateless and reentrant; every invocation gets its own snapshot and
//! nothing is cached between calls.

use crate::lookup::matcher;
use crate::lookup::query::Query;
use crate::registry::record::Record;
use crate::registry::source::RecordSource;
use std::collections::HashSet;
use tracing::debug;

/// Terminal outcome of one lookup. Always returned as a value, never thrown.
#[derive(Debug, PartialEq)]
pub enum LookupOutcome {
    /// One or more matches, in the same relative order the source returned them
    Found(Vec<Record>),
    /// Snapshot fetched and scanned, zero matches
    NotFound,
    /// Normalization failed; the source was never contacted
    InvalidQuery(String),
    /// The source could not be reached or its payload was uninterpretable
    SourceUnavailable(String),
}

/// Lookup engine over a record source
pub struct LookupEngine<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> LookupEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run one lookup against a fresh snapshot from the record source.
    ///
    /// Exactly one source read per invocation, and none at all when the
    /// query fails normalization.
    pub async fn lookup(&self, raw_query: &str) -> LookupOutcome {
        let query = match Query::parse(raw_query) {
            Ok(query) => query,
            Err(e) => return LookupOutcome::InvalidQuery(e.message()),
        };

        let records = match self.source.fetch_records().await {
            Ok(records) => records,
            Err(e) => return LookupOutcome::SourceUnavailable(e.to_string()),
        };

        debug!(
            "Scanning {} records for query '{}'",
            records.len(),
            query.raw
        );

        let mut seen_serials: HashSet<String> = HashSet::new();
        let mut matched: Vec<Record> = Vec::new();

        for record in records {
            if record.is_malformed() {
                continue;
            }

            if !matcher::matches(&record, &query) {
                continue;
            }

            // Dedupe by serial number, first occurrence wins. Records
            // without a serial can only match by name and pass through.
            if !record.serial_number.is_empty() && !seen_serials.insert(record.serial_number.clone())
            {
                continue;
            }

            matched.push(record);
        }

        if matched.is_empty() {
            LookupOutcome::NotFound
        } else {
            debug!("Matched {} records", matched.len());
            LookupOutcome::Found(matched)
        }
    }
}
