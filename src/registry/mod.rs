//! Certificate registry: record types and record source adapters

pub mod record;
pub mod source;

pub use record::Record;
pub use source::{ConfiguredSource, FileRecordSource, HttpRecordSource, RecordSource, SourceError};
