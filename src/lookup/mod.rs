//! Certificate lookup core
//!
//! Query normalization, the dual-rule record matcher, and the engine that
//! ties them to a record source and classifies the outcome.

pub mod engine;
pub mod matcher;
pub mod query;


pub use engine::{LookupEngine, LookupOutcome};
pub use query::Query;
