//! Verify tool implementation
//!
//! Implements the `verify(query)` tool shared by the CLI and the JSON-RPC
//! server: run one lookup against the configured record source and render
//! the matching certificate records as markdown.

use crate::cli::VerifyArgs;
use crate::error::AppError;
use crate::lookup::{LookupEngine, LookupOutcome};
use crate::mcp::{McpResponse, ToolResult};
use crate::registry::{ConfiguredSource, Record};
use serde_json::Value;
use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

/// Env var consulted when the tool call does not carry a source location
pub const SOURCE_ENV: &str = "CERTVERIFY_SOURCE";

/// Highlight occurrences of the query in a name (case-insensitive) by
/// wrapping each hit in **bold**. Positions are found on the lowercased
/// string; because the query itself was lowercased the same way, the byte
/// ranges line up with the original text for ASCII and same-length case
/// pairs, which is what certificate rosters contain in practice.
fn highlight(text: &str, query: &str) -> String {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return text.to_string();
    }

    let lower = text.to_lowercase();
    if lower.len() != text.len() {
        // Lowercasing changed byte lengths (rare non-ASCII case); skip
        // highlighting rather than risk slicing at a bad boundary.
        return text.to_string();
    }

    let mut result = String::new();
    let mut idx = 0usize;
    while let Some(pos) = lower[idx..].find(&needle) {
        let start = idx + pos;
        let end = start + needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        result.push_str(&text[idx..start]);
        result.push_str("**");
        result.push_str(&text[start..end]);
        result.push_str("**");
        idx = end;
    }
    result.push_str(&text[idx..]);

    result
}

/// Format matched records into markdown for display (used by tests and CLI)
pub fn format_verification_results(records: &[Record], query: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!(
        "# Certificate Verification · {} record(s)\n\n",
        records.len()
    ));

    for record in records {
        md.push_str(&format!("**Serial Number:** {}\n", record.serial_number));
        md.push_str(&format!("**Name:** {}\n", highlight(&record.name, query)));
        md.push_str(&format!("**Program / Events:** {}\n", record.program_events));
        md.push_str(&format!("**Issue Date:** {}\n", record.issue_date));
        md.push_str(&format!("**Position:** {}\n", record.position));

        match record.photo_link() {
            Some(url) => md.push_str(&format!("[View Photo]({})\n", url)),
            None => md.push_str("No photo available\n"),
        }
        match record.certificate_link() {
            Some(url) => md.push_str(&format!("[View Certificate]({})\n", url)),
            None => md.push_str("No certificate available\n"),
        }

        md.push_str("\n---\n\n");
    }

    md
}

/// Handle verify tool call (JSON-RPC)
pub async fn handle_verify(id: Option<Value>, args: Value) -> McpResponse {
    match timeout(Duration::from_secs(30), handle_verify_impl(args)).await {
        Ok(result) => match result {
            Ok(content) => McpResponse::success(id, serde_json::to_value(content).unwrap()),
            Err(e) => McpResponse::error(id, e.error_code(), &e.message()),
        },
        Err(_) => McpResponse::error(id, "timeout", "Verify request exceeded 30 second timeout"),
    }
}

async fn handle_verify_impl(args: Value) -> Result<ToolResult, AppError> {
    let verify_args: VerifyArgs = serde_json::from_value(args)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;

    execute_verify(verify_args).await
}

/// Shared implementation for verify (used by JSON-RPC and CLI)
pub async fn execute_verify(args: VerifyArgs) -> Result<ToolResult, AppError> {
    debug!("Verify request for query: '{}'", args.query);

    let location = match args.source {
        Some(location) => location,
        None => std::env::var(SOURCE_ENV).map_err(|_| {
            AppError::InvalidInput(format!(
                "No record source configured. Pass --source or set {}",
                SOURCE_ENV
            ))
        })?,
    };

    let source = ConfiguredSource::from_location(&location)?;
    let engine = LookupEngine::new(source);

    match engine.lookup(&args.query).await {
        LookupOutcome::Found(records) => Ok(ToolResult::text(format_verification_results(
            &records,
            &args.query,
        ))),
        LookupOutcome::NotFound => Err(AppError::NotFound(
            "No data found for this serial number or name".to_string(),
        )),
        LookupOutcome::InvalidQuery(reason) => Err(AppError::InvalidInput(reason)),
        LookupOutcome::SourceUnavailable(reason) => {
            warn!("Record source unavailable: {}", reason);
            Err(AppError::SourceFetchFailed(
                "Could not complete verification: the record source is unavailable".to_string(),
            ))
        }
    }
}
