//! CLI mode implementation
//!
//! Provides the command-line interface for the certverify tools

use clap::{Parser, Subcommand};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// certverify CLI
#[derive(Parser)]
#[command(name = "certverify")]
#[command(about = "Certificate authenticity lookup utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up certificate records by serial number or participant name
    Verify(VerifyArgs),
}

/// Verify tool arguments
#[derive(Parser, JsonSchema, Deserialize, Serialize, Clone, Debug)]
pub struct VerifyArgs {
    /// Serial number (exact) or participant name (partial, case-insensitive)
    #[arg(short = 'q', long)]
    #[schemars(description = "Serial number (exact) or participant name (partial, case-insensitive)")]
    pub query: String,

    /// Record source: HTTP(S) URL or path to a JSON file of records
    #[arg(short = 's', long, env = "CERTVERIFY_SOURCE")]
    #[schemars(description = "Record source: HTTP(S) URL or path to a JSON file of records")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_args() {
        let args = VerifyArgs {
            query: "IEEE20240007".to_string(),
            source: Some("https://example.com/records.json".to_string()),
        };
        assert_eq!(args.query, "IEEE20240007");
        assert!(args.source.unwrap().starts_with("https://"));
    }

    #[test]
    fn test_cli_parses_verify_command() {
        let cli = Cli::try_parse_from(["certverify", "verify", "--query", "jane doe"]).unwrap();
        match cli.command {
            Some(Commands::Verify(args)) => assert_eq!(args.query, "jane doe"),
            _ => panic!("expected verify command"),
        }
    }
}
