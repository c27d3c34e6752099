//! CLI argument parsing using clap derive API
//!
//! This module is purely declarative with no side effects or I/O.
//! The `path` positional is optional on purpose: a missing path must map to
//! exit code 1 in `main`, not to clap's own usage-error exit code.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logsift -- per-level counts and details for a whitespace-delimited log file.
///
/// Loads `<date> <time> <level> <message...>` lines, prints a counts table,
/// and optionally the details for one level.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about, long_about = None)]
pub struct Cli {
    /// Path to the log file.
    pub path: Option<PathBuf>,

    /// Also print details for this level (debug, info, warning, error).
    pub level: Option<String>,

    /// Diagnostic log level for stderr (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table / text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_path_only() {
        let cli = Cli::try_parse_from(["logsift", "app.log"]).expect("should parse path");
        assert_eq!(cli.path, Some(PathBuf::from("app.log")));
        assert!(cli.level.is_none(), "level filter should default to None");
    }

    #[test]
    fn test_cli_parse_path_and_level() {
        let cli = Cli::try_parse_from(["logsift", "app.log", "error"]).expect("should parse");
        assert_eq!(cli.path, Some(PathBuf::from("app.log")));
        assert_eq!(cli.level, Some("error".to_owned()));
    }

    #[test]
    fn test_cli_parse_no_arguments_still_parses() {
        // Missing path is handled in main (exit code 1), not by clap
        let cli = Cli::try_parse_from(["logsift"]).expect("should parse without path");
        assert!(cli.path.is_none());
    }

    #[test]
    fn test_cli_parse_log_level_default() {
        let cli = Cli::try_parse_from(["logsift", "app.log"]).expect("should parse");
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_parse_log_level_override() {
        let cli = Cli::try_parse_from(["logsift", "--log-level", "debug", "app.log"])
            .expect("should parse");
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_cli_parse_output_format_json() {
        let cli = Cli::try_parse_from(["logsift", "--output", "json", "app.log"])
            .expect("should parse");
        assert!(matches!(cli.output, OutputFormat::Json));
    }

    #[test]
    fn test_cli_parse_output_format_defaults_to_text() {
        let cli = Cli::try_parse_from(["logsift", "app.log"]).expect("should parse");
        assert!(matches!(cli.output, OutputFormat::Text));
    }

    #[test]
    fn test_cli_parse_invalid_output_format_fails() {
        let result = Cli::try_parse_from(["logsift", "--output", "xml", "app.log"]);
        assert!(result.is_err(), "should reject unknown output format");
    }
}
