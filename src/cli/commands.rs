//! CLI commands and argument parsing

use crate::config::{FailurePolicy, DEFAULT_APP_KEY, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};

/// Media census CLI
#[derive(Parser, Debug)]
#[command(name = "media-census")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fetch the full listing once and answer queries from memory
    #[arg(long, global = true)]
    pub cached: bool,

    /// Listing endpoint URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// App key sent as the `app` query parameter
    #[arg(long, global = true, default_value = DEFAULT_APP_KEY)]
    pub app_key: String,

    /// Items requested per page
    #[arg(long, global = true, default_value = "10")]
    pub per_page: u32,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout_secs: u64,

    /// What to do when a page fetch fails
    #[arg(long, global = true, value_enum, default_value = "abort")]
    pub on_error: OnError,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count HD and non-HD media items
    Count {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// List cached media items by HD flag (requires --cached)
    List {
        /// List the items without the HD flag instead
        #[arg(long)]
        non_hd: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Pretty,
    /// JSON output
    Json,
}

/// Failure policy for page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OnError {
    /// Stop and report the error
    Abort,
    /// Log the failure, count the page as zero items, keep going
    Skip,
}

impl From<OnError> for FailurePolicy {
    fn from(on_error: OnError) -> Self {
        match on_error {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Skip => FailurePolicy::SkipAndContinue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_on_error_maps_to_failure_policy() {
        assert_eq!(FailurePolicy::from(OnError::Abort), FailurePolicy::Abort);
        assert_eq!(
            FailurePolicy::from(OnError::Skip),
            FailurePolicy::SkipAndContinue
        );
    }

    #[test]
    fn test_parse_count_defaults() {
        let cli = Cli::try_parse_from(["media-census", "count"]).unwrap();
        assert!(!cli.cached);
        assert_eq!(cli.per_page, 10);
        assert_eq!(cli.on_error, OnError::Abort);
        assert!(matches!(
            cli.command,
            Commands::Count {
                format: OutputFormat::Pretty
            }
        ));
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from([
            "media-census",
            "list",
            "--cached",
            "--non-hd",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.cached);
        assert!(matches!(
            cli.command,
            Commands::List {
                non_hd: true,
                format: OutputFormat::Json
            }
        ));
    }
}
