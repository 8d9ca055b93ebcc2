use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "regenmed-smoke")]
#[command(about = "Smoke tests for the RegenMed AI clinical decision-support API")]
pub struct CliConfig {
    /// Base URL of the RegenMed AI backend
    #[arg(long, env = "REGENMED_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token sent in the Authorization header
    #[arg(long, env = "REGENMED_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suites to run (repeatable or comma separated); defaults to all
    #[arg(short, long = "suite", value_delimiter = ',')]
    pub suites: Vec<String>,

    /// Minimum success rate (percent) for a zero exit code
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Per-request timeout in seconds; overrides every suite's built-in timeout
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum characters of response JSON to print
    #[arg(long)]
    pub preview_chars: Option<usize>,

    /// Write a JSON report of all outcomes to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Log elapsed time and memory per suite
    #[arg(long)]
    pub monitor: bool,

    /// List available suites and exit
    #[arg(long)]
    pub list: bool,

    /// Show what would be run without sending requests
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
