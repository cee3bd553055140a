use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wc-predictions")]
#[command(about = "Command-line client for the World Cup predictions API")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML client configuration")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "API base URL, overrides the configuration file")]
    pub base_url: Option<String>,

    #[arg(long, env = "WC_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Full match calendar grouped by phase
    Calendar,
    /// Knockout fixtures of one bracket round, e.g. ROUND_OF_16
    Knockouts { phase: String },
    /// League details
    League { league_id: String },
    /// Public leagues, optionally filtered by category
    Leagues {
        #[arg(long)]
        category: Option<String>,
    },
    /// League ranking in tie-break order
    Ranking { league_id: String },
    /// Completion statistics of a prediction
    Stats { prediction_id: String },
}
