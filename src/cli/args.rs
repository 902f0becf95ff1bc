//! CLI argument definitions using clap

use crate::config::Settings;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ci-smoke")]
#[command(version)]
#[command(
    about = "Smoke checks for CI hosts: environment sanity, loopback ping and service ports",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Settings file (default: ci-smoke.toml in the working directory, if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Show detail sections and captured output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (exit code only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the TCP connect timeout, in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run every configured check (default)
    Run(RunArgs),

    /// Run only the arithmetic sanity check
    Sanity,

    /// Run only the loopback reachability check
    Ping(PingArgs),

    /// Probe a single TCP endpoint
    Connect(ConnectArgs),

    /// List configured checks without running them
    List,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Only run the named checks (comma separated or repeated)
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub only: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PingArgs {
    /// Host to ping instead of the configured one
    #[arg(long)]
    pub host: Option<String>,

    /// Ping program to run
    #[arg(long)]
    pub program: Option<String>,

    /// Subprocess timeout in seconds
    #[arg(long = "ping-timeout", value_name = "SECS")]
    pub ping_timeout: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    /// Host to connect to
    #[arg(required = true)]
    pub host: String,

    /// Port to connect to
    #[arg(required = true)]
    pub port: u16,

    /// Name shown in the report
    #[arg(long, default_value = "connect")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Rich terminal tables (default)
    Table,
    /// JSON output
    Json,
    /// Plain text (one line per check)
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

impl Cli {
    /// The subcommand to run; no subcommand means `run`
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }

    /// Apply global overrides on top of loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(secs) = self.timeout {
            settings.tcp.connect_timeout_secs = secs;
            for service in &mut settings.services {
                service.timeout_secs = None;
            }
        }
    }

    /// Whether a spinner may be drawn
    pub fn shows_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table && console::Term::stdout().is_term()
    }
}
