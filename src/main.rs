//! ci-smoke - smoke checks for CI hosts

use anyhow::Context;
use ci_smoke::cli::{Cli, Commands};
use ci_smoke::commands;
use ci_smoke::config;
use ci_smoke::models::EXIT_USAGE;
use ci_smoke::output::{self, OutputOptions};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            std::process::exit(EXIT_USAGE);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let mut settings = config::load_settings(cli.config.as_ref()).context("loading settings")?;
    cli.apply_overrides(&mut settings);
    settings.validate().context("validating settings")?;

    let options = OutputOptions {
        format: cli.format,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let code = match cli.command_or_default() {
        Commands::Run(args) => {
            commands::run_all(&settings, &args.only, &options, cli.shows_progress()).await?
        }
        Commands::Sanity => commands::run_sanity(&options)?,
        Commands::Ping(args) => commands::run_ping(&settings, &args, &options).await?,
        Commands::Connect(args) => commands::run_connect(&settings, &args, &options).await?,
        Commands::List => commands::run_list(&settings, cli.format)?,
    };

    Ok(code)
}
