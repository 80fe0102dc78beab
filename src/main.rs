//! Navcrumb command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use navcrumb::cli::{self, Cli, Commands};
use navcrumb::config::{NavcrumbConfig, init_config};
use navcrumb::{core, logger};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(NavcrumbConfig::load(cli)?);

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
        Commands::Menu { args } => cli::menu::run_menu(args, &config),
        Commands::Check { args } => cli::check::run_check(args, &config),
        Commands::Watch { args } => cli::watch::run_watch(args),
    }
}
