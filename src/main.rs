//! menu-mirror CLI - mirror a menu description into a live proxy tree
//!
//! Usage: menu-mirror <COMMAND>
//!
//! Commands:
//!   show   Mirror a menu description and print the proxy tree
//!   check  Mirror a menu description and report a summary

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use menu_mirror::config::MirrorConfig;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "MENU_MIRROR_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_root = std::env::current_dir()?;
    let (mut config, warnings) = MirrorConfig::load_or_default(Some(&project_root));

    // CLI flags take precedence over config and environment
    if let Some(depth) = cli.max_depth {
        config.clone.max_depth = depth;
    }
    if cli.ascii {
        config.output.ascii = true;
    }

    let ctx = commands::Context {
        config,
        config_warnings: warnings,
        json: cli.json,
    };

    match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, &ctx),
        Commands::Check { file } => commands::cmd_check(&file, &ctx),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
