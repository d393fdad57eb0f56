use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// menu-mirror - mirror a menu description into a live proxy tree
#[derive(Parser, Debug)]
#[command(name = "menu-mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Deepest allowed submenu nesting (overrides config)
    #[arg(long, value_name = "N", global = true)]
    pub max_depth: Option<usize>,

    /// Use ASCII markers instead of Unicode glyphs
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mirror a menu description and print the proxy tree
    Show {
        /// Menu description (.toml or .json)
        file: PathBuf,
    },

    /// Mirror a menu description and report a summary (exits non-zero on
    /// structural errors)
    Check {
        /// Menu description (.toml or .json)
        file: PathBuf,
    },
}
