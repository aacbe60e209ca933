//! # CLI Module
//!
//! This module defines the command-line interface for SeoLens using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `check` | Validate an HTML document against the enabled rules |
//! | `rules` | List known rules and whether their definitions are well formed |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file (defaults to `.seolens.toml`)
//!
//! ## Examples
//!
//! ```bash
//! # Run every rule against a file
//! seolens check index.html
//!
//! # Only check images and headings, write JSON
//! seolens check index.html --rules missing-alt,single-h1 --format json -o report.json
//!
//! # Read from standard input
//! curl -s https://example.com | seolens check -
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{CheckArgs, RulesArgs};

/// SeoLens - Validate HTML documents against structural SEO rules
#[derive(Parser, Debug)]
#[command(name = "seolens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an HTML document
    Check(CheckArgs),

    /// List known rules
    Rules(RulesArgs),
}
