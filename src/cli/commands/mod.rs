//! CLI commands module

pub mod check;
pub mod rules;

use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::SeoLensError;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// HTML file to validate ("-" reads standard input)
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Rules to enable, by id or alias (defaults to the configured list, then every known rule)
    #[arg(short, long, value_delimiter = ',')]
    pub rules: Vec<String>,

    /// Rules to disable, by id or alias
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Output format (terminal, text, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Print rule definitions as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output format for check command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Text,
    Json,
}

/// Load the configuration file given on the command line, or the default one
pub fn load_config(path: Option<&Path>) -> Result<Config, SeoLensError> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load_or_default(),
    }
}
