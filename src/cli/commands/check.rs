//! Check command - Validate an HTML document
//!
//! Loads the configuration, toggles the requested rules, reads the document
//! and delivers the report to stdout or a file.

use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{CheckArgs, OutputFormat};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput, TextOutput};
use crate::error::SeoLensError;
use crate::io::{ConsoleSink, DocumentSource, FileSink, FileSource, ReportSink, StreamSource};
use crate::rules::constants::parse_rule_ids;
use crate::rules::engine::ValidationEngine;

/// Execute the check command
///
/// # Returns
///
/// An exit code: 0 when every rule passed, 2 when warnings were produced,
/// 4 when a rule id argument is invalid
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the document cannot be
/// read, a rule faults, or the report cannot be written
pub async fn execute(args: CheckArgs, config_path: Option<PathBuf>) -> Result<i32, SeoLensError> {
    let config = super::load_config(config_path.as_deref())?;
    config.validate()?;

    let (Ok(include), Ok(exclude)) = (parse_rule_ids(&args.rules), parse_rule_ids(&args.exclude))
    else {
        return Ok(exit_codes::INVALID_ARGS);
    };

    let include = if !include.is_empty() {
        include
    } else if !config.enabled.is_empty() {
        config.enabled.clone()
    } else {
        config.rule_ids()
    };

    let reads_stdin = args.input == Path::new("-");
    let mut source: Box<dyn DocumentSource> = if reads_stdin {
        Box::new(StreamSource::stdin())
    } else {
        Box::new(FileSource::new(&args.input))
    };

    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new(source.describe())),
        OutputFormat::Text => Box::new(TextOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };

    let mut sink: Box<dyn ReportSink> = match &args.output {
        Some(path) => Box::new(FileSink::new(path, renderer)),
        None => Box::new(ConsoleSink::new(renderer)),
    };

    let mut engine = ValidationEngine::new(Arc::new(config));
    engine.include_rules(include).exclude_rules(exclude);

    let report = engine.run(&mut *source, &mut *sink).await?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} Report written to: {}",
            "Success:".green().bold(),
            path.display().to_string().cyan()
        );
    }

    let exit_code = if report.is_clean() {
        exit_codes::SUCCESS
    } else {
        exit_codes::WARNINGS
    };

    Ok(exit_code)
}
