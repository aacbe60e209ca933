//! Error types for SeoLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

use crate::config::RuleId;
use crate::rules::results::WarningReport;

/// Main error type for SeoLens
#[derive(Error, Debug)]
pub enum SeoLensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule evaluation errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Document source or report sink errors
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// The report was computed but the sink refused it
    #[error("Report computed but not delivered: {source}")]
    Delivery {
        /// The computed report, still available to the caller
        report: Box<WarningReport>,
        /// Why delivery failed
        source: IoError,
    },

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while evaluating a single rule
#[derive(Error, Debug)]
pub enum RuleError {
    /// No usable definition for the rule id
    #[error("Rule {rule_id}: configuration missing ({reason})")]
    ConfigurationMissing {
        /// The rule that could not be resolved
        rule_id: RuleId,
        /// What was missing
        reason: String,
    },

    /// Evaluation attempted before a document was bound
    #[error("Rule {rule_id}: no document bound, parse markup before evaluating")]
    UnboundDocument {
        /// The rule that was evaluated
        rule_id: RuleId,
    },

    /// Dispatch or query failed
    #[error("Rule {rule_id}: evaluation failed: {cause}")]
    EvaluationFault {
        /// The rule being evaluated
        rule_id: RuleId,
        /// The underlying cause
        #[source]
        cause: FaultCause,
    },
}

/// Underlying cause of an evaluation fault
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaultCause {
    /// The check name does not map to a known predicate
    #[error("unknown check '{0}'")]
    UnknownCheck(String),

    /// The resolved selector does not parse
    #[error("invalid selector '{query}': {reason}")]
    InvalidSelector {
        /// The resolved selector text
        query: String,
        /// Parser message
        reason: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the configuration
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A rule instance lacks its root, tag, check or templates
    #[error("Rule {rule_id}: instance #{index} is malformed (root, tag, check, query and message are required)")]
    MalformedRule {
        /// The offending rule
        rule_id: RuleId,
        /// Position of the instance within the rule
        index: usize,
    },

    /// The same rule id is declared twice
    #[error("Rule {rule_id} is declared more than once")]
    DuplicateRule {
        /// The duplicated id
        rule_id: RuleId,
    },
}

/// Errors from the document source and report sink
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read markup
    #[error("Failed to read document from '{origin}': {source}")]
    Read {
        /// Where the markup was read from
        origin: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a report
    #[error("Failed to write report to '{target}': {source}")]
    Write {
        /// Where the report was written to
        target: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to render a report before writing it
    #[error("Failed to render report for '{target}': {reason}")]
    Render {
        /// Where the report was headed
        target: String,
        /// Renderer message
        reason: String,
    },
}
