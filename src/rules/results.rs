//! # Warning Report
//!
//! The aggregated, ordered output of one validation run.
//!
//! Messages are kept in rule iteration order, then in instance declaration
//! order within a rule. The `count` field always equals the number of
//! messages: the only way to add a message is through [`WarningReport::push`]
//! or [`WarningReport::extend`].
//!
//! ## Examples
//!
//! ```rust
//! use seolens::rules::WarningReport;
//!
//! let mut report = WarningReport::new();
//! assert!(report.is_clean());
//!
//! report.push("This HTML without <title> tag");
//! assert_eq!(report.count(), 1);
//! ```

use serde::Serialize;

/// Result of validating one document.
///
/// An empty report ("all rules passed") is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningReport {
    succeeded: bool,
    count: usize,
    messages: Vec<String>,
}

impl WarningReport {
    /// Create an empty, successful report
    pub fn new() -> Self {
        Self {
            succeeded: true,
            count: 0,
            messages: Vec::new(),
        }
    }

    /// Create a successful report from messages
    pub fn from_messages(messages: Vec<String>) -> Self {
        Self {
            succeeded: true,
            count: messages.len(),
            messages,
        }
    }

    /// Append one warning
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        self.count = self.messages.len();
    }

    /// Append warnings, preserving their order
    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        self.messages.extend(messages);
        self.count = self.messages.len();
    }

    /// Whether the run completed
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    /// Number of warnings
    pub fn count(&self) -> usize {
        self.count
    }

    /// Warnings in order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the report, returning its warnings
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Whether no warnings were produced
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for WarningReport {
    fn default() -> Self {
        Self::new()
    }
}
