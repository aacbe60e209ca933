//! Plain text output
//!
//! A timestamped header followed by one warning per line, CRLF separated,
//! or `all pass` when the report is clean.

use chrono::{Local, NaiveDateTime};

use super::ReportRenderer;
use crate::error::SeoLensError;
use crate::rules::results::WarningReport;

const LINE_BREAK: &str = "\r\n";

pub struct TextOutput {
    timestamp: Option<NaiveDateTime>,
}

impl TextOutput {
    /// Stamp reports with the time they are rendered
    pub fn new() -> Self {
        Self { timestamp: None }
    }

    /// Stamp reports with a fixed time
    pub fn at(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }
}

impl Default for TextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextOutput {
    fn render_report(&self, report: &WarningReport) -> Result<String, SeoLensError> {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local());

        let body = if report.is_clean() {
            "all pass".to_string()
        } else {
            report.messages().join(LINE_BREAK)
        };

        Ok(format!(
            "[{}] Output:{LINE_BREAK}{body}",
            timestamp.format("%Y-%m-%d %H:%M:%S")
        ))
    }
}
