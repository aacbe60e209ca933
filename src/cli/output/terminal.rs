//! Terminal output formatting with colors

use crate::error::SeoLensError;
use colored::Colorize;

use super::ReportRenderer;
use crate::rules::results::WarningReport;

pub struct TerminalOutput {
    document: String,
}

impl TerminalOutput {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    fn format_header(&self) -> String {
        format!(
            "\n{} v{}\n\n{} {}\n",
            "seolens".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Document:".dimmed(),
            self.document.white().bold(),
        )
    }

    fn format_warnings(&self, report: &WarningReport) -> String {
        let mut output = format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  VALIDATION RESULTS".bold()
        );

        if report.is_clean() {
            output.push_str(&format!("  {}\n", "All rules passed.".green()));
            return output;
        }

        output.push_str(&format!(
            "{} ({})\n",
            "⚠️  WARNING".yellow().bold(),
            report.count()
        ));
        for message in report.messages() {
            output.push_str(&format!("  {} {}\n", "•".dimmed(), message));
        }

        output
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &WarningReport) -> Result<String, SeoLensError> {
        let mut output = self.format_header();
        output.push_str(&self.format_warnings(report));
        Ok(output)
    }
}
