//! JSON output formatting

use crate::error::SeoLensError;
use serde::Serialize;

use super::ReportRenderer;
use crate::rules::results::WarningReport;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    #[serde(flatten)]
    report: &'a WarningReport,
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &WarningReport) -> Result<String, SeoLensError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            report,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report() {
        let output = JsonOutput::new();
        let report = WarningReport::from_messages(vec![
            "This HTML without <title> tag".to_string(),
            "This HTML has more than 1 <h1> tags".to_string(),
        ]);

        let rendered = output.render_report(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["count"], 2);
        assert_eq!(json["messages"][1], "This HTML has more than 1 <h1> tags");
    }

    #[test]
    fn test_render_empty_report() {
        let rendered = JsonOutput.render_report(&WarningReport::new()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["count"], 0);
        assert!(json["messages"].as_array().unwrap().is_empty());
    }
}
