//! Where reports go

use std::path::PathBuf;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{IoError, SeoLensError};
use crate::rules::results::WarningReport;

/// Turns a report into the text a sink writes
pub trait ReportRenderer: Send + Sync {
    fn render_report(&self, report: &WarningReport) -> Result<String, SeoLensError>;
}

/// Receives the report of one run
#[async_trait::async_trait]
pub trait ReportSink: Send {
    async fn deliver(&mut self, report: &WarningReport) -> Result<(), IoError>;
}

fn render(
    renderer: &dyn ReportRenderer,
    report: &WarningReport,
    target: &str,
) -> Result<String, IoError> {
    renderer
        .render_report(report)
        .map_err(|e| IoError::Render {
            target: target.to_string(),
            reason: e.to_string(),
        })
}

/// Writes the rendered report to a file, replacing its content
pub struct FileSink {
    path: PathBuf,
    renderer: Box<dyn ReportRenderer>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, renderer: Box<dyn ReportRenderer>) -> Self {
        Self {
            path: path.into(),
            renderer,
        }
    }
}

#[async_trait::async_trait]
impl ReportSink for FileSink {
    async fn deliver(&mut self, report: &WarningReport) -> Result<(), IoError> {
        let target = self.path.display().to_string();
        let rendered = render(self.renderer.as_ref(), report, &target)?;

        tokio::fs::write(&self.path, rendered)
            .await
            .map_err(|e| IoError::Write { target, source: e })
    }
}

/// Writes the rendered report to any async writer
pub struct StreamSink<W> {
    writer: W,
    label: String,
    renderer: Box<dyn ReportRenderer>,
}

impl<W> StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W, label: impl Into<String>, renderer: Box<dyn ReportRenderer>) -> Self {
        Self {
            writer,
            label: label.into(),
            renderer,
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait::async_trait]
impl<W> ReportSink for StreamSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn deliver(&mut self, report: &WarningReport) -> Result<(), IoError> {
        let rendered = render(self.renderer.as_ref(), report, &self.label)?;

        let written = match self.writer.write_all(rendered.as_bytes()).await {
            Ok(()) => self.writer.flush().await,
            Err(e) => Err(e),
        };

        written.map_err(|e| IoError::Write {
            target: self.label.clone(),
            source: e,
        })
    }
}

/// Prints the rendered report on standard output
pub struct ConsoleSink {
    renderer: Box<dyn ReportRenderer>,
}

impl ConsoleSink {
    pub fn new(renderer: Box<dyn ReportRenderer>) -> Self {
        Self { renderer }
    }
}

#[async_trait::async_trait]
impl ReportSink for ConsoleSink {
    async fn deliver(&mut self, report: &WarningReport) -> Result<(), IoError> {
        let rendered = render(self.renderer.as_ref(), report, "<stdout>")?;
        println!("{rendered}");
        Ok(())
    }
}

/// Keeps delivered reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Vec<WarningReport>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[WarningReport] {
        &self.reports
    }
}

#[async_trait::async_trait]
impl ReportSink for MemorySink {
    async fn deliver(&mut self, report: &WarningReport) -> Result<(), IoError> {
        self.reports.push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleId;
    use crate::error::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    struct LinesRenderer;

    impl ReportRenderer for LinesRenderer {
        fn render_report(&self, report: &WarningReport) -> Result<String, SeoLensError> {
            Ok(format!("{}\n{}", report.count(), report.messages().join("\n")))
        }
    }

    struct FailingRenderer;

    impl ReportRenderer for FailingRenderer {
        fn render_report(&self, _report: &WarningReport) -> Result<String, SeoLensError> {
            Err(ConfigError::DuplicateRule {
                rule_id: RuleId::Numeric(7),
            }
            .into())
        }
    }

    fn report() -> WarningReport {
        WarningReport::from_messages(vec![
            "This HTML without <title> tag".to_string(),
            "This HTML has more than 1 <h1> tags".to_string(),
        ])
    }

    #[tokio::test]
    async fn test_file_sink_writes_rendered_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let mut sink = FileSink::new(&path, Box::new(LinesRenderer));
        sink.deliver(&report()).await.unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2\nThis HTML without <title> tag\nThis HTML has more than 1 <h1> tags"
        );
    }

    #[tokio::test]
    async fn test_file_sink_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing-dir").join("report.txt");

        let mut sink = FileSink::new(&path, Box::new(LinesRenderer));
        let err = sink.deliver(&report()).await.unwrap_err();
        assert!(matches!(err, IoError::Write { .. }));
    }

    #[tokio::test]
    async fn test_render_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let mut sink = FileSink::new(&path, Box::new(FailingRenderer));
        let err = sink.deliver(&report()).await.unwrap_err();
        assert!(matches!(err, IoError::Render { .. }));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_stream_sink() {
        let mut sink = StreamSink::new(Vec::new(), "buffer", Box::new(LinesRenderer));
        sink.deliver(&report()).await.unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.starts_with("2\nThis HTML without <title> tag\n"));
    }

    #[tokio::test]
    async fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.deliver(&report()).await.unwrap();
        sink.deliver(&WarningReport::new()).await.unwrap();

        assert_eq!(sink.reports().len(), 2);
        assert_eq!(sink.reports()[0].count(), 2);
    }
}
