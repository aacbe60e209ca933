//! Validation engine
//!
//! Owns the rule toggles, parses a document once per run and evaluates every
//! enabled rule against it, in toggle order.
//!
//! Runs take `&mut self`, so toggles cannot change while a run is in flight
//! and one engine never serves two runs at once. Independent engines share
//! nothing but the read-only [`RuleSource`].

use std::sync::Arc;

use tracing::{debug, info, span, warn, Level};

use super::document::QueryDocument;
use super::evaluator::RuleEvaluator;
use super::results::WarningReport;
use super::toggles::{Toggle, ToggleState};
use crate::config::{RuleId, RuleSource};
use crate::error::{RuleError, SeoLensError};
use crate::io::{DocumentSource, ReportSink};

/// Main rules evaluation engine
pub struct ValidationEngine {
    source: Arc<dyn RuleSource>,
    toggles: ToggleState,
}

impl ValidationEngine {
    /// Create an engine with every built-in rule disabled
    pub fn new(source: Arc<dyn RuleSource>) -> Self {
        Self {
            source,
            toggles: ToggleState::new(),
        }
    }

    /// Enable rules.
    ///
    /// Built-in ids keep their catalogue slot, so `include_rules([5, 1])`
    /// still runs rule 1 first. Other ids run in the order they were first
    /// toggled.
    pub fn include_rules<I, T>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RuleId>,
    {
        self.update(ids, Toggle::Enabled)
    }

    /// Disable rules
    pub fn exclude_rules<I, T>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RuleId>,
    {
        self.update(ids, Toggle::Disabled)
    }

    /// Disable every built-in rule
    pub fn reset(&mut self) -> &mut Self {
        self.toggles.reset();
        self
    }

    /// Current toggles
    pub fn toggles(&self) -> &ToggleState {
        &self.toggles
    }

    fn update<I, T>(&mut self, ids: I, toggle: Toggle) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RuleId>,
    {
        for rule_id in ids {
            let rule_id = rule_id.into();
            debug!(rule_id = %rule_id, ?toggle, "Toggling rule");
            self.toggles.set(rule_id, toggle);
        }
        self
    }

    /// Validate markup against every enabled rule.
    ///
    /// Rules run in toggle order: built-ins 1 to 5 first, in catalogue order,
    /// since a new engine already holds them disabled. Every other id follows
    /// in the order it was first included or excluded.
    ///
    /// A rule without a usable definition contributes no warnings, unless
    /// no enabled rule resolves at all, in which case the last such error is
    /// returned. Evaluation faults abort the run.
    pub fn validate(&mut self, markup: &str) -> Result<WarningReport, SeoLensError> {
        let document = QueryDocument::parse(markup);
        let mut evaluator = RuleEvaluator::new(&*self.source);
        evaluator.bind(&document);

        let mut report = WarningReport::new();
        let mut enabled = 0;
        let mut missing = 0;
        let mut last_missing = None;

        for rule_id in self.toggles.enabled() {
            enabled += 1;

            let span = span!(Level::INFO, "rule", rule_id = %rule_id);
            let _guard = span.enter();

            match evaluator.evaluate(rule_id) {
                Ok(rule_report) => {
                    debug!(warnings_count = rule_report.count(), "Rule completed");
                    report.extend(rule_report.into_messages());
                }
                Err(e @ RuleError::ConfigurationMissing { .. }) => {
                    warn!(error = %e, "Skipping rule");
                    missing += 1;
                    last_missing = Some(e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        if let Some(e) = last_missing {
            if missing == enabled {
                return Err(e.into());
            }
        }

        info!(
            rules = enabled,
            skipped = missing,
            warnings_count = report.count(),
            "Validation complete"
        );

        Ok(report)
    }

    /// Read markup from `source`, validate it, and hand the report to `sink`.
    ///
    /// If the sink fails, the computed report travels back inside
    /// [`SeoLensError::Delivery`].
    pub async fn run(
        &mut self,
        source: &mut dyn DocumentSource,
        sink: &mut dyn ReportSink,
    ) -> Result<WarningReport, SeoLensError> {
        debug!(source = %source.describe(), "Acquiring document");
        let markup = source.acquire().await?;

        let report = self.validate(&markup)?;

        if let Err(e) = sink.deliver(&report).await {
            return Err(SeoLensError::Delivery {
                report: Box::new(report),
                source: e,
            });
        }

        Ok(report)
    }
}
