//! Single rule evaluation
//!
//! A [`RuleEvaluator`] looks up one rule definition, resolves each instance's
//! templates, dispatches to the configured check and collects the warnings
//! of failed instances.

use tracing::{debug, trace};

use super::document::QueryDocument;
use super::predicates::Check;
use super::results::WarningReport;
use super::template;
use crate::config::{RuleDefinition, RuleId, RuleInstance, RuleSource};
use crate::error::{FaultCause, RuleError};

/// Evaluates rules against one bound document
pub struct RuleEvaluator<'a> {
    source: &'a dyn RuleSource,
    document: Option<&'a QueryDocument>,
    warnings: Vec<String>,
}

impl<'a> RuleEvaluator<'a> {
    /// Create an evaluator with no document bound
    pub fn new(source: &'a dyn RuleSource) -> Self {
        Self {
            source,
            document: None,
            warnings: Vec::new(),
        }
    }

    /// Bind the document subsequent evaluations run against
    pub fn bind(&mut self, document: &'a QueryDocument) -> &mut Self {
        self.document = Some(document);
        self
    }

    /// Whether an instance has everything needed to run.
    ///
    /// Root, tag, check name, selector template and message template must
    /// all be non-blank once instance overrides are applied.
    pub fn is_well_formed(definition: &RuleDefinition, instance: &RuleInstance) -> bool {
        let binding = definition.binding(instance);
        [
            instance.root.as_str(),
            instance.tag.as_str(),
            binding.check,
            binding.query,
            binding.message,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Warnings from the last evaluation
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Run every instance of `rule_id` in declaration order.
    ///
    /// Warnings from a previous call are discarded first.
    pub fn evaluate(&mut self, rule_id: &RuleId) -> Result<WarningReport, RuleError> {
        self.warnings.clear();

        let document = self.document.ok_or_else(|| RuleError::UnboundDocument {
            rule_id: rule_id.clone(),
        })?;

        let definition =
            self.source
                .lookup(rule_id)
                .ok_or_else(|| RuleError::ConfigurationMissing {
                    rule_id: rule_id.clone(),
                    reason: "no rule definition found".to_string(),
                })?;

        if let Some(index) = definition
            .instances
            .iter()
            .position(|instance| !Self::is_well_formed(&definition, instance))
        {
            return Err(RuleError::ConfigurationMissing {
                rule_id: rule_id.clone(),
                reason: format!("instance #{index} is malformed"),
            });
        }

        debug!(
            rule_id = %rule_id,
            custom = rule_id.is_custom(),
            instances = definition.instances.len(),
            "Evaluating rule"
        );

        for instance in &definition.instances {
            let binding = definition.binding(instance);
            let check = Check::from_name(binding.check).ok_or_else(|| RuleError::EvaluationFault {
                rule_id: rule_id.clone(),
                cause: FaultCause::UnknownCheck(binding.check.to_string()),
            })?;

            let query = template::resolve(binding.query, instance);
            let message = template::resolve(binding.message, instance);

            let outcome = check.predicate()(document, instance, &query, &message).map_err(
                |cause| RuleError::EvaluationFault {
                    rule_id: rule_id.clone(),
                    cause,
                },
            )?;

            trace!(rule_id = %rule_id, check = check.name(), query = %query, passed = outcome.passed, "Instance checked");

            if !outcome.passed {
                self.warnings.push(outcome.message);
            }
        }

        Ok(WarningReport::from_messages(self.warnings.clone()))
    }
}
