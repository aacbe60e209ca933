//! Configuration module
//!
//! Rule data model and the [`RuleSource`] capability the rules engine
//! uses to look up rule definitions.
//!
//! A rule definition names the check to run, a selector template, a
//! warning template and an ordered list of instances:
//!
//! ```toml
//! [[rules]]
//! id = 101
//! check = "exists"
//! query = '{{root}} {{tag}}[{{attr}}="{{value}}"]'
//! message = 'This HTML without <{{tag}} {{attr}}="{{value}}"> tag'
//!
//! [[rules.instances]]
//! root = "head"
//! tag = "meta"
//! attr = "name"
//! value = "robots"
//! ```

pub mod builtin;
pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::rules::constants::{self, SYSTEM_RULE_MAX};
use crate::rules::predicates::Check;

/// Identifier of a rule.
///
/// Built-in rules use small numbers (up to [`SYSTEM_RULE_MAX`]); custom
/// rules use larger numbers or free-form names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    Numeric(u32),
    Named(String),
}

impl RuleId {
    /// Whether this id lies outside the built-in range
    pub fn is_custom(&self) -> bool {
        match self {
            Self::Numeric(id) => *id > SYSTEM_RULE_MAX,
            Self::Named(_) => true,
        }
    }

    /// Alias of a built-in rule (e.g. `single-h1`)
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            Self::Numeric(id) => constants::id_to_alias(*id),
            Self::Named(_) => None,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl From<u32> for RuleId {
    fn from(id: u32) -> Self {
        Self::Numeric(id)
    }
}

/// Error returned when a rule id string is empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule id cannot be empty")]
pub struct EmptyRuleId;

impl FromStr for RuleId {
    type Err = EmptyRuleId;

    /// Numbers parse as numeric ids, built-in aliases map to their number,
    /// anything else becomes a named custom id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyRuleId);
        }
        if let Ok(id) = s.parse::<u32>() {
            return Ok(Self::Numeric(id));
        }
        if let Some(id) = constants::alias_to_id(s) {
            return Ok(Self::Numeric(id));
        }
        Ok(Self::Named(s.to_string()))
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(id) => serializer.serialize_u32(*id),
            Self::Named(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(id) => Ok(Self::Numeric(id)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One concrete parameter binding of a rule.
///
/// `check`, `query` and `message` override the owning definition's
/// values for this instance only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInstance {
    #[serde(default)]
    pub root: String,

    #[serde(default)]
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default)]
    pub min: u32,

    #[serde(default)]
    pub max: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleInstance {
    /// Create an instance for `tag` under `root`
    pub fn new(root: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set the attribute name
    pub fn with_attr(mut self, attr: impl Into<String>) -> Self {
        self.attr = Some(attr.into());
        self
    }

    /// Set the attribute value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the lower bound
    pub fn with_min(mut self, min: u32) -> Self {
        self.min = min;
        self
    }

    /// Set the upper bound
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Override the check for this instance
    pub fn with_check(mut self, check: Check) -> Self {
        self.check = Some(check.name().to_string());
        self
    }

    /// Override the selector and warning templates for this instance
    pub fn with_templates(mut self, query: impl Into<String>, message: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self.message = Some(message.into());
        self
    }
}

/// Check name and templates in effect for one instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub check: &'a str,
    pub query: &'a str,
    pub message: &'a str,
}

/// A rule: which check to run, its templates and its instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: RuleId,

    /// Check name (exists, not_exists, max_occurrence, attr_match)
    #[serde(default)]
    pub check: String,

    /// Selector template
    #[serde(default)]
    pub query: String,

    /// Warning message template
    #[serde(default)]
    pub message: String,

    /// Human readable summary shown by `seolens rules`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub instances: Vec<RuleInstance>,
}

impl RuleDefinition {
    /// Create a definition without instances
    pub fn new(
        id: impl Into<RuleId>,
        check: Check,
        query: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            check: check.name().to_string(),
            query: query.into(),
            message: message.into(),
            description: None,
            instances: Vec::new(),
        }
    }

    /// Append an instance
    pub fn with_instance(mut self, instance: RuleInstance) -> Self {
        self.instances.push(instance);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Resolve the check and templates that apply to `instance`
    pub fn binding<'a>(&'a self, instance: &'a RuleInstance) -> Binding<'a> {
        Binding {
            check: instance.check.as_deref().unwrap_or(&self.check),
            query: instance.query.as_deref().unwrap_or(&self.query),
            message: instance.message.as_deref().unwrap_or(&self.message),
        }
    }
}

/// Capability to look up rule definitions by id.
///
/// Absence is an expected outcome: not every rule id is configured.
pub trait RuleSource: Send + Sync {
    fn lookup(&self, rule_id: &RuleId) -> Option<RuleDefinition>;
}

impl RuleSource for Vec<RuleDefinition> {
    fn lookup(&self, rule_id: &RuleId) -> Option<RuleDefinition> {
        self.iter().find(|rule| &rule.id == rule_id).cloned()
    }
}

impl RuleSource for HashMap<RuleId, RuleDefinition> {
    fn lookup(&self, rule_id: &RuleId) -> Option<RuleDefinition> {
        self.get(rule_id).cloned()
    }
}
