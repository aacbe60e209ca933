//! Configuration loader

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, SeoLensError};
use crate::rules::evaluator::RuleEvaluator;

use super::{builtin, RuleDefinition, RuleId, RuleSource};

const CONFIG_FILENAME: &str = ".seolens.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rules enabled when none are given on the command line
    #[serde(default)]
    pub enabled: Vec<RuleId>,

    /// Custom rules, and replacements for built-in ones
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl Config {
    /// Load configuration from file or return default
    pub fn load_or_default() -> Result<Self, SeoLensError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SeoLensError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, SeoLensError> {
        toml::from_str(content)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, SeoLensError> {
        toml::to_string_pretty(self)
            .map_err(ConfigError::from)
            .map_err(Into::into)
    }

    /// Reject duplicate ids and rules with malformed instances
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for rule in &self.rules {
            if !seen.insert(&rule.id) {
                return Err(ConfigError::DuplicateRule {
                    rule_id: rule.id.clone(),
                });
            }

            if let Some(index) = rule
                .instances
                .iter()
                .position(|instance| !RuleEvaluator::is_well_formed(rule, instance))
            {
                return Err(ConfigError::MalformedRule {
                    rule_id: rule.id.clone(),
                    index,
                });
            }
        }

        Ok(())
    }

    /// Every known rule: built-ins (possibly replaced) then custom rules in file order
    pub fn all_rules(&self) -> Vec<RuleDefinition> {
        let mut rules: Vec<RuleDefinition> = builtin::definitions()
            .into_iter()
            .map(|rule| self.custom_rule(&rule.id).cloned().unwrap_or(rule))
            .collect();

        rules.extend(
            self.rules
                .iter()
                .filter(|rule| builtin::definition(&rule.id).is_none())
                .cloned(),
        );

        rules
    }

    /// Ids of every known rule
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.all_rules().into_iter().map(|rule| rule.id).collect()
    }

    fn custom_rule(&self, rule_id: &RuleId) -> Option<&RuleDefinition> {
        self.rules.iter().find(|rule| &rule.id == rule_id)
    }
}

impl RuleSource for Config {
    fn lookup(&self, rule_id: &RuleId) -> Option<RuleDefinition> {
        self.custom_rule(rule_id)
            .cloned()
            .or_else(|| builtin::definition(rule_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ROBOTS_CONFIG: &str = r#"
enabled = [1, "single-h1", 101]

[[rules]]
id = 101
check = "exists"
query = '{{root}} {{tag}}[{{attr}}="{{value}}"]'
message = 'This HTML without <{{tag}} {{attr}}="{{value}}"> tag'

[[rules.instances]]
root = "head"
tag = "meta"
attr = "name"
value = "robots"
"#;

    #[test]
    fn test_default_config_has_only_builtins() {
        let config = Config::default();
        assert!(config.enabled.is_empty());
        assert_eq!(config.all_rules().len(), 5);
        assert!(config.lookup(&RuleId::Numeric(1)).is_some());
        assert!(config.lookup(&RuleId::Numeric(101)).is_none());
    }

    #[test]
    fn test_parse_custom_rule() {
        let config = Config::from_toml(ROBOTS_CONFIG).unwrap();
        config.validate().unwrap();

        assert_eq!(
            config.enabled,
            vec![RuleId::Numeric(1), RuleId::Numeric(5), RuleId::Numeric(101)]
        );

        let robots = config.lookup(&RuleId::Numeric(101)).unwrap();
        assert!(robots.id.is_custom());
        assert_eq!(robots.check, "exists");
        assert_eq!(robots.instances.len(), 1);
        assert_eq!(robots.instances[0].value.as_deref(), Some("robots"));
        assert_eq!(config.all_rules().len(), 6);
    }

    #[test]
    fn test_custom_rule_replaces_builtin() {
        let config = Config::from_toml(
            r#"
[[rules]]
id = 4
check = "max_occurrence"
query = "{{root}} {{tag}}"
message = "too many"

[[rules.instances]]
root = "body"
tag = "strong"
max = 3
"#,
        )
        .unwrap();

        let strong = config.lookup(&RuleId::Numeric(4)).unwrap();
        assert_eq!(strong.instances[0].max, 3);
        assert_eq!(config.all_rules().len(), 5);
    }

    #[test]
    fn test_rejects_malformed_instance() {
        let config = Config::from_toml(
            r#"
[[rules]]
id = 102
check = "exists"
query = "{{root}} {{tag}}"
message = "missing"

[[rules.instances]]
root = "head"
tag = "title"

[[rules.instances]]
root = "head"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MalformedRule { index: 1, .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let content = format!("{ROBOTS_CONFIG}\n{}", &ROBOTS_CONFIG[ROBOTS_CONFIG.find("[[rules]]").unwrap()..]);
        let err = Config::from_toml(&content).unwrap().validate().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRule { .. }));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = Config::from_toml("enabled = [").unwrap_err();
        assert!(matches!(err, SeoLensError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ROBOTS_CONFIG.as_bytes()).unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file(Path::new("/nonexistent/.seolens.toml")).unwrap_err();
        assert!(matches!(
            err,
            SeoLensError::Config(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_to_toml_round_trips_rules() {
        let config = Config::from_toml(ROBOTS_CONFIG).unwrap();
        let rendered = config.to_toml().unwrap();
        let reparsed = Config::from_toml(&rendered).unwrap();
        assert_eq!(reparsed.rules, config.rules);
    }
}
