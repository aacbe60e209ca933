//! Built-in rule identifiers and command-line aliases

use colored::Colorize;

use crate::config::RuleId;

/// Highest rule id reserved for built-in rules. Anything above is custom.
pub const SYSTEM_RULE_MAX: u32 = 100;

/// Every `<img>` carries an `alt` attribute
pub const RULE_MISSING_ALT: u32 = 1;
/// Every `<a>` carries a `rel` attribute
pub const RULE_MISSING_REL: u32 = 2;
/// `<head>` holds a title, a description meta and a keywords meta
pub const RULE_HEAD_METADATA: u32 = 3;
/// No more than 15 `<strong>` tags
pub const RULE_STRONG_LIMIT: u32 = 4;
/// At most one `<h1>`
pub const RULE_SINGLE_H1: u32 = 5;

/// Built-in rule ids paired with the alias accepted on the command line
pub const BUILTIN_RULES: &[(u32, &str)] = &[
    (RULE_MISSING_ALT, "missing-alt"),
    (RULE_MISSING_REL, "missing-rel"),
    (RULE_HEAD_METADATA, "head-metadata"),
    (RULE_STRONG_LIMIT, "strong-limit"),
    (RULE_SINGLE_H1, "single-h1"),
];

/// Ids of all built-in rules, in catalogue order
pub fn builtin_ids() -> impl Iterator<Item = RuleId> {
    BUILTIN_RULES.iter().map(|(id, _)| RuleId::Numeric(*id))
}

/// Resolve a built-in alias (case-insensitive) to its numeric id
pub fn alias_to_id(alias: &str) -> Option<u32> {
    let alias = alias.to_lowercase();
    BUILTIN_RULES
        .iter()
        .find(|(_, name)| *name == alias)
        .map(|(id, _)| *id)
}

/// Alias of a built-in rule id, if it has one
pub fn id_to_alias(id: u32) -> Option<&'static str> {
    BUILTIN_RULES
        .iter()
        .find(|(builtin, _)| *builtin == id)
        .map(|(_, name)| *name)
}

/// Parse a list of rule ids from the command line, printing warnings for invalid ones
pub fn parse_rule_ids(raw: &[String]) -> Result<Vec<RuleId>, String> {
    let mut ids = Vec::new();
    for value in raw {
        match value.parse::<RuleId>() {
            Ok(id) => ids.push(id),
            Err(e) => {
                eprintln!(
                    "{} Invalid rule id '{}': {}. Built-in rules: {}",
                    "Warning:".yellow(),
                    value.cyan(),
                    e,
                    BUILTIN_RULES
                        .iter()
                        .map(|(id, name)| format!("{id} ({name})"))
                        .collect::<Vec<_>>()
                        .join(", ")
                        .dimmed()
                );
                return Err(value.clone());
            }
        }
    }
    Ok(ids)
}
