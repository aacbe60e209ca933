//! Built-in rule catalogue
//!
//! Rules 1 to 5 ship with the binary. A configuration file may replace any
//! of them by declaring a rule with the same id.

use super::{RuleDefinition, RuleId, RuleInstance};
use crate::rules::constants::{
    RULE_HEAD_METADATA, RULE_MISSING_ALT, RULE_MISSING_REL, RULE_SINGLE_H1, RULE_STRONG_LIMIT,
};
use crate::rules::predicates::Check;

const MISSING_ATTR_QUERY: &str = "{{root}} {{tag}}:not([{{attr}}])";
const MISSING_ATTR_MESSAGE: &str = "There are <{{tag}}> tags without {{attr}} attribute";

const TAG_QUERY: &str = "{{root}} {{tag}}";
const TAG_MISSING_MESSAGE: &str = "This HTML without <{{tag}}> tag";

const NAMED_TAG_QUERY: &str = r#"{{root}} {{tag}}[{{attr}}="{{value}}"]"#;
const NAMED_TAG_MISSING_MESSAGE: &str = r#"This HTML without <{{tag}} {{attr}}="{{value}}"> tag"#;

const TOO_MANY_MESSAGE: &str = "This HTML has more than {{max}} <{{tag}}> tags";

/// All built-in definitions in catalogue order
pub fn definitions() -> Vec<RuleDefinition> {
    vec![
        missing_alt(),
        missing_rel(),
        head_metadata(),
        strong_limit(),
        single_h1(),
    ]
}

/// Built-in definition for `rule_id`, if it is one
pub fn definition(rule_id: &RuleId) -> Option<RuleDefinition> {
    match rule_id {
        RuleId::Numeric(RULE_MISSING_ALT) => Some(missing_alt()),
        RuleId::Numeric(RULE_MISSING_REL) => Some(missing_rel()),
        RuleId::Numeric(RULE_HEAD_METADATA) => Some(head_metadata()),
        RuleId::Numeric(RULE_STRONG_LIMIT) => Some(strong_limit()),
        RuleId::Numeric(RULE_SINGLE_H1) => Some(single_h1()),
        _ => None,
    }
}

fn missing_alt() -> RuleDefinition {
    RuleDefinition::new(
        RULE_MISSING_ALT,
        Check::NotExists,
        MISSING_ATTR_QUERY,
        MISSING_ATTR_MESSAGE,
    )
    .with_description("Every <img> has an alt attribute")
    .with_instance(RuleInstance::new("body", "img").with_attr("alt"))
}

fn missing_rel() -> RuleDefinition {
    RuleDefinition::new(
        RULE_MISSING_REL,
        Check::NotExists,
        MISSING_ATTR_QUERY,
        MISSING_ATTR_MESSAGE,
    )
    .with_description("Every <a> has a rel attribute")
    .with_instance(RuleInstance::new("body", "a").with_attr("rel"))
}

fn head_metadata() -> RuleDefinition {
    RuleDefinition::new(
        RULE_HEAD_METADATA,
        Check::Exists,
        NAMED_TAG_QUERY,
        NAMED_TAG_MISSING_MESSAGE,
    )
    .with_description("<head> declares a title, a description and keywords")
    .with_instance(
        RuleInstance::new("head", "title").with_templates(TAG_QUERY, TAG_MISSING_MESSAGE),
    )
    .with_instance(
        RuleInstance::new("head", "meta")
            .with_attr("name")
            .with_value("description"),
    )
    .with_instance(
        RuleInstance::new("head", "meta")
            .with_attr("name")
            .with_value("keywords"),
    )
}

fn strong_limit() -> RuleDefinition {
    RuleDefinition::new(
        RULE_STRONG_LIMIT,
        Check::MaxOccurrence,
        TAG_QUERY,
        TOO_MANY_MESSAGE,
    )
    .with_description("No more than 15 <strong> tags")
    .with_instance(RuleInstance::new("body", "strong").with_max(15))
}

fn single_h1() -> RuleDefinition {
    RuleDefinition::new(
        RULE_SINGLE_H1,
        Check::MaxOccurrence,
        TAG_QUERY,
        TOO_MANY_MESSAGE,
    )
    .with_description("At most one <h1> tag")
    .with_instance(RuleInstance::new("body", "h1").with_max(1))
}
