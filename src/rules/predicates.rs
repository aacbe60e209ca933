//! Structural checks
//!
//! Each check decides pass/fail for one rule instance against the parsed
//! document. [`Check::predicate`] is the only dispatch point from a
//! configured check name to its implementation.

use serde::{Deserialize, Serialize};

use super::document::QueryDocument;
use crate::config::RuleInstance;
use crate::error::FaultCause;

/// The checks a rule can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// At least one node matches the query
    Exists,
    /// No node matches the query
    NotExists,
    /// At most `max` nodes match the query
    MaxOccurrence,
    /// The query selects violating nodes; any match fails
    AttrMatch,
}

/// Pass/fail decision for one instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub message: String,
}

impl Outcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    fn decide(passed: bool, message: &str) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::fail(message)
        }
    }
}

/// Signature shared by every check: document, instance, resolved query, resolved message
pub type PredicateFn = fn(&QueryDocument, &RuleInstance, &str, &str) -> Result<Outcome, FaultCause>;

impl Check {
    /// Parse a configured check name.
    ///
    /// Accepts snake_case, kebab-case and upper-case spellings, plus the
    /// legacy method names (`checkShouldExist` and friends) found in older
    /// rule files.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "exists" | "should_exist" | "checkshouldexist" => Some(Self::Exists),
            "not_exists" | "should_not_exist" | "checkshouldnotexist" => Some(Self::NotExists),
            "max_occurrence" | "checkmaxoccurrence" => Some(Self::MaxOccurrence),
            "attr_match" | "should_match_tag_attr" | "checkshouldmatchtagattr" => {
                Some(Self::AttrMatch)
            }
            _ => None,
        }
    }

    /// Canonical name, as written in configuration
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::NotExists => "not_exists",
            Self::MaxOccurrence => "max_occurrence",
            Self::AttrMatch => "attr_match",
        }
    }

    /// Implementation of this check
    pub fn predicate(self) -> PredicateFn {
        match self {
            Self::Exists => should_exist,
            Self::NotExists => should_not_exist,
            Self::MaxOccurrence => max_occurrence,
            Self::AttrMatch => attr_match,
        }
    }
}

fn should_exist(
    document: &QueryDocument,
    _instance: &RuleInstance,
    query: &str,
    message: &str,
) -> Result<Outcome, FaultCause> {
    Ok(Outcome::decide(document.matches(query)?, message))
}

fn should_not_exist(
    document: &QueryDocument,
    _instance: &RuleInstance,
    query: &str,
    message: &str,
) -> Result<Outcome, FaultCause> {
    Ok(Outcome::decide(!document.matches(query)?, message))
}

fn max_occurrence(
    document: &QueryDocument,
    instance: &RuleInstance,
    query: &str,
    message: &str,
) -> Result<Outcome, FaultCause> {
    let total = document.count(query)?;
    Ok(Outcome::decide(total <= instance.max as usize, message))
}

// The query is expected to select the offending nodes, so a rule author
// writes e.g. `a[target="_blank"]:not([rel])`. Presence of the attribute
// with a wrong value is not told apart from its absence.
fn attr_match(
    document: &QueryDocument,
    _instance: &RuleInstance,
    query: &str,
    message: &str,
) -> Result<Outcome, FaultCause> {
    let total = document.count(query)?;
    Ok(Outcome::decide(total == 0, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_page(count: usize) -> QueryDocument {
        let body = "<strong>x</strong>".repeat(count);
        QueryDocument::parse(&format!("<html><body>{body}</body></html>"))
    }

    fn run(check: Check, doc: &QueryDocument, instance: &RuleInstance, query: &str) -> Outcome {
        check.predicate()(doc, instance, query, "warning").unwrap()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Check::from_name("exists"), Some(Check::Exists));
        assert_eq!(Check::from_name("NOT_EXISTS"), Some(Check::NotExists));
        assert_eq!(Check::from_name("not-exists"), Some(Check::NotExists));
        assert_eq!(Check::from_name("max_occurrence"), Some(Check::MaxOccurrence));
        assert_eq!(Check::from_name("ATTR_MATCH"), Some(Check::AttrMatch));
        assert_eq!(Check::from_name("checkShouldExist"), Some(Check::Exists));
        assert_eq!(Check::from_name("checkMaxOccurrence"), Some(Check::MaxOccurrence));
        assert_eq!(Check::from_name("checkEverything"), None);
        assert_eq!(Check::from_name(""), None);
    }

    #[test]
    fn test_name_round_trips() {
        for check in [Check::Exists, Check::NotExists, Check::MaxOccurrence, Check::AttrMatch] {
            assert_eq!(Check::from_name(check.name()), Some(check));
        }
    }

    #[test]
    fn test_exists() {
        let doc = QueryDocument::parse("<html><head><title>t</title></head></html>");
        let instance = RuleInstance::new("head", "title");

        assert!(run(Check::Exists, &doc, &instance, "head title").passed);

        let outcome = run(Check::Exists, &doc, &instance, "head meta");
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "warning");
    }

    #[test]
    fn test_not_exists() {
        let doc = QueryDocument::parse(r#"<body><img src="a.png"></body>"#);
        let instance = RuleInstance::new("body", "img").with_attr("alt");

        assert!(!run(Check::NotExists, &doc, &instance, "body img:not([alt])").passed);
        assert!(run(Check::NotExists, &doc, &instance, "body img[alt]").passed);
    }

    #[test]
    fn test_max_occurrence_boundary() {
        let instance = RuleInstance::new("body", "strong").with_max(15);

        assert!(run(Check::MaxOccurrence, &strong_page(15), &instance, "body strong").passed);
        assert!(!run(Check::MaxOccurrence, &strong_page(16), &instance, "body strong").passed);
        assert!(run(Check::MaxOccurrence, &strong_page(0), &instance, "body strong").passed);
    }

    #[test]
    fn test_attr_match_fails_on_any_match() {
        let doc = QueryDocument::parse(
            r#"<body><a href="/" target="_blank">x</a><a href="/" rel="noopener">y</a></body>"#,
        );
        let instance = RuleInstance::new("body", "a").with_attr("rel");

        assert!(!run(Check::AttrMatch, &doc, &instance, r#"body a[target="_blank"]:not([rel])"#).passed);
        assert!(run(Check::AttrMatch, &doc, &instance, r#"body a[rel="nofollow"]"#).passed);
    }

    #[test]
    fn test_passing_outcome_has_empty_message() {
        let doc = QueryDocument::parse("<body></body>");
        let outcome = run(Check::NotExists, &doc, &RuleInstance::default(), "img");
        assert_eq!(outcome, Outcome::pass());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let doc = QueryDocument::parse("<body></body>");
        let result = Check::Exists.predicate()(&doc, &RuleInstance::default(), "body [", "m");
        assert!(matches!(result, Err(FaultCause::InvalidSelector { .. })));
    }
}
