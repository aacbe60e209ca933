//! Placeholder substitution for selector and message templates
//!
//! Recognized placeholders are `{{root}}`, `{{tag}}`, `{{attr}}`,
//! `{{value}}`, `{{min}}` and `{{max}}`. Anything else between braces is
//! copied verbatim. Substitution is a single pass, so text coming from an
//! instance is never expanded again.

use crate::config::RuleInstance;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every recognized placeholder in `template` with the instance's value
pub fn resolve(template: &str, instance: &RuleInstance) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match placeholder(key, instance) {
            Some(value) => output.push_str(&value),
            None => {
                output.push_str(OPEN);
                output.push_str(key);
                output.push_str(CLOSE);
            }
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    output.push_str(rest);
    output
}

fn placeholder(key: &str, instance: &RuleInstance) -> Option<String> {
    let value = match key {
        "root" => instance.root.clone(),
        "tag" => instance.tag.clone(),
        "attr" => instance.attr.clone().unwrap_or_default(),
        "value" => instance.value.clone().unwrap_or_default(),
        "min" => instance.min.to_string(),
        "max" => instance.max.to_string(),
        _ => return None,
    };
    Some(value)
}
