//! Rules command - List known rules

use colored::Colorize;
use std::path::PathBuf;

use super::RulesArgs;
use crate::cli::exit_codes;
use crate::error::SeoLensError;
use crate::rules::evaluator::RuleEvaluator;
use crate::rules::predicates::Check;

pub async fn execute(args: RulesArgs, config_path: Option<PathBuf>) -> Result<i32, SeoLensError> {
    let config = super::load_config(config_path.as_deref())?;
    let rules = config.all_rules();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(exit_codes::SUCCESS);
    }

    let mut malformed = 0;

    for rule in &rules {
        let kind = if rule.id.is_custom() {
            "custom".magenta()
        } else {
            "builtin".blue()
        };
        let check = match Check::from_name(&rule.check) {
            Some(check) => check.name().normal(),
            None if rule.check.is_empty() => "-".dimmed(),
            None => rule.check.red(),
        };

        println!(
            "{:>5} {:<14} {:<8} {:<15} {}",
            rule.id.to_string().cyan().bold(),
            rule.id.alias().unwrap_or(""),
            kind,
            check,
            rule.description.as_deref().unwrap_or("").dimmed()
        );

        for (index, instance) in rule.instances.iter().enumerate() {
            let well_formed = RuleEvaluator::is_well_formed(rule, instance);
            if !well_formed {
                malformed += 1;
            }

            let status = if well_formed { "✓".green() } else { "✗".red() };
            let mut target = format!("<{}> in <{}>", instance.tag, instance.root);
            if let Some(attr) = &instance.attr {
                match &instance.value {
                    Some(value) => target.push_str(&format!(" {attr}=\"{value}\"")),
                    None => target.push_str(&format!(" [{attr}]")),
                }
            }

            println!("      {} #{} {}", status, index, target.dimmed());
        }
    }

    if malformed > 0 {
        eprintln!(
            "{} {} malformed rule instance(s)",
            "Error:".red().bold(),
            malformed
        );
        return Ok(exit_codes::ERROR);
    }

    Ok(exit_codes::SUCCESS)
}
