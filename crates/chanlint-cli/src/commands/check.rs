//! Check command implementation.

use anyhow::{Context, Result};
use chanlint_core::{Analyzer, Config, Severity};
use chanlint_rules::{recommended_rules, SendWithoutSelect, UnbufferedChannel};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    fail_on_parse_error: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let source = crate::config_resolver::resolve(path, config_path);
    let config = match &source {
        crate::config_resolver::ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let fail_on = match config.fail_on.as_deref() {
        Some(s) => s
            .parse::<Severity>()
            .map_err(|e| anyhow::anyhow!("Invalid fail_on in config: {e}"))?,
        None => Severity::Error,
    };

    // Build analyzer
    let mut builder = Analyzer::builder()
        .root(path)
        .fail_on_parse_error(fail_on_parse_error);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names, &config)
    } else {
        configure_rules(&config)
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    builder = builder.config(config);
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code if issues reach the configured threshold
    if result.has_issues_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Builds the default rule set, honoring per-rule options from config.
fn configure_rules(config: &Config) -> Vec<chanlint_core::RuleBox> {
    match config.rules.get("send-without-select") {
        Some(rule_config) => {
            let send = SendWithoutSelect::new()
                .allow_in_tests(rule_config.get_bool("allow_in_tests", false));
            vec![Box::new(send), Box::new(UnbufferedChannel::new())]
        }
        None => recommended_rules(),
    }
}

fn filter_rules(names: &[&str], config: &Config) -> Vec<chanlint_core::RuleBox> {
    let mut rules: Vec<chanlint_core::RuleBox> = Vec::new();

    for name in names {
        match *name {
            "send-without-select" | "CH001" => {
                let allow_in_tests = config
                    .rules
                    .get("send-without-select")
                    .map_or(false, |c| c.get_bool("allow_in_tests", false));
                rules.push(Box::new(
                    SendWithoutSelect::new().allow_in_tests(allow_in_tests),
                ));
            }
            "unbuffered-channel" | "CH002" => rules.push(Box::new(UnbufferedChannel::new())),
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
