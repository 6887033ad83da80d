//! Shared output formatting for scan results.

use anyhow::Result;
use chanlint_core::{Issue, ScanResult, Severity};
use serde::Serialize;

use crate::OutputFormat;

/// Print scan results in the specified format.
pub fn print(result: &ScanResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &ScanResult) {
    if result.issues.is_empty() {
        println!(
            "\x1b[32mNo issues found in {} file(s)\x1b[0m",
            result.files_checked
        );
        return;
    }

    let (errors, warnings, infos) = result.count_by_severity();

    for issue in &result.issues {
        let severity_indicator = match issue.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            issue.code,
            issue.rule,
            issue.location.file.display(),
            issue.location.line,
            issue.location.column,
        );
        println!("  {}: {}", severity_indicator, issue.message);
        println!();
    }

    let summary_color = if errors > 0 || warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color,
        errors,
        warnings,
        infos,
        result.files_checked
    );
}

/// JSON envelope: issue list plus totals.
#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    files_checked: usize,
    issues: &'a [Issue],
}

fn print_json(result: &ScanResult) -> Result<()> {
    let report = JsonReport {
        total: result.issues.len(),
        files_checked: result.files_checked,
        issues: &result.issues,
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &ScanResult) {
    for issue in &result.issues {
        println!(
            "{}:{}:{}: {} [{}] {}",
            issue.location.file.display(),
            issue.location.line,
            issue.location.column,
            issue.severity,
            issue.code,
            issue.message,
        );
    }
}
