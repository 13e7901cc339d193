//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format on stdout, grouped by rule and
//! sorted by key. `--format json` prints the same data as one JSON document.

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{ActionStats, Operation},
    args::OutputFormat,
    commands::{CheckSummary, CleanSummary, CommandResult, CommandSummary, RepairSummary},
};
use crate::{
    core::DiffReport,
    issues::{Issue, Report, ReportLocation, Rule, Severity, compare_issues},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, format: OutputFormat) {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text_to(result, &mut out),
        OutputFormat::Json => print_json_to(result, &mut out),
    }
}

pub fn print_text_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(_) => {
            report_to(&result.issues, writer);
            if result.issues.is_empty() {
                print_success_to(
                    result.source_files_checked,
                    result.locale_files_checked,
                    writer,
                );
            }
        }
        CommandSummary::Repair(summary) => {
            print_repair(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary, writer);
            report_to(&result.issues, writer);
        }
    }
}

/// Print issues in cargo-style format.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = calculate_max_line_width(&sorted);
    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, locale_files: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} source {}, {} locale {} - no issues found",
        source_files,
        if source_files == 1 { "file" } else { "files" },
        locale_files,
        if locale_files == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Issues
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match loc {
        ReportLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            print_excerpt(
                &ctx.source_line,
                ctx.line(),
                ctx.col(),
                severity,
                writer,
                max_line_width,
            );
        }
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_excerpt<W: Write>(
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    writer: &mut W,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // col is 1-based and counted in characters
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );

    let mut per_rule: BTreeMap<Rule, usize> = BTreeMap::new();
    for issue in issues {
        *per_rule.entry(issue.rule()).or_default() += 1;
    }
    let counts = per_rule
        .iter()
        .map(|(rule, count)| format!("{}: {}", rule, count))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(writer, "  {}", counts.dimmed());
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Message(_) | ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Repair / Clean
// ============================================================

fn print_repair<W: Write>(summary: &RepairSummary, writer: &mut W) {
    if summary.planned_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No asymmetric keys - nothing to repair".green()
        );
        return;
    }

    let stats = &summary.stats;
    if !summary.is_apply {
        for op in &stats.applied {
            op.preview_to(writer);
        }
    }
    print_skipped(
        &stats.skipped,
        "placeholder(s) skipped: key path collides with an existing value",
        writer,
    );

    let count = persisted_count(stats, summary.is_apply);
    if count == 0 {
        return;
    }
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} placeholder(s) in {} file(s).",
            "Added".green().bold(),
            count,
            stats.files_modified
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} placeholder(s) in {} file(s).",
            "Would add".yellow().bold(),
            count,
            stats.files_modified
        );
        let _ = writeln!(
            writer,
            "Run with {} to write these placeholders.",
            "--apply".cyan()
        );
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.key_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused keys - nothing to clean".green()
        );
        return;
    }

    let stats = &summary.stats;
    if !summary.is_apply {
        for op in &stats.applied {
            op.preview_to(writer);
        }
    }
    print_skipped(&stats.skipped, "key(s) skipped: no longer present", writer);

    let count = persisted_count(stats, summary.is_apply);
    if count == 0 {
        return;
    }
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s).",
            "Deleted".green().bold(),
            count,
            stats.files_modified
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s).",
            "Would delete".yellow().bold(),
            count,
            stats.files_modified
        );
        let _ = writeln!(writer, "Run with {} to delete these keys.", "--apply".cyan());
    }
}

fn print_skipped<W: Write>(skipped: &[Operation], reason: &str, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} {}",
        "warning:".bold().yellow(),
        skipped.len(),
        reason
    );
    for op in skipped {
        let _ = writeln!(writer, "  {} {}  \"{}\"", "!".yellow(), op.file_path(), op.key());
    }
}

/// Applied operations whose file was (or, in a dry run, would be) saved.
fn persisted_count(stats: &ActionStats, is_apply: bool) -> usize {
    if !is_apply {
        return stats.applied.len();
    }
    stats
        .applied
        .iter()
        .filter(|op| !stats.write_errors.iter().any(|e| e.file_path == op.file_path()))
        .count()
}

// ============================================================
// JSON
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    source_files: usize,
    locale_files: usize,
}

#[derive(Serialize)]
struct JsonIssue {
    rule: String,
    file: String,
    message: String,
}

#[derive(Serialize)]
struct JsonDynamicKey<'a> {
    pattern: &'a str,
    file: &'a str,
    line: usize,
    col: usize,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    #[serde(flatten)]
    diff: &'a DiffReport,
    dynamic: Vec<JsonDynamicKey<'a>>,
    errors: Vec<JsonIssue>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonChange<'a> {
    file: &'a str,
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a Value>,
}

#[derive(Serialize)]
struct JsonEdit<'a> {
    apply: bool,
    changes: Vec<JsonChange<'a>>,
    skipped: Vec<JsonChange<'a>>,
    errors: Vec<JsonIssue>,
    summary: JsonSummary,
}

pub fn print_json_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let rendered = match &result.summary {
        CommandSummary::Check(summary) => serde_json::to_string_pretty(&check_json(result, summary)),
        CommandSummary::Repair(summary) => {
            serde_json::to_string_pretty(&edit_json(result, &summary.stats, summary.is_apply))
        }
        CommandSummary::Clean(summary) => {
            serde_json::to_string_pretty(&edit_json(result, &summary.stats, summary.is_apply))
        }
    };
    match rendered {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(e) => warn!("cannot render JSON report: {}", e),
    }
}

fn check_json<'a>(result: &'a CommandResult, summary: &'a CheckSummary) -> JsonCheck<'a> {
    JsonCheck {
        diff: &summary.diff,
        dynamic: summary
            .dynamic
            .iter()
            .map(|d| JsonDynamicKey {
                pattern: &d.pattern,
                file: d.context.file_path(),
                line: d.context.line(),
                col: d.context.col(),
            })
            .collect(),
        errors: file_errors(&result.issues),
        summary: json_summary(result),
    }
}

fn edit_json<'a>(result: &'a CommandResult, stats: &'a ActionStats, apply: bool) -> JsonEdit<'a> {
    JsonEdit {
        apply,
        changes: stats.applied.iter().map(json_change).collect(),
        skipped: stats.skipped.iter().map(json_change).collect(),
        errors: file_errors(&result.issues),
        summary: json_summary(result),
    }
}

fn json_change(op: &Operation) -> JsonChange<'_> {
    JsonChange {
        file: op.file_path(),
        key: op.key(),
        value: match op {
            Operation::InsertJsonKey { value, .. } => Some(value),
            Operation::DeleteJsonKey { .. } => None,
        },
    }
}

/// Load and write errors; the key-level findings are already in the diff.
fn file_errors(issues: &[Issue]) -> Vec<JsonIssue> {
    issues
        .iter()
        .filter(|i| matches!(i.rule(), Rule::LoadError | Rule::WriteError))
        .map(|i| JsonIssue {
            rule: i.rule().to_string(),
            file: match i.location() {
                ReportLocation::File { path } => path.to_string(),
                ReportLocation::Source(ctx) => ctx.file_path().to_string(),
                ReportLocation::Message(ctx) => ctx.file_path().to_string(),
            },
            message: i.message(),
        })
        .collect()
}

fn json_summary(result: &CommandResult) -> JsonSummary {
    JsonSummary {
        errors: result.error_count,
        warnings: result.warning_count,
        source_files: result.source_files_checked,
        locale_files: result.locale_files_checked,
    }
}

// ============================================================
// Tests
// ============================================================
