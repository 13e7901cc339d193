use super::{CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::{Issue, Severity, compare_issues},
};

pub fn finish(summary: CommandSummary, mut issues: Vec<Issue>, ctx: &CheckContext) -> CommandResult {
    issues.sort_by(compare_issues);

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        source_files_checked: ctx.scan.files_scanned,
        locale_files_checked: ctx.loaded_messages().len(),
    }
}
