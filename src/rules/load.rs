use crate::{core::CheckContext, core::parsers::json::LoadError, issues::LoadErrorIssue};

pub fn check_load_errors_issues(ctx: &CheckContext) -> Vec<LoadErrorIssue> {
    check_load_errors(&ctx.load.errors)
}

/// Every locale file that failed to load is an error-severity issue.
pub fn check_load_errors(errors: &[LoadError]) -> Vec<LoadErrorIssue> {
    errors
        .iter()
        .map(|e| LoadErrorIssue {
            file_path: e.file_path.clone(),
            locale: e.locale.clone(),
            error: e.error.clone(),
        })
        .collect()
}
