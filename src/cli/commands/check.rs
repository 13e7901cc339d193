use anyhow::Result;

use super::super::args::CheckArgs;
use super::helper::finish;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        asymmetric::check_asymmetric_keys_issues,
        dynamic::check_dynamic_keys_issues,
        load::check_load_errors_issues,
        missing::check_missing_keys_issues,
        quality::{check_empty_values_issues, check_placeholders_issues},
        unused::check_unused_keys_issues,
    },
};

pub fn check(args: CheckArgs) -> Result<CommandResult> {
    let ctx = CheckContext::new(&args.common)?;
    let issues = collect_issues(&ctx);

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            diff: ctx.diff().clone(),
            dynamic: ctx.scan.dynamic.clone(),
        }),
        issues,
        &ctx,
    ))
}

/// Run every rule against the context.
pub fn collect_issues(ctx: &CheckContext) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(check_load_errors_issues(ctx).into_iter().map(Issue::LoadError));
    issues.extend(check_missing_keys_issues(ctx).into_iter().map(Issue::MissingKey));
    issues.extend(check_dynamic_keys_issues(ctx).into_iter().map(Issue::DynamicKey));
    issues.extend(check_asymmetric_keys_issues(ctx).into_iter().map(Issue::AsymmetricKey));
    issues.extend(check_unused_keys_issues(ctx).into_iter().map(Issue::UnusedKey));
    issues.extend(check_empty_values_issues(ctx).into_iter().map(Issue::EmptyValue));
    issues.extend(check_placeholders_issues(ctx).into_iter().map(Issue::Placeholder));
    issues
}
