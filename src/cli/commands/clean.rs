use anyhow::Result;

use super::super::{
    actions::{Action, DeleteKey},
    args::CleanArgs,
};
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{load::check_load_errors_issues, unused::unused_key_sites},
};

/// Delete unused keys (after `ignoreUnused`) from every locale file.
pub fn clean(args: CleanArgs) -> Result<CommandResult> {
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let unused = &ctx.diff().unused;
    let sites = unused_key_sites(unused, &ctx.loaded_messages());

    let stats = if apply {
        DeleteKey::run(&sites)
    } else {
        DeleteKey::preview(&sites)
    };

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(check_load_errors_issues(&ctx).into_iter().map(Issue::LoadError));
    issues.extend(stats.write_errors.iter().cloned().map(Issue::WriteError));

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            key_count: unused.len(),
            stats,
            is_apply: apply,
        }),
        issues,
        &ctx,
    ))
}
