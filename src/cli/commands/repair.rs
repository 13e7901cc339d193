use anyhow::Result;
use tracing::debug;

use super::super::{
    actions::{Action, FillPlaceholder, plan_fills},
    args::RepairArgs,
};
use super::helper::finish;
use super::{CommandResult, CommandSummary, RepairSummary};
use crate::{core::CheckContext, issues::Issue, rules::load::check_load_errors_issues};

/// Fill every asymmetric key with a marked copy of another locale's value.
///
/// Only locales that loaded are ever written; a malformed file stays as it is.
pub fn repair(args: RepairArgs) -> Result<CommandResult> {
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let fills = plan_fills(&ctx.diff().asymmetric, &ctx.loaded_messages(), |locale| {
        ctx.config.marker_for(locale)
    });
    debug!(count = fills.len(), apply, "planned placeholders");

    let stats = if apply {
        FillPlaceholder::run(&fills)
    } else {
        FillPlaceholder::preview(&fills)
    };

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(check_load_errors_issues(&ctx).into_iter().map(Issue::LoadError));
    issues.extend(stats.write_errors.iter().cloned().map(Issue::WriteError));

    Ok(finish(
        CommandSummary::Repair(RepairSummary {
            planned_count: fills.len(),
            stats,
            is_apply: apply,
        }),
        issues,
        &ctx,
    ))
}
