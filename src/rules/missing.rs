//! Missing translation key detection rule.
//!
//! A key is missing when code uses it and no loaded locale defines it.
//! Every call site of such a key is reported.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    core::{CheckContext, SourceContext},
    issues::MissingKeyIssue,
};

pub fn check_missing_keys_issues(ctx: &CheckContext) -> Vec<MissingKeyIssue> {
    check_missing_keys(&ctx.diff().missing, &ctx.scan.usages)
}

/// Turn the missing key set into one issue per usage site.
pub fn check_missing_keys(
    missing: &BTreeSet<String>,
    usages: &BTreeMap<String, Vec<SourceContext>>,
) -> Vec<MissingKeyIssue> {
    missing
        .iter()
        .flat_map(|key| {
            usages
                .get(key)
                .into_iter()
                .flatten()
                .map(move |context| MissingKeyIssue {
                    context: context.clone(),
                    key: key.clone(),
                })
        })
        .collect()
}
