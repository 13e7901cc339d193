//! Asymmetric key detection rule.
//!
//! A key is asymmetric when at least one loaded locale defines it and at
//! least one other loaded locale does not.

use std::collections::BTreeMap;

use crate::{
    core::{CheckContext, LocaleCoverage, LocaleMessages},
    issues::AsymmetricKeyIssue,
};

pub fn check_asymmetric_keys_issues(ctx: &CheckContext) -> Vec<AsymmetricKeyIssue> {
    check_asymmetric_keys(&ctx.diff().asymmetric, &ctx.loaded_messages())
}

/// Report each asymmetric key at its entry in the first locale that has it.
pub fn check_asymmetric_keys(
    asymmetric: &BTreeMap<String, LocaleCoverage>,
    locales: &[&LocaleMessages],
) -> Vec<AsymmetricKeyIssue> {
    asymmetric
        .iter()
        .filter_map(|(key, coverage)| {
            let source = coverage.present_in.first()?;
            let entry = locales
                .iter()
                .find(|m| &m.locale == source)?
                .get(key)?;
            Some(AsymmetricKeyIssue {
                context: entry.context.clone(),
                locale: source.clone(),
                missing_in: coverage.missing_in.clone(),
            })
        })
        .collect()
}
