//! Unused translation key detection rule.
//!
//! Detects keys defined in some locale but never referenced by code. Each
//! key is reported once, at its line in the first locale file that has it.

use std::collections::BTreeSet;

use crate::{
    core::{CheckContext, LocaleMessages},
    issues::UnusedKeyIssue,
};

pub fn check_unused_keys_issues(ctx: &CheckContext) -> Vec<UnusedKeyIssue> {
    check_unused_keys(&ctx.diff().unused, &ctx.loaded_messages())
}

/// Locate each unused key in the first locale (configured order) defining it.
pub fn check_unused_keys(
    unused: &BTreeSet<String>,
    locales: &[&LocaleMessages],
) -> Vec<UnusedKeyIssue> {
    unused
        .iter()
        .filter_map(|key| {
            locales
                .iter()
                .find_map(|m| m.get(key))
                .map(|entry| UnusedKeyIssue {
                    context: entry.context.clone(),
                })
        })
        .collect()
}

/// Every definition of every unused key, one per locale file that has it.
pub fn unused_key_sites(
    unused: &BTreeSet<String>,
    locales: &[&LocaleMessages],
) -> Vec<UnusedKeyIssue> {
    locales
        .iter()
        .flat_map(|m| {
            unused.iter().filter_map(move |key| {
                m.get(key).map(|entry| UnusedKeyIssue {
                    context: entry.context.clone(),
                })
            })
        })
        .collect()
}
