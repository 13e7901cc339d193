//! Dynamic key detection rule.
//!
//! Template literals with interpolation (`` t(`nav.${id}`) ``) are recorded by
//! the scanner but never resolved to keys, so they are surfaced here instead
//! of being silently dropped.

use crate::{core::CheckContext, core::scanner::DynamicKeyUsage, issues::DynamicKeyIssue};

pub fn check_dynamic_keys_issues(ctx: &CheckContext) -> Vec<DynamicKeyIssue> {
    check_dynamic_keys(&ctx.scan.dynamic)
}

pub fn check_dynamic_keys(usages: &[DynamicKeyUsage]) -> Vec<DynamicKeyIssue> {
    usages
        .iter()
        .map(|usage| DynamicKeyIssue {
            context: usage.context.clone(),
            pattern: usage.pattern.clone(),
        })
        .collect()
}
