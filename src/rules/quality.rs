//! Value quality rules: empty strings and leftover placeholders.
//!
//! Placeholders are values still carrying a repair marker (for any
//! configured locale) or a `TODO`/`TBD` note.

use serde_json::Value;

use crate::{
    core::{CheckContext, LocaleMessages},
    issues::{EmptyValueIssue, PlaceholderIssue},
};

const NOTE_WORDS: &[&str] = &["TODO", "TBD"];

pub fn check_empty_values_issues(ctx: &CheckContext) -> Vec<EmptyValueIssue> {
    check_empty_values(&ctx.loaded_messages())
}

pub fn check_placeholders_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    let markers: Vec<String> = ctx
        .config
        .locales
        .iter()
        .map(|l| ctx.config.marker_for(l))
        .filter(|m| !m.trim().is_empty())
        .collect();
    check_placeholders(&ctx.loaded_messages(), &markers)
}

/// String leaves that are empty or whitespace only.
pub fn check_empty_values(locales: &[&LocaleMessages]) -> Vec<EmptyValueIssue> {
    locales
        .iter()
        .flat_map(|messages| {
            messages
                .entries
                .values()
                .filter(|entry| matches!(&entry.raw, Value::String(s) if s.trim().is_empty()))
                .map(move |entry| EmptyValueIssue {
                    context: entry.context.clone(),
                    locale: messages.locale.clone(),
                })
        })
        .collect()
}

/// String leaves (or string array elements) that still hold a placeholder.
pub fn check_placeholders(locales: &[&LocaleMessages], markers: &[String]) -> Vec<PlaceholderIssue> {
    let mut issues = Vec::new();
    for messages in locales {
        for entry in messages.entries.values() {
            let found = match &entry.raw {
                Value::String(s) => find_placeholder(s, markers),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .find_map(|s| find_placeholder(s, markers)),
                _ => None,
            };
            if let Some(marker) = found {
                issues.push(PlaceholderIssue {
                    context: entry.context.clone(),
                    locale: messages.locale.clone(),
                    marker,
                });
            }
        }
    }
    issues
}

fn find_placeholder(value: &str, markers: &[String]) -> Option<String> {
    let trimmed = value.trim_start();
    if let Some(marker) = markers.iter().find(|m| trimmed.starts_with(m.as_str())) {
        return Some(marker.clone());
    }
    value
        .split(|c: char| !c.is_alphanumeric())
        .find(|word| NOTE_WORDS.contains(word))
        .map(str::to_string)
}
