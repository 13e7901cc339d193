//! FillPlaceholder action.
//!
//! Writes a marked copy of another locale's value for every asymmetric key.
//! Used by the `keyaudit repair` command.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{operation::Operation, traits::Action};
use crate::core::{
    LocaleCoverage, LocaleMessages, MessageContext, MessageLocation,
    parsers::json::display_value,
};

/// One placeholder to write into a locale that lacks a key.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderFill {
    /// Target file and key; `value` is the rendered placeholder.
    pub context: MessageContext,
    pub locale: String,
    pub source_locale: String,
    pub value: Value,
}

/// Action to insert placeholder values into locale files.
pub struct FillPlaceholder;

impl Action<PlaceholderFill> for FillPlaceholder {
    fn to_operations(fills: &[PlaceholderFill]) -> Vec<Operation> {
        fills
            .iter()
            .map(|fill| Operation::InsertJsonKey {
                context: fill.context.clone(),
                value: fill.value.clone(),
            })
            .collect()
    }
}

/// Tag a source value with `marker`.
///
/// Strings become `"<marker> <text>"`, string array elements are tagged one by
/// one, and numbers, booleans and null are copied unchanged.
pub fn placeholder_value(source: &Value, marker: &str) -> Value {
    match source {
        Value::String(text) => Value::String(tag(text, marker)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::String(text) => Value::String(tag(text, marker)),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn tag(text: &str, marker: &str) -> String {
    if marker.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", marker, text)
    }
}

/// Plan one fill per (asymmetric key, locale lacking it).
///
/// The source is the first locale, in configured order, that has the key.
pub fn plan_fills<F>(
    asymmetric: &BTreeMap<String, LocaleCoverage>,
    locales: &[&LocaleMessages],
    marker_for: F,
) -> Vec<PlaceholderFill>
where
    F: Fn(&str) -> String,
{
    let find = |code: &str| locales.iter().find(|m| m.locale == code);

    let mut fills = Vec::new();
    for (key, coverage) in asymmetric {
        let Some(source_locale) = coverage.present_in.first() else {
            continue;
        };
        let Some(source) = find(source_locale.as_str()).and_then(|m| m.get(key)) else {
            continue;
        };
        for target_locale in &coverage.missing_in {
            let Some(target) = find(target_locale.as_str()) else {
                continue;
            };
            let value = placeholder_value(&source.raw, &marker_for(target_locale));
            fills.push(PlaceholderFill {
                context: MessageContext::new(
                    MessageLocation::with_line(target.file_path.as_str(), 1),
                    key.as_str(),
                    display_value(&value),
                ),
                locale: target_locale.clone(),
                source_locale: source_locale.clone(),
                value,
            });
        }
    }
    fills
}
