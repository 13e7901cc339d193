use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{
    AllLocaleMessages, LocaleMessages, MessageContext, MessageEntry, MessageLocation, ValueType,
};

/// One locale's nested translation tree, as read from `<locale>.json`.
pub type LocaleDictionary = Map<String, Value>;

/// A locale file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub locale: String,
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadResult {
    /// One entry per configured locale, in configured order. Locales that
    /// failed to load are present with no entries.
    pub messages: AllLocaleMessages,
    pub errors: Vec<LoadError>,
}

impl LoadResult {
    pub fn is_loaded(&self, locale: &str) -> bool {
        self.messages.iter().any(|m| m.locale == locale)
            && !self.errors.iter().any(|e| e.locale == locale)
    }
}

pub fn locale_file_path(messages_dir: &Path, locale: &str) -> PathBuf {
    messages_dir.join(format!("{}.json", locale))
}

/// Read and parse a locale file into its nested dictionary.
pub fn read_dictionary(path: &Path) -> Result<LocaleDictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    parse_dictionary(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

fn parse_dictionary(content: &str) -> Result<LocaleDictionary> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        other => bail!(
            "top-level value must be an object, found {}",
            ValueType::of(&other).map_or_else(|| "object".to_string(), |t| t.to_string())
        ),
    }
}

/// Load and flatten a single locale file.
pub fn load_locale(messages_dir: &Path, locale: &str) -> Result<LocaleMessages> {
    let path = locale_file_path(messages_dir, locale);
    if !path.exists() {
        bail!("Locale file does not exist: {}", path.display());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let dictionary = parse_dictionary(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    let file_path = path.to_string_lossy().to_string();
    let line_index = build_line_index(&content);
    let mut messages = LocaleMessages::new(locale, file_path.as_str());
    flatten_into(&dictionary, "", &content, &line_index, &mut messages);
    debug!(locale, keys = messages.len(), file = %file_path, "loaded locale");
    Ok(messages)
}

/// Load every configured locale.
///
/// A missing or malformed file never aborts the run: the failure is recorded
/// and the locale continues as an empty key set.
pub fn load_locales(messages_dir: &Path, locales: &[String]) -> LoadResult {
    let mut result = LoadResult::default();

    for locale in locales {
        match load_locale(messages_dir, locale) {
            Ok(messages) => result.messages.push(messages),
            Err(e) => {
                let file_path = locale_file_path(messages_dir, locale)
                    .to_string_lossy()
                    .to_string();
                result.messages.push(LocaleMessages::new(locale, &file_path));
                result.errors.push(LoadError {
                    locale: locale.clone(),
                    file_path,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    result
}

/// Flatten a dictionary into dotted-path keys without location tracking.
pub fn flatten_dictionary(
    dictionary: &LocaleDictionary,
    locale: &str,
    file_path: &str,
) -> LocaleMessages {
    let mut messages = LocaleMessages::new(locale, file_path);
    flatten_into(dictionary, "", "", &[0], &mut messages);
    messages
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a dotted key's last segment is declared.
///
/// Walks the segments in order so `home.title` finds the `"title"` after
/// `"home"` rather than one in another namespace. A match only counts when
/// it is followed by `:`, so string values containing the same text are
/// skipped.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();
            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Render a leaf for display in reports.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn flatten_into(
    map: &LocaleDictionary,
    prefix: &str,
    content: &str,
    line_index: &[usize],
    result: &mut LocaleMessages,
) {
    for (key, value) in map {
        let full_key = join_key(prefix, key);
        let Some(value_type) = ValueType::of(value) else {
            if let Value::Object(child) = value {
                flatten_into(child, &full_key, content, line_index, result);
            }
            continue;
        };

        let line = if content.is_empty() {
            1
        } else {
            find_key_line(content, &full_key, line_index)
        };
        let context = MessageContext::new(
            MessageLocation::with_line(result.file_path.as_str(), line),
            full_key.as_str(),
            display_value(value),
        );
        result.entries.insert(
            full_key,
            MessageEntry {
                context,
                value_type,
                raw: value.clone(),
            },
        );
    }
}

/// Rebuild a nested dictionary from dotted-path keys.
///
/// A key whose path runs through an existing leaf is dropped, so the first
/// writer of a conflicting prefix wins.
pub fn nest_keys<'a, I>(entries: I) -> LocaleDictionary
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let mut root = LocaleDictionary::new();
    for (key, value) in entries {
        insert_path(&mut root, key, value.clone());
    }
    root
}

/// Insert `value` at a dotted path, creating intermediate objects.
///
/// Returns `false` without modifying anything if the path already exists or
/// would have to pass through a non-object value.
pub fn insert_path(root: &mut LocaleDictionary, key_path: &str, value: Value) -> bool {
    let parts: Vec<&str> = key_path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return false;
    };

    let mut current = root;
    for part in parents {
        match current.get(*part) {
            Some(Value::Object(_)) | None => {}
            Some(_) => return false,
        }
        let child = current
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(next) = child else {
            return false;
        };
        current = next;
    }

    if current.contains_key(*last) {
        return false;
    }
    current.insert(last.to_string(), value);
    true
}
