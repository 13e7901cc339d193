//! Translation key usage scanner.
//!
//! This is a lexical scan, not a parser: a call is recognised when a
//! configured function name is followed by `(` and a single string literal
//! argument. Keys assembled through concatenation or held in variables are
//! invisible to it. Template literals with `${...}` interpolation are kept
//! separately as dynamic usages since their keys cannot be checked.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Config,
    core::{SourceContext, SourceLocation},
};

/// A call site whose key is built at runtime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DynamicKeyUsage {
    pub context: SourceContext,
    /// The template with each interpolation replaced by `*`.
    pub pattern: String,
}

impl DynamicKeyUsage {
    /// The glob matching every key this call could produce.
    ///
    /// `None` when the template has no literal text (`${key}`), since such a
    /// pattern would match every key.
    pub fn key_pattern(&self) -> Option<Pattern> {
        if self.pattern.chars().all(|c| c == '*') {
            return None;
        }
        let glob = self
            .pattern
            .split('*')
            .map(Pattern::escape)
            .collect::<Vec<_>>()
            .join("*");
        Pattern::new(&glob).ok()
    }
}

/// Everything the scanner found in one pass over the source tree.
#[derive(Debug, Default)]
pub struct UsageScan {
    /// Literal keys and every site they were used at.
    pub usages: BTreeMap<String, Vec<SourceContext>>,
    pub dynamic: Vec<DynamicKeyUsage>,
    pub files_scanned: usize,
    /// Paths the walker could not access.
    pub skipped_count: usize,
}

impl UsageScan {
    /// The deduplicated usage key set.
    pub fn used_keys(&self) -> BTreeSet<String> {
        self.usages.keys().cloned().collect()
    }

    /// Key patterns of every dynamic usage.
    pub fn dynamic_patterns(&self) -> Vec<Pattern> {
        self.dynamic
            .iter()
            .filter_map(DynamicKeyUsage::key_pattern)
            .collect()
    }
}

/// Build the call-site pattern for the given function names.
///
/// The leading group stands in for a look-behind: the name must not be the
/// tail of a longer identifier (`format(` must not match `t(`). The match
/// ends at the closing quote so a following call (`t('a',t('b'))`) still has
/// its separator available; `closes_argument` checks what comes next.
pub fn build_call_regex(functions: &[String]) -> Result<Regex> {
    let names = functions
        .iter()
        .map(|f| regex::escape(f))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r#"(?:^|[^A-Za-z0-9_$])(?P<call>(?:{names})\(\s*(?:'(?P<single>[^'\\\n]*)'|"(?P<double>[^"\\\n]*)"|`(?P<template>[^`\\]*)`))"#
    );
    Regex::new(&pattern).context("Failed to build translation call pattern")
}

/// Extract key usages from one file's content into `scan`.
pub fn extract_usages(content: &str, file_path: &str, regex: &Regex, scan: &mut UsageScan) {
    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i + 1))
        .collect();

    for caps in regex.captures_iter(content) {
        let Some(call) = caps.name("call") else {
            continue;
        };
        if !closes_argument(&content[call.end()..]) {
            continue;
        }
        let offset = call.start();
        let line_idx = match line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = line_starts[line_idx];
        let line_end = content[line_start..]
            .find('\n')
            .map_or(content.len(), |i| line_start + i);
        let source_line = content[line_start..line_end].trim_end_matches('\r');
        let col = content[line_start..offset].chars().count() + 1;
        let context = SourceContext::new(
            SourceLocation::new(file_path, line_idx + 1, col),
            source_line,
        );

        let literal = caps
            .name("single")
            .or_else(|| caps.name("double"))
            .map(|m| (m.as_str(), false))
            .or_else(|| caps.name("template").map(|m| (m.as_str(), true)));

        match literal {
            Some((text, true)) if text.contains("${") => {
                scan.dynamic.push(DynamicKeyUsage {
                    context,
                    pattern: template_pattern(text),
                });
            }
            Some((text, _)) if !text.trim().is_empty() => {
                scan.usages
                    .entry(text.to_string())
                    .or_default()
                    .push(context);
            }
            _ => {}
        }
    }
}

/// The literal must be the whole first argument: `t('a' + b)` is not a key.
fn closes_argument(rest: &str) -> bool {
    matches!(rest.trim_start().chars().next(), Some(',' | ')'))
}

/// Replace each `${...}` interpolation with `*`.
fn template_pattern(template: &str) -> String {
    let mut result = String::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        result.push('*');
        match rest[start..].find('}') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

fn is_excluded(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded_dirs.iter().any(|d| d == name))
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Display path relative to the project root when possible.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

/// Collect the files to scan, sorted and deduplicated.
fn collect_files(root: &Path, config: &Config, scan: &mut UsageScan) -> BTreeSet<PathBuf> {
    let dirs: Vec<PathBuf> = if config.includes.is_empty() {
        vec![root.to_path_buf()]
    } else {
        config
            .includes
            .iter()
            .map(|inc| root.join(inc))
            .filter(|path| {
                let exists = path.exists();
                if !exists {
                    debug!(path = %path.display(), "include path does not exist");
                }
                exists
            })
            .collect()
    };

    let mut files = BTreeSet::new();
    for dir in dirs {
        let walker = WalkDir::new(&dir)
            .into_iter()
            .filter_entry(|e| !is_excluded(e, &config.excluded_dirs));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    scan.skipped_count += 1;
                    warn!("cannot access path: {}", e);
                    continue;
                }
            };
            if entry.file_type().is_file() && has_allowed_extension(entry.path(), &config.extensions)
            {
                files.insert(entry.into_path());
            }
        }
    }
    files
}

/// Walk the source tree under `root` and collect every key usage.
///
/// Unreadable files are skipped so one bad file cannot stop the scan.
pub fn scan_usages(root: &Path, config: &Config) -> Result<UsageScan> {
    let regex = build_call_regex(&config.translation_functions)?;
    let mut scan = UsageScan::default();

    for path in collect_files(root, config, &mut scan) {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        let file_path = display_path(root, &path);
        extract_usages(&content, &file_path, &regex, &mut scan);
        scan.files_scanned += 1;
    }

    debug!(
        files = scan.files_scanned,
        keys = scan.usages.len(),
        dynamic = scan.dynamic.len(),
        "usage scan finished"
    );
    Ok(scan)
}
