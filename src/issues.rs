//! Issue types for translation key analysis results.
//!
//! Each issue is self-contained with everything needed by:
//! - Reporter: to display the issue to users
//! - Action: to fix it (fill a placeholder, delete a key)

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue. Only errors affect the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    LoadError,
    WriteError,
    MissingKey,
    DynamicKey,
    AsymmetricKey,
    UnusedKey,
    EmptyValue,
    Placeholder,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::LoadError => write!(f, "load-error"),
            Rule::WriteError => write!(f, "write-error"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::DynamicKey => write!(f, "dynamic-key"),
            Rule::AsymmetricKey => write!(f, "asymmetric-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::EmptyValue => write!(f, "empty-value"),
            Rule::Placeholder => write!(f, "placeholder"),
        }
    }
}

// ============================================================
// Issue Types - Source Code (SourceContext)
// ============================================================

/// Translation key used in code but defined in no locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub context: SourceContext,
    pub key: String,
}

/// Translation call whose key is assembled at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicKeyIssue {
    pub context: SourceContext,
    /// Template with interpolations replaced by `*`.
    pub pattern: String,
}

// ============================================================
// Issue Types - Locale Files (MessageContext)
// ============================================================

/// Key defined in a locale file but never referenced by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub context: MessageContext,
}

/// Key defined in `locale` but absent from the locales in `missing_in`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsymmetricKeyIssue {
    pub context: MessageContext,
    pub locale: String,
    pub missing_in: Vec<String>,
}

/// String value that is empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyValueIssue {
    pub context: MessageContext,
    pub locale: String,
}

/// Value still carrying a repair marker or a TODO/TBD note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub context: MessageContext,
    pub locale: String,
    /// The marker or note that was found.
    pub marker: String,
}

// ============================================================
// Issue Types - File Level
// ============================================================

/// A locale file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadErrorIssue {
    pub file_path: String,
    pub locale: String,
    pub error: String,
}

/// A locale file that could not be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteErrorIssue {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

/// A finding from a run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    DynamicKey(DynamicKeyIssue),
    UnusedKey(UnusedKeyIssue),
    AsymmetricKey(AsymmetricKeyIssue),
    EmptyValue(EmptyValueIssue),
    Placeholder(PlaceholderIssue),
    LoadError(LoadErrorIssue),
    WriteError(WriteErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

/// Report order: grouped by rule, then key, then location.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    a.rule()
        .cmp(&b.rule())
        .then_with(|| a.message().cmp(&b.message()))
        .then_with(|| location_key(&a.location()).cmp(&location_key(&b.location())))
}

fn location_key<'a>(loc: &ReportLocation<'a>) -> (&'a str, usize, usize) {
    match *loc {
        ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// Locale file location (no source_line, but has key/value).
    Message(&'a MessageContext),
    /// File-level only.
    File { path: &'a str },
}

/// Implemented by all issue types so the reporter can treat them uniformly.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name, pattern, error text).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingKey
    }

    fn details(&self) -> Option<String> {
        Some("not defined in any locale file".to_string())
    }
}

impl Report for DynamicKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.pattern.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::DynamicKey
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "keys built at runtime are not checked; list them in 'ignoreUnused' as \"{}\" if they show up as unused",
            self.pattern
        ))
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::UnusedKey
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\")", self.context.value))
    }
}

impl Report for AsymmetricKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::AsymmetricKey
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "defined in {}, missing in: {}",
            self.locale,
            self.missing_in.join(", ")
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("run `keyaudit repair --apply` to add marked placeholders".to_string())
    }
}

impl Report for EmptyValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::EmptyValue
    }

    fn details(&self) -> Option<String> {
        Some(format!("empty value in {}", self.locale))
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::Placeholder
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} needs a real translation: \"{}\"",
            self.locale, self.context.value
        ))
    }
}

impl Report for LoadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::LoadError
    }

    fn details(&self) -> Option<String> {
        Some(format!("locale {} is treated as empty", self.locale))
    }
}

impl Report for WriteErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::WriteError
    }
}
