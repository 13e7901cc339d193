use std::{collections::BTreeMap, fmt};

use serde_json::Value;

/// Position information in locale files (JSON).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// Kind of leaf a flattened key points at.
///
/// Arrays are opaque leaves: consumers only check key existence, so
/// elements are never indexed into separate keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueType {
    String,
    Array,
    Number,
    Boolean,
    Null,
}

impl ValueType {
    /// Classify a non-object JSON value. Objects are never leaves.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(Self::String),
            Value::Array(_) => Some(Self::Array),
            Value::Number(_) => Some(Self::Number),
            Value::Bool(_) => Some(Self::Boolean),
            Value::Null => Some(Self::Null),
            Value::Object(_) => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Array => write!(f, "array"),
            ValueType::Number => write!(f, "number"),
            ValueType::Boolean => write!(f, "boolean"),
            ValueType::Null => write!(f, "null"),
        }
    }
}

/// Key and display value at a location in a locale file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The dotted-path key (e.g., "home.hero.title").
    pub key: String,
    /// Human-readable rendering of the value.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// A single flattened entry from a locale file.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEntry {
    pub context: MessageContext,
    pub value_type: ValueType,
    /// The leaf exactly as it appears in the dictionary.
    pub raw: Value,
}

/// The flat key set of one locale: dotted-path key to leaf entry.
///
/// Entries are kept in a `BTreeMap` so iteration is always in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "zh").
    pub locale: String,
    /// File path of the locale file.
    pub file_path: String,
    pub entries: BTreeMap<String, MessageEntry>,
}

/// Flat key sets for every configured locale, in configured order.
pub type AllLocaleMessages = Vec<LocaleMessages>;

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
