use std::io::Write;

use colored::Colorize;
use serde_json::Value;

use super::json_editor::JsonEditor;
use crate::core::{MessageContext, parsers::json::display_value};

/// A single edit to a locale file.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Add `value` at `context.key` in `context.file_path()`.
    InsertJsonKey {
        context: MessageContext,
        value: Value,
    },
    /// Remove `context.key` from `context.file_path()`.
    DeleteJsonKey { context: MessageContext },
}

impl Operation {
    pub fn context(&self) -> &MessageContext {
        match self {
            Operation::InsertJsonKey { context, .. } => context,
            Operation::DeleteJsonKey { context } => context,
        }
    }

    pub fn file_path(&self) -> &str {
        self.context().file_path()
    }

    pub fn key(&self) -> &str {
        &self.context().key
    }

    /// Apply to an open editor. Returns `false` if the file's current shape
    /// does not allow it.
    pub fn apply(&self, editor: &mut JsonEditor) -> bool {
        match self {
            Operation::InsertJsonKey { context, value } => {
                editor.insert_key(&context.key, value.clone())
            }
            Operation::DeleteJsonKey { context } => editor.delete_key(&context.key),
        }
    }

    /// Print a one-line description for dry-run output.
    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        let _ = match self {
            Operation::InsertJsonKey { context, value } => writeln!(
                writer,
                "  {} {}  \"{}\" = \"{}\"",
                "+".green(),
                context.file_path(),
                context.key,
                display_value(value)
            ),
            Operation::DeleteJsonKey { context } => writeln!(
                writer,
                "  {} {}:{}  \"{}\"",
                "-".red(),
                context.file_path(),
                context.line(),
                context.key
            ),
        };
    }
}
