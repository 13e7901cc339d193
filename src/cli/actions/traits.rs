//! Action trait definition.
//!
//! Actions convert plans (issues, placeholder fills) into Operations. Each
//! Action can be implemented for multiple input types.

use std::{collections::BTreeMap, path::Path};

use tracing::{debug, warn};

use super::{json_editor::JsonEditor, operation::Operation};
use crate::issues::WriteErrorIssue;

/// Statistics from running an action.
#[derive(Debug, Clone, Default)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of files modified (or that would be, in a dry run).
    pub files_modified: usize,
    /// Operations that took effect (or would, in a dry run).
    pub applied: Vec<Operation>,
    /// Operations the file's current shape did not allow.
    pub skipped: Vec<Operation>,
    /// Files that could not be opened or saved.
    pub write_errors: Vec<WriteErrorIssue>,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.files_modified += other.files_modified;
        self.applied.extend(other.applied);
        self.skipped.extend(other.skipped);
        self.write_errors.extend(other.write_errors);
    }
}

/// Action trait - converts inputs into Operations and executes them.
///
/// ```ignore
/// let stats = if apply {
///     FillPlaceholder::run(&fills)
/// } else {
///     FillPlaceholder::preview(&fills)
/// };
/// ```
pub trait Action<I> {
    /// Convert inputs to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(items: &[I]) -> Vec<Operation>;

    /// Apply the operations and save every file they changed.
    fn run(items: &[I]) -> ActionStats {
        execute_operations(&Self::to_operations(items), true)
    }

    /// Apply the operations in memory only (dry-run mode).
    fn preview(items: &[I]) -> ActionStats {
        execute_operations(&Self::to_operations(items), false)
    }
}

/// Execute operations file by file.
///
/// Files are independent: a file that cannot be opened or saved becomes a
/// write error and the remaining files are still processed. A file none of
/// whose operations applied is never written.
pub(crate) fn execute_operations(ops: &[Operation], write: bool) -> ActionStats {
    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };

    let mut ops_by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        ops_by_file.entry(op.file_path()).or_default().push(op);
    }

    for (file_path, file_ops) in ops_by_file {
        let mut editor = match JsonEditor::open(Path::new(file_path)) {
            Ok(editor) => editor,
            Err(e) => {
                warn!(file = file_path, "cannot open locale file: {:#}", e);
                stats.skipped.extend(file_ops.into_iter().cloned());
                stats.write_errors.push(WriteErrorIssue {
                    file_path: file_path.to_string(),
                    error: format!("{:#}", e),
                });
                continue;
            }
        };

        for op in file_ops {
            if op.apply(&mut editor) {
                stats.applied.push(op.clone());
            } else {
                debug!(file = file_path, key = op.key(), "operation skipped");
                stats.skipped.push(op.clone());
            }
        }

        if !editor.is_modified() {
            continue;
        }
        if !write {
            stats.files_modified += 1;
            continue;
        }
        match editor.save() {
            Ok(()) => {
                debug!(file = file_path, "saved locale file");
                stats.files_modified += 1;
            }
            Err(e) => {
                warn!(file = file_path, "cannot save locale file: {:#}", e);
                stats.write_errors.push(WriteErrorIssue {
                    file_path: file_path.to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    stats
}
