use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::parsers::json::{LocaleDictionary, insert_path, read_dictionary};

/// An in-memory editor for one locale file.
///
/// Key order is preserved (`serde_json` with `preserve_order`); new keys are
/// appended to their parent object. Output is pretty-printed with 2-space
/// indentation and a trailing newline.
pub struct JsonEditor {
    file_path: PathBuf,
    dictionary: LocaleDictionary,
    modified: bool,
}

impl JsonEditor {
    /// Open a JSON file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            file_path: path.to_path_buf(),
            dictionary: read_dictionary(path)?,
            modified: false,
        })
    }

    /// Insert a value at a dotted key path.
    ///
    /// Returns `false` if the key already exists or a parent segment holds a
    /// non-object value.
    pub fn insert_key(&mut self, key_path: &str, value: Value) -> bool {
        let inserted = insert_path(&mut self.dictionary, key_path, value);
        self.modified |= inserted;
        inserted
    }

    /// Delete a key by its dotted path, removing parents it leaves empty.
    ///
    /// Returns `false` if the key does not exist.
    pub fn delete_key(&mut self, key_path: &str) -> bool {
        let parts: Vec<&str> = key_path.split('.').collect();
        let deleted = delete_key_path(&mut self.dictionary, &parts);
        self.modified |= deleted;
        deleted
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn to_json_string(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(&self.dictionary).context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }

    /// Save the modified content back to the file.
    pub fn save(&self) -> Result<()> {
        let content = self.to_json_string()?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))
    }
}

fn delete_key_path(map: &mut LocaleDictionary, parts: &[&str]) -> bool {
    match parts {
        [] => false,
        [last] => map.shift_remove(*last).is_some(),
        [first, rest @ ..] => {
            let Some(Value::Object(child)) = map.get_mut(*first) else {
                return false;
            };
            let deleted = delete_key_path(child, rest);
            if deleted && child.is_empty() {
                map.shift_remove(*first);
            }
            deleted
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn create_temp_json(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("en.json");
        fs::write(&file_path, content).unwrap();
        (temp_dir, file_path)
    }

    #[test]
    fn test_insert_nested_key_appends() {
        let (_temp, path) = create_temp_json(r#"{"z": "last", "a": {"x": "1"}}"#);
        let mut editor = JsonEditor::open(&path).unwrap();

        assert!(editor.insert_key("a.y", json!("[EN] 2")));
        assert!(editor.insert_key("new.deep.key", json!("v")));

        let expected = r#"{
  "z": "last",
  "a": {
    "x": "1",
    "y": "[EN] 2"
  },
  "new": {
    "deep": {
      "key": "v"
    }
  }
}
"#;
        assert_eq!(editor.to_json_string().unwrap(), expected);
        assert!(editor.is_modified());
    }

    #[test]
    fn test_insert_conflict_leaves_file_untouched() {
        let (_temp, path) = create_temp_json(r#"{"a": "leaf"}"#);
        let mut editor = JsonEditor::open(&path).unwrap();

        assert!(!editor.insert_key("a.b", json!("x")));
        assert!(!editor.insert_key("a", json!("x")));
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_delete_removes_emptied_parents_only() {
        let json = r#"{"Common": {"submit": "Submit"}, "Keep": {}, "Other": "value"}"#;
        let (_temp, path) = create_temp_json(json);
        let mut editor = JsonEditor::open(&path).unwrap();

        assert!(editor.delete_key("Common.submit"));

        let expected = r#"{
  "Keep": {},
  "Other": "value"
}
"#;
        assert_eq!(editor.to_json_string().unwrap(), expected);
    }

    #[test]
    fn test_delete_missing_key() {
        let (_temp, path) = create_temp_json(r#"{"a": {"b": "1"}}"#);
        let mut editor = JsonEditor::open(&path).unwrap();

        assert!(!editor.delete_key("a.c"));
        assert!(!editor.delete_key("a.b.c"));
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_save_writes_trailing_newline() {
        let (_temp, path) = create_temp_json(r#"{}"#);
        let mut editor = JsonEditor::open(&path).unwrap();
        editor.insert_key("k", json!("v"));
        editor.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"k\": \"v\"\n}\n");
    }

    #[test]
    fn test_open_malformed_file() {
        let (_temp, path) = create_temp_json("{ nope");
        assert!(JsonEditor::open(&path).is_err());
    }
}
