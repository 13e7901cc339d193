//! Actions for editing locale files.
//!
//! ## Architecture
//!
//! ```text
//! Issue / plan (what should change)
//!     ↓
//! Action (→ Operation conversion)
//!     ↓
//! Operation (one key insert or delete)
//!     ↓
//! execute (per-file JsonEditor, saved only when changed)
//! ```
//!
//! ## Actions
//!
//! - [`FillPlaceholder`]: Insert marked placeholders for asymmetric keys (repair)
//! - [`DeleteKey`]: Delete unused keys from locale files (clean)

mod delete_key;
mod fill_placeholder;
mod json_editor;
mod operation;
mod traits;

pub use delete_key::DeleteKey;
pub use fill_placeholder::{FillPlaceholder, PlaceholderFill, placeholder_value, plan_fills};
pub use json_editor::JsonEditor;
pub use operation::Operation;
pub use traits::{Action, ActionStats};
