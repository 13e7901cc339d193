//! Core analysis engine.
//!
//! A run is a straight pipeline over one [`CheckContext`]:
//!
//! 1. **Load**: read `<locale>.json` for each configured locale and flatten
//!    it into dotted-path keys (`parsers::json`)
//! 2. **Scan**: walk the source tree for translation calls (`scanner`)
//! 3. **Diff**: missing / unused / asymmetric key sets (`diff`)
//!
//! Rules then turn the diff into located issues.

pub mod context;
pub mod diff;
pub mod message;
pub mod parsers;
pub mod scanner;
pub mod source;

pub use context::CheckContext;
pub use diff::{DiffReport, LocaleCoverage};
pub use message::{
    AllLocaleMessages, LocaleMessages, MessageContext, MessageEntry, MessageLocation, ValueType,
};
pub use source::{SourceContext, SourceLocation};
