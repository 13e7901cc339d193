//! Rule implementations for keyaudit.
//!
//! Each rule is a pure function that takes only the inputs it needs (not a
//! full context) and returns a specific issue type. A `check_*_issues`
//! wrapper pulls those inputs out of a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `missing`: keys used in code but defined nowhere
//! - `unused`: keys defined but never used
//! - `asymmetric`: keys some locales have and others lack
//! - `dynamic`: template-literal keys the scanner cannot check
//! - `quality`: empty values and leftover placeholders
//! - `load`: locale files that failed to load

pub mod asymmetric;
pub mod dynamic;
pub mod load;
pub mod missing;
pub mod quality;
pub mod unused;
