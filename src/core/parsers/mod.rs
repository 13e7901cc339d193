//! File parsers.
//!
//! - `json`: locale dictionary loading and key flattening

pub mod json;
