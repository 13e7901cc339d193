//! keyaudit - translation key consistency checker
//!
//! keyaudit loads one JSON dictionary per locale, flattens each into
//! dotted-path keys, scans a source tree for translation calls, and reports
//! keys that are missing, unused, or present in only some locales. It can
//! also fill asymmetric keys with marked placeholders and remove unused keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, actions, reporting)
//! - `config`: Configuration file loading and validation
//! - `core`: Core analysis engine (load, scan, diff)
//! - `issues`: Issue type definitions and reporting trait
//! - `rules`: Rules turning the analysis into located issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
