//! Set differences between locale key sets and the usage key set.

use std::collections::{BTreeMap, BTreeSet};

use glob::Pattern;
use serde::Serialize;

use crate::core::LocaleMessages;

/// Which locales define a key and which lack it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleCoverage {
    pub present_in: Vec<String>,
    pub missing_in: Vec<String>,
}

/// The three key sets a check run produces. Every collection is ordered, so
/// output built from it is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    /// Used in code, defined in no locale.
    pub missing: BTreeSet<String>,
    /// Defined in some locale, never used in code.
    pub unused: BTreeSet<String>,
    /// Defined in some locales but not all.
    pub asymmetric: BTreeMap<String, LocaleCoverage>,
}

impl DiffReport {
    /// Compute the report.
    ///
    /// `locales` should hold only the locales that loaded, in configured order;
    /// a locale that failed to load would otherwise make every key asymmetric.
    /// Keys matching `keep` (the `ignoreUnused` globs plus the patterns of
    /// dynamic usages) are dropped from `unused` only.
    pub fn compute(
        locales: &[&LocaleMessages],
        used: &BTreeSet<String>,
        keep: &[Pattern],
    ) -> Self {
        let defined: BTreeSet<&str> = locales
            .iter()
            .flat_map(|m| m.keys().map(String::as_str))
            .collect();

        let missing = used
            .iter()
            .filter(|key| !defined.contains(key.as_str()))
            .cloned()
            .collect();

        let unused = defined
            .iter()
            .filter(|key| !used.contains(**key))
            .filter(|key| !keep.iter().any(|p| p.matches(key)))
            .map(|key| key.to_string())
            .collect();

        let mut asymmetric = BTreeMap::new();
        for key in &defined {
            let (present, absent): (Vec<&&LocaleMessages>, Vec<&&LocaleMessages>) =
                locales.iter().partition(|m| m.contains_key(key));
            if !absent.is_empty() {
                asymmetric.insert(
                    key.to_string(),
                    LocaleCoverage {
                        present_in: present.iter().map(|m| m.locale.clone()).collect(),
                        missing_in: absent.iter().map(|m| m.locale.clone()).collect(),
                    },
                );
            }
        }

        Self {
            missing,
            unused,
            asymmetric,
        }
    }

    /// Missing keys break rendering; the other sets are hygiene debt.
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}
