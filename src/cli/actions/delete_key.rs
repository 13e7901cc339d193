//! DeleteKey action, used by `keyaudit clean`.
//!
//! Each input is one definition site of an unused key; a key defined in
//! several locales arrives once per locale file.

use super::{operation::Operation, traits::Action};
use crate::issues::UnusedKeyIssue;

pub struct DeleteKey;

impl Action<UnusedKeyIssue> for DeleteKey {
    fn to_operations(sites: &[UnusedKeyIssue]) -> Vec<Operation> {
        sites
            .iter()
            .map(|site| Operation::DeleteJsonKey {
                context: site.context.clone(),
            })
            .collect()
    }
}
