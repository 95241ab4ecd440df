//! Sibling lookup for pairing requirements.

use std::collections::HashSet;

use convcheck_core::types::{FileRecord, Role};

use crate::rules::RuleTable;

/// Index of `(parent directory, role, base name)` over every record with a
/// known role.
#[derive(Debug, Default)]
pub struct SiblingIndex<'a> {
    entries: HashSet<(&'a str, Role, &'a str)>,
}

impl<'a> SiblingIndex<'a> {
    pub fn build(table: &RuleTable, records: &'a [FileRecord]) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| {
                let role = record.role()?;
                let rule = table.rule_for(role)?;
                let base = rule.filename_pattern.base_name(record.stem());
                Some((record.parent(), role, base))
            })
            .collect();
        Self { entries }
    }

    pub fn contains(&self, parent: &str, role: Role, base: &str) -> bool {
        self.entries.contains(&(parent, role, base))
    }
}
