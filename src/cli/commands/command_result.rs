use super::super::actions::ActionStats;
use crate::{
    core::{DiffReport, scanner::DynamicKeyUsage},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Repair(RepairSummary),
    Clean(CleanSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub diff: DiffReport,
    pub dynamic: Vec<DynamicKeyUsage>,
}

#[derive(Debug)]
pub struct RepairSummary {
    /// Placeholders planned from the asymmetric key set.
    pub planned_count: usize,
    pub stats: ActionStats,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct CleanSummary {
    /// Distinct unused keys.
    pub key_count: usize,
    pub stats: ActionStats,
    pub is_apply: bool,
}

/// Result of running a keyaudit command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues to report, sorted by rule then key.
    pub issues: Vec<Issue>,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
    /// Number of locale files that loaded.
    pub locale_files_checked: usize,
}
