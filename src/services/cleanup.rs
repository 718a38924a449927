//! Deletion of conflicting mod jars.
//!
//! The yes/no decision is injected as a closure so the deletion path can be
//! exercised in tests without a terminal. Deletes run per-file with
//! try/continue semantics; one failure never aborts the batch.

use crate::types::mod_record::ModRecord;
use std::fs;
use std::path::Path;

/// What happened during a deletion pass.
#[derive(Debug, Default)]
pub struct DeletionOutcome {
    /// Whether the decision function approved the deletion.
    pub confirmed: bool,
    /// File names removed from the mods folder.
    pub deleted: Vec<String>,
    /// File name and error message for each failed delete.
    pub failed: Vec<(String, String)>,
}

/// Delete the candidate jars from `mods_dir` after asking `confirm` once
/// with the candidate count.
pub fn delete_conflicting<F>(
    mods_dir: &Path,
    candidates: &[&ModRecord],
    confirm: F,
) -> DeletionOutcome
where
    F: FnOnce(usize) -> bool,
{
    let mut outcome = DeletionOutcome::default();
    if candidates.is_empty() {
        return outcome;
    }

    if !confirm(candidates.len()) {
        log::info!("Deletion declined, keeping {} conflicting mods", candidates.len());
        return outcome;
    }
    outcome.confirmed = true;

    for record in candidates {
        let path = mods_dir.join(&record.file);
        match fs::remove_file(&path) {
            Ok(()) => {
                log::info!("Deleted conflicting mod {}", record.file);
                outcome.deleted.push(record.file.clone());
            }
            Err(e) => {
                log::warn!("Failed to delete {}: {e}", record.file);
                outcome.failed.push((record.file.clone(), e.to_string()));
            }
        }
    }

    outcome
}
