//! Consistency analysis over a scanned mod collection.
//!
//! Computes the dominant loader, flags jars from other loaders as deletion
//! candidates, and marks duplicate mod ids and unmet dependencies.

use crate::types::mod_record::{LoaderType, ModRecord, ModStatus, FALLBACK_MOD_ID};
use std::collections::HashSet;

/// Dependency ids satisfied by the platform itself rather than a jar.
const IMPLICIT_PROVIDERS: &[&str] = &["forge", "minecraft"];

/// Result of analyzing one mods folder.
#[derive(Debug)]
pub struct ModAnalysis {
    /// Most frequent loader among the records, `None` when every record is
    /// `Unknown`.
    pub dominant: Option<LoaderType>,
    /// Indices of records whose loader differs from the dominant one.
    /// `Unknown` records are never candidates.
    pub conflicts: Vec<usize>,
    /// Per-record status, aligned with the input slice.
    pub statuses: Vec<ModStatus>,
}

/// Run all checks over the collection.
pub fn analyze(records: &[ModRecord]) -> ModAnalysis {
    let dominant = dominant_loader(records);

    let conflicts = match dominant {
        Some(dominant) => records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.loader != dominant && r.loader != LoaderType::Unknown)
            .map(|(i, _)| i)
            .collect(),
        None => Vec::new(),
    };

    let duplicates = duplicate_ids(records);
    let known_ids: HashSet<&str> = records
        .iter()
        .map(|r| r.id.as_str())
        .filter(|id| *id != FALLBACK_MOD_ID)
        .collect();

    let statuses = records
        .iter()
        .map(|record| {
            if duplicates.contains(record.id.as_str()) {
                return ModStatus::DuplicateId;
            }
            let missing = missing_deps(record, &known_ids);
            if missing.is_empty() {
                ModStatus::Ok
            } else {
                ModStatus::MissingDeps(missing)
            }
        })
        .collect();

    ModAnalysis {
        dominant,
        conflicts,
        statuses,
    }
}

/// Most frequent loader type, ignoring `Unknown` records.
///
/// Ties break in first-seen order: a later loader must strictly exceed the
/// current best count to displace it. Returns `None` when no record has a
/// known loader.
pub fn dominant_loader(records: &[ModRecord]) -> Option<LoaderType> {
    // Vec keeps first-seen order, which drives the tie-break.
    let mut counts: Vec<(LoaderType, usize)> = Vec::new();
    for record in records {
        if record.loader == LoaderType::Unknown {
            continue;
        }
        match counts.iter_mut().find(|(l, _)| *l == record.loader) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.loader, 1)),
        }
    }

    let mut best: Option<(LoaderType, usize)> = None;
    for (loader, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((loader, count));
        }
    }
    best.map(|(loader, _)| loader)
}

/// Ids that appear on more than one record. The fallback id is never
/// considered a duplicate.
fn duplicate_ids(records: &[ModRecord]) -> HashSet<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates = HashSet::new();
    for record in records {
        if record.id == FALLBACK_MOD_ID {
            continue;
        }
        if !seen.insert(record.id.as_str()) {
            duplicates.insert(record.id.clone());
        }
    }
    duplicates
}

/// Required ids not present in the collection and not provided implicitly.
fn missing_deps(record: &ModRecord, known_ids: &HashSet<&str>) -> Vec<String> {
    record
        .requires
        .iter()
        .filter(|dep| !known_ids.contains(dep.as_str()))
        .filter(|dep| !IMPLICIT_PROVIDERS.contains(&dep.as_str()))
        .cloned()
        .collect()
}
