pub mod cli;
pub mod report;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use crate::services::{analyzer, cleanup, crash_logs, extractor, locate};
use crate::types::errors::{AppError, AppResult};
use crate::types::mod_record::ModRecord;
use std::path::{Path, PathBuf};

/// Full scan pipeline: resolve the folder, extract records, analyze,
/// optionally delete conflicting jars, and render the report.
pub fn run(args: cli::Cli) -> AppResult<()> {
    let mods_dir = resolve_mods_dir(args.mods_dir)?;

    let records = scan_mods(&mods_dir)?;
    if records.is_empty() {
        report::print_no_mods();
        return Ok(());
    }

    let analysis = analyzer::analyze(&records);
    report::print_dominant(analysis.dominant);

    if analysis.dominant.is_some() {
        let candidates: Vec<&ModRecord> =
            analysis.conflicts.iter().map(|&i| &records[i]).collect();

        if candidates.is_empty() {
            report::print_all_match();
        } else if args.report_only {
            report::print_report_only(candidates.len());
        } else {
            report::print_conflicts_found(candidates.len());
            let assume_yes = args.yes;
            let outcome = cleanup::delete_conflicting(&mods_dir, &candidates, |count| {
                assume_yes || confirm_deletion(count)
            });
            report::print_deletion(&outcome);
        }
    }

    report::print_table(&records, &analysis.statuses);

    if let Some(crash_dir) = crash_reports_dir(&mods_dir) {
        if let Some(errors) = crash_logs::scan_crash_logs(&crash_dir) {
            report::print_crash_logs(&errors);
        }
    }

    report::print_done();
    Ok(())
}

/// Use the given folder, or fall back to platform auto-detection.
fn resolve_mods_dir(arg: Option<PathBuf>) -> AppResult<PathBuf> {
    match arg {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::ModsDirNotFound(path));
            }
            Ok(path)
        }
        None => {
            let detected = locate::default_mods_dir().ok_or(AppError::AutoDetectFailed)?;
            report::print_autodetected(&detected);
            Ok(detected)
        }
    }
}

/// Extract a record for every `.jar` in `mods_dir`, in file-name order so
/// analysis (and its tie-breaks) is deterministic.
pub fn scan_mods(mods_dir: &Path) -> AppResult<Vec<ModRecord>> {
    let mut jars: Vec<PathBuf> = std::fs::read_dir(mods_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == "jar")
        })
        .collect();
    jars.sort();

    Ok(jars.iter().map(|jar| extractor::extract_mod_record(jar)).collect())
}

/// The `crash-reports` folder sits next to the mods folder.
fn crash_reports_dir(mods_dir: &Path) -> Option<PathBuf> {
    mods_dir.parent().map(|parent| parent.join("crash-reports"))
}

fn confirm_deletion(count: usize) -> bool {
    dialoguer::Confirm::new()
        .with_prompt(format!("Delete {count} conflicting mods?"))
        .default(false)
        .interact()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fabric_jar, forge_jar, init_test_logging};
    use crate::types::mod_record::LoaderType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_skips_non_jars_and_sorts() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        fabric_jar(dir.path(), "b_sodium.jar", "sodium", "0.5");
        forge_jar(dir.path(), "a_jei.jar", "jei", "15.0");
        fs::write(dir.path().join("readme.txt"), "not a mod").unwrap();
        fs::create_dir(dir.path().join("config.jar")).unwrap();

        let records = scan_mods(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].file, "a_jei.jar");
        assert_eq!(records[0].loader, LoaderType::Forge);
        assert_eq!(records[1].id, "sodium");
    }

    #[test]
    fn test_scan_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_mods(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_missing_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve_mods_dir(Some(missing.clone())).unwrap_err();
        assert!(matches!(err, AppError::ModsDirNotFound(p) if p == missing));
    }

    #[test]
    fn test_crash_reports_dir_is_sibling() {
        let dir = crash_reports_dir(Path::new("/game/.minecraft/mods")).unwrap();
        assert_eq!(dir, Path::new("/game/.minecraft/crash-reports"));
    }
}
