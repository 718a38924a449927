//! Crash-report scanning.
//!
//! Walks the `crash-reports` directory next to the mods folder and collects
//! `Caused by:` lines from `.log` files, keeping the last few in file-read
//! order. Unreadable files are skipped.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static CAUSED_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Caused by: ([\w.]+): (.+)").expect("valid caused-by regex"));

/// How many recent entries the report shows.
const MAX_REPORTED: usize = 5;

/// Scan `log_dir` recursively for crash causes.
///
/// Returns `None` when the directory does not exist or nothing matched,
/// otherwise the last [`MAX_REPORTED`] matching lines.
pub fn scan_crash_logs(log_dir: &Path) -> Option<Vec<String>> {
    if !log_dir.exists() {
        return None;
    }

    let mut errors = Vec::new();
    for entry in WalkDir::new(log_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "log") {
            continue;
        }

        // Crash logs are not reliably UTF-8; read lossily.
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                log::debug!("Skipping unreadable log {}: {e}", path.display());
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);

        for m in CAUSED_BY_RE.find_iter(&text) {
            errors.push(m.as_str().to_string());
        }
    }

    if errors.is_empty() {
        return None;
    }
    let skip = errors.len().saturating_sub(MAX_REPORTED);
    Some(errors.split_off(skip))
}
