//! Loader detection for mod archives.
//!
//! Opens a jar read-only and classifies it by which loader marker entry it
//! contains. A jar that cannot be opened, or carries none of the known
//! markers, is `Unknown` — never a hard failure.

use crate::types::mod_record::LoaderType;
use std::fs;
use std::path::Path;

/// Detect the loader type of a mod jar.
///
/// Checks markers in the fixed Fabric → Quilt → Forge → NeoForge order and
/// returns the first match. Open/read failures degrade to `Unknown`.
pub fn detect_loader(jar_path: &Path) -> LoaderType {
    match list_entries(jar_path) {
        Ok(entries) => classify(&entries),
        Err(e) => {
            log::debug!("Failed to inspect {}: {e}", jar_path.display());
            LoaderType::Unknown
        }
    }
}

/// List all entry names in a zip archive.
fn list_entries(jar_path: &Path) -> Result<Vec<String>, String> {
    let file = fs::File::open(jar_path).map_err(|e| format!("Failed to open archive: {e}"))?;
    let archive = zip::ZipArchive::new(file).map_err(|e| format!("Invalid or corrupt jar: {e}"))?;
    Ok(archive.file_names().map(|n| n.to_string()).collect())
}

/// Classify a jar from its entry-name list.
///
/// Matching is by substring over the full list, mirroring the markers being
/// anywhere in the archive tree.
pub(crate) fn classify(entries: &[String]) -> LoaderType {
    for (loader, marker) in LoaderType::MARKERS {
        if entries.iter().any(|name| name.contains(marker)) {
            return loader;
        }
    }
    LoaderType::Unknown
}
