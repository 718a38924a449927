//! Manifest extraction: turn a mod jar into a [`ModRecord`].
//!
//! Each loader family embeds its metadata differently — Fabric/Quilt as a
//! JSON document, Forge/NeoForge as a TOML config. Extraction never fails:
//! anything that goes wrong (missing entry, malformed content, missing
//! fields) degrades the record to defaults and is logged at debug level.

use crate::services::inspector;
use crate::types::mod_record::{LoaderType, ModRecord, FALLBACK_MOD_ID};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

const FABRIC_MANIFEST: &str = "fabric.mod.json";
const FORGE_MANIFEST: &str = "META-INF/mods.toml";
const NEOFORGE_MANIFEST: &str = "META-INF/neoforge.mods.toml";

/// Fields shared by all manifest formats once decoded.
#[derive(Debug)]
struct ParsedManifest {
    id: Option<String>,
    name: Option<String>,
    version: Option<String>,
    requires: Vec<String>,
}

/// `fabric.mod.json` — also embedded by most Quilt mods.
#[derive(Debug, Deserialize)]
struct FabricManifest {
    id: Option<String>,
    name: Option<String>,
    version: Option<String>,
    /// Dependency id → version constraint; only the keys matter here.
    #[serde(default)]
    depends: serde_json::Map<String, serde_json::Value>,
}

/// `mods.toml` / `neoforge.mods.toml`.
#[derive(Debug, Deserialize)]
struct ModsToml {
    #[serde(default)]
    mods: Vec<ForgeModEntry>,
    /// Dependency tables keyed by the owning mod id.
    #[serde(default)]
    dependencies: std::collections::HashMap<String, Vec<ForgeDependency>>,
}

#[derive(Debug, Deserialize)]
struct ForgeModEntry {
    #[serde(rename = "modId")]
    mod_id: Option<String>,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForgeDependency {
    #[serde(rename = "modId")]
    mod_id: Option<String>,
}

/// Detect the loader of `jar_path` and extract its metadata.
///
/// Always returns a record; extraction failure yields the defaults of
/// [`ModRecord::fallback`] with the detected loader kept.
pub fn extract_mod_record(jar_path: &Path) -> ModRecord {
    let loader = inspector::detect_loader(jar_path);
    let file = jar_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| jar_path.display().to_string());

    let parsed = match loader {
        LoaderType::Fabric | LoaderType::Quilt => read_json_manifest(jar_path),
        LoaderType::Forge => read_toml_manifest(jar_path, FORGE_MANIFEST),
        LoaderType::NeoForge => read_toml_manifest(jar_path, NEOFORGE_MANIFEST),
        LoaderType::Unknown => Err("no known loader manifest".to_string()),
    };

    match parsed {
        Ok(manifest) => build_record(file, loader, manifest),
        Err(e) => {
            log::debug!("Extraction degraded for {file}: {e}");
            ModRecord::fallback(&file, loader)
        }
    }
}

fn build_record(file: String, loader: LoaderType, manifest: ParsedManifest) -> ModRecord {
    let name = manifest
        .name
        .or_else(|| manifest.id.clone())
        .unwrap_or_else(|| file.clone());
    ModRecord {
        id: manifest.id.unwrap_or_else(|| FALLBACK_MOD_ID.to_string()),
        name,
        version: manifest.version.unwrap_or_else(|| "?".to_string()),
        loader,
        requires: manifest.requires,
        file,
    }
}

/// Read one entry of a jar into a string.
fn read_entry(jar_path: &Path, entry_name: &str) -> Result<String, String> {
    let file = fs::File::open(jar_path).map_err(|e| format!("Failed to open archive: {e}"))?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| format!("Invalid or corrupt jar: {e}"))?;
    let mut entry = archive
        .by_name(entry_name)
        .map_err(|e| format!("Missing {entry_name}: {e}"))?;
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| format!("Failed to read {entry_name}: {e}"))?;
    Ok(content)
}

fn read_json_manifest(jar_path: &Path) -> Result<ParsedManifest, String> {
    let raw = read_entry(jar_path, FABRIC_MANIFEST)?;
    let manifest: FabricManifest =
        serde_json::from_str(&raw).map_err(|e| format!("Malformed {FABRIC_MANIFEST}: {e}"))?;

    Ok(ParsedManifest {
        // Version constraints are discarded; only the dependency ids matter.
        requires: manifest.depends.keys().cloned().collect(),
        id: manifest.id,
        name: manifest.name,
        version: manifest.version,
    })
}

fn read_toml_manifest(jar_path: &Path, entry_name: &str) -> Result<ParsedManifest, String> {
    let raw = read_entry(jar_path, entry_name)?;
    let manifest: ModsToml =
        toml::from_str(&raw).map_err(|e| format!("Malformed {entry_name}: {e}"))?;

    let entry = manifest
        .mods
        .into_iter()
        .next()
        .ok_or_else(|| format!("No [[mods]] entry in {entry_name}"))?;

    // Dependency tables are registered under the owning mod id; keep only
    // entries that actually declare a modId.
    let requires = entry
        .mod_id
        .as_deref()
        .and_then(|id| manifest.dependencies.get(id))
        .map(|deps| deps.iter().filter_map(|d| d.mod_id.clone()).collect())
        .unwrap_or_default();

    Ok(ParsedManifest {
        id: entry.mod_id,
        name: entry.display_name,
        version: entry.version,
        requires,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{init_test_logging, make_jar};
    use tempfile::TempDir;

    #[test]
    fn test_fabric_fields_match_manifest() {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "sodium.jar",
            &[(
                "fabric.mod.json",
                r#"{
                    "id": "sodium",
                    "name": "Sodium",
                    "version": "0.5.8",
                    "depends": {"fabricloader": ">=0.15", "minecraft": "~1.20"}
                }"#,
            )],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.id, "sodium");
        assert_eq!(record.name, "Sodium");
        assert_eq!(record.version, "0.5.8");
        assert_eq!(record.loader, LoaderType::Fabric);
        assert_eq!(record.requires, vec!["fabricloader", "minecraft"]);
    }

    #[test]
    fn test_fabric_name_falls_back_to_id() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "lithium.jar",
            &[("fabric.mod.json", r#"{"id": "lithium", "version": "1.0"}"#)],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.name, "lithium");
        assert!(record.requires.is_empty());
    }

    // A jar shipping both manifests classifies as Fabric (first marker in
    // check order) and is extracted from fabric.mod.json.
    #[test]
    fn test_dual_manifest_jar_extracted_as_fabric() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "ok_zoomer.jar",
            &[
                ("quilt.mod.json", r#"{"schema_version": 1}"#),
                (
                    "fabric.mod.json",
                    r#"{"id": "ok_zoomer", "name": "Ok Zoomer", "version": "6.0"}"#,
                ),
            ],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.loader, LoaderType::Fabric);
        assert_eq!(record.id, "ok_zoomer");
        assert_eq!(record.version, "6.0");
    }

    // Quilt extraction reads fabric.mod.json (the original tool's contract);
    // a Quilt-only jar therefore degrades to defaults.
    #[test]
    fn test_quilt_without_fabric_manifest_degrades() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "pure_quilt.jar",
            &[("quilt.mod.json", r#"{"schema_version": 1}"#)],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.loader, LoaderType::Quilt);
        assert_eq!(record.id, FALLBACK_MOD_ID);
        assert_eq!(record.name, "pure_quilt.jar");
        assert_eq!(record.version, "?");
    }

    #[test]
    fn test_forge_first_mods_entry() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "jei.jar",
            &[(
                "META-INF/mods.toml",
                r#"
modLoader = "javafml"

[[mods]]
modId = "jei"
displayName = "Just Enough Items"
version = "15.2.0"

[[mods]]
modId = "jei_extras"
version = "1.0"

[[dependencies.jei]]
modId = "forge"
mandatory = true

[[dependencies.jei]]
modId = "minecraft"

[[dependencies.jei]]
versionRange = "[1.0,)"
"#,
            )],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.loader, LoaderType::Forge);
        assert_eq!(record.id, "jei");
        assert_eq!(record.name, "Just Enough Items");
        assert_eq!(record.version, "15.2.0");
        // Third dependency entry declares no modId and is dropped.
        assert_eq!(record.requires, vec!["forge", "minecraft"]);
    }

    #[test]
    fn test_neoforge_uses_its_own_manifest_entry() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "neo.jar",
            &[(
                "META-INF/neoforge.mods.toml",
                "[[mods]]\nmodId = \"embers\"\nversion = \"2.1\"\n",
            )],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.loader, LoaderType::NeoForge);
        assert_eq!(record.id, "embers");
        // displayName absent: name falls back to the id.
        assert_eq!(record.name, "embers");
    }

    #[test]
    fn test_malformed_manifest_degrades_to_defaults() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(dir.path(), "bad.jar", &[("fabric.mod.json", "{not json")]);

        let record = extract_mod_record(&jar);
        assert_eq!(record.loader, LoaderType::Fabric);
        assert_eq!(record.id, FALLBACK_MOD_ID);
        assert_eq!(record.name, "bad.jar");
        assert_eq!(record.version, "?");
        assert!(record.requires.is_empty());
    }

    #[test]
    fn test_empty_mods_array_degrades() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(
            dir.path(),
            "hollow.jar",
            &[("META-INF/mods.toml", "modLoader = \"javafml\"\n")],
        );

        let record = extract_mod_record(&jar);
        assert_eq!(record.id, FALLBACK_MOD_ID);
        assert_eq!(record.loader, LoaderType::Forge);
    }

    #[test]
    fn test_unknown_jar_keeps_filename_as_name() {
        let dir = TempDir::new().unwrap();
        let jar = make_jar(dir.path(), "mystery.jar", &[("readme.txt", "hi")]);

        let record = extract_mod_record(&jar);
        assert_eq!(record.loader, LoaderType::Unknown);
        assert_eq!(record.name, "mystery.jar");
    }
}
