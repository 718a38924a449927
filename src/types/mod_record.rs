//! Core data model: one record per scanned jar, plus the loader enum and
//! the per-mod analysis status.

use serde::Serialize;
use std::fmt;

/// Fallback identifier for mods whose manifest could not be read.
/// Excluded from duplicate detection and never satisfies a dependency.
pub const FALLBACK_MOD_ID: &str = "unknown";

/// The mod-loader family a jar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LoaderType {
    Fabric,
    Quilt,
    Forge,
    NeoForge,
    Unknown,
}

impl LoaderType {
    /// Marker entries checked in order; the first hit decides the loader.
    pub const MARKERS: [(LoaderType, &'static str); 4] = [
        (LoaderType::Fabric, "fabric.mod.json"),
        (LoaderType::Quilt, "quilt.mod.json"),
        (LoaderType::Forge, "META-INF/mods.toml"),
        (LoaderType::NeoForge, "META-INF/neoforge.mods.toml"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoaderType::Fabric => "Fabric",
            LoaderType::Quilt => "Quilt",
            LoaderType::Forge => "Forge",
            LoaderType::NeoForge => "NeoForge",
            LoaderType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LoaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata extracted from one mod archive. Immutable once built; lives only
/// for the duration of a single scan.
#[derive(Debug, Clone, Serialize)]
pub struct ModRecord {
    /// Jar file name within the mods folder.
    pub file: String,
    /// Mod identifier, or [`FALLBACK_MOD_ID`] when extraction failed.
    pub id: String,
    /// Display name, falling back to the id and then the file name.
    pub name: String,
    /// Declared version, or `"?"` when absent.
    pub version: String,
    pub loader: LoaderType,
    /// Identifiers of required dependencies, in manifest order.
    pub requires: Vec<String>,
}

impl ModRecord {
    /// Default record for a jar whose manifest was absent or unreadable.
    pub fn fallback(file: &str, loader: LoaderType) -> Self {
        ModRecord {
            file: file.to_string(),
            id: FALLBACK_MOD_ID.to_string(),
            name: file.to_string(),
            version: "?".to_string(),
            loader,
            requires: Vec::new(),
        }
    }
}

/// Analysis verdict for one record. Duplicate takes precedence over
/// missing dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ModStatus {
    Ok,
    DuplicateId,
    MissingDeps(Vec<String>),
}

impl fmt::Display for ModStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModStatus::Ok => f.write_str("OK"),
            ModStatus::DuplicateId => f.write_str("⚠ Duplicate mod ID"),
            ModStatus::MissingDeps(missing) => {
                write!(f, "⚠ Install missing mods: {}", missing.join(", "))
            }
        }
    }
}
