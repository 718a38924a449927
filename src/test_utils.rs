//! Shared test fixtures: one-time logger init and jar (zip) builders.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger once across the whole test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build a jar fixture containing the given `(entry name, content)` pairs.
pub fn make_jar(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let jar_path = dir.join(name);
    let file = fs::File::create(&jar_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in entries {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    jar_path
}

/// Minimal Fabric jar with the given id and version.
pub fn fabric_jar(dir: &Path, name: &str, id: &str, version: &str) -> PathBuf {
    let manifest = format!(r#"{{"id": "{id}", "version": "{version}"}}"#);
    make_jar(dir, name, &[("fabric.mod.json", &manifest)])
}

/// Minimal Forge jar with the given id and version.
pub fn forge_jar(dir: &Path, name: &str, id: &str, version: &str) -> PathBuf {
    let manifest = format!("[[mods]]\nmodId = \"{id}\"\nversion = \"{version}\"\n");
    make_jar(dir, name, &[("META-INF/mods.toml", &manifest)])
}
