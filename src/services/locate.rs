//! Platform default `.minecraft/mods` detection, used when no path is given
//! on the command line.

use std::path::PathBuf;

/// Return the default mods folder for this OS, if it exists.
///
/// Windows: `%APPDATA%\.minecraft\mods`; macOS:
/// `~/Library/Application Support/minecraft/mods`; elsewhere:
/// `~/.minecraft/mods`.
pub fn default_mods_dir() -> Option<PathBuf> {
    let minecraft = if cfg!(target_os = "windows") {
        dirs::config_dir()?.join(".minecraft")
    } else if cfg!(target_os = "macos") {
        dirs::home_dir()?
            .join("Library")
            .join("Application Support")
            .join("minecraft")
    } else {
        dirs::home_dir()?.join(".minecraft")
    };

    let mods = minecraft.join("mods");
    if mods.is_dir() {
        Some(mods)
    } else {
        None
    }
}
