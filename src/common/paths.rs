//! Configuration and output paths

use std::path::{Path, PathBuf};

/// Name used for the project directories
const APP_NAME: &str = "fibgold";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/fibgold/`
/// - macOS: `~/Library/Application Support/fibgold/`
/// - Windows: `%APPDATA%\fibgold\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Resolve an output file name against the output directory
///
/// Absolute file names, and any name when the directory is the working
/// directory, are used as-is.
pub fn output_file(dir: &Path, name: &str) -> PathBuf {
    let name = Path::new(name);
    if name.is_absolute() || dir.as_os_str().is_empty() || dir == Path::new(".") {
        name.to_path_buf()
    } else {
        dir.join(name)
    }
}
