//! Best-effort browser display of the written chart documents
//!
//! Uses the platform opener found on PATH. The opener is detached and not
//! waited on; only a failure to find or start it is reported.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::common::{Error, Result};

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);

#[cfg(windows)]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

#[cfg(not(any(target_os = "macos", windows)))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Locate the platform opener
pub fn opener() -> Result<PathBuf> {
    let (name, _) = OPENER;
    which::which(name).map_err(|e| Error::Display(format!("'{name}' not available: {e}")))
}

/// Open `path` in the default browser
pub fn open(path: &Path) -> Result<()> {
    let program = opener()?;
    let (_, args) = OPENER;
    tracing::debug!("Opening {} with {}", path.display(), program.display());

    Command::new(&program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::Display(format!("failed to start {}: {e}", program.display())))?;

    Ok(())
}
