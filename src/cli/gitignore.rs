//! `.gitignore` patching used by `-ignore`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::Result;

/// Append `entry` to `.gitignore` if no line already matches it.
///
/// Creates the file if it doesn't exist. Returns `true` when the entry
/// was added and `false` when it was already present.
pub fn patch_gitignore(project_dir: &Path, entry: &str) -> Result<bool> {
    let gitignore_path = project_dir.join(".gitignore");

    let existing = match fs::read_to_string(&gitignore_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    if existing.lines().any(|line| line.trim() == entry) {
        return Ok(false);
    }

    let separator = if existing.ends_with('\n') || existing.is_empty() {
        ""
    } else {
        "\n"
    };

    fs::write(&gitignore_path, format!("{existing}{separator}{entry}\n"))?;
    Ok(true)
}
