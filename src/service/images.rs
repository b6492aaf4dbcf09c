//! Screenshot storage for trade entries.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Copy a screenshot into the images directory and return the stored path.
///
/// The original file name is kept, so a later upload with the same name
/// overwrites the stored copy. Copies left behind by edits or deletes are
/// never cleaned up.
///
/// # Errors
/// Returns an error when the source cannot be read or the copy fails.
pub fn attach(source: &Path, images_dir: &Path) -> Result<String> {
    fs::create_dir_all(images_dir)?;

    let file_name = source
        .file_name()
        .ok_or_else(|| Error::Parse(format!("not a file: {}", source.display())))?;
    let target = images_dir.join(file_name);
    fs::copy(source, &target)?;

    debug!(source = %source.display(), target = %target.display(), "Stored screenshot");
    Ok(target.to_string_lossy().into_owned())
}

/// True when a stored image path still points at an existing file.
///
/// Missing files are skipped at render time rather than treated as errors.
#[must_use]
pub fn is_present(path: &str) -> bool {
    !path.is_empty() && Path::new(path).exists()
}
