//! Working directory for generator runs.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve the project root a generator run should happen in.
///
/// First open folder, else the directory of the active file, else the
/// process working directory.
pub fn resolve_project_root(folders: &[PathBuf], active_file: Option<&Path>) -> Result<PathBuf> {
    if let Some(folder) = folders.first() {
        return Ok(folder.clone());
    }

    if let Some(dir) = active_file
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        return Ok(dir.to_path_buf());
    }

    std::env::current_dir().map_err(|source| Box::new(Error::CurrentDir { source }))
}
