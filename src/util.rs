use crate::error::{GardenError, Result};
use std::path::{Path, PathBuf};

pub const REGISTRY_FILE: &str = ".gitgarden";

pub fn default_registry_path() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(REGISTRY_FILE))
        .ok_or(GardenError::NoHomeDir)
}

pub fn registry_path(flag: Option<&Path>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path.to_path_buf()),
        None => default_registry_path(),
    }
}

/// Drop trailing separators so `repos/` and `repos` name the same folder.
pub fn trim_trailing_separator(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        path.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}
