use crate::cli::CommonArgs;
use crate::error::{GardenError, Result};
use crate::registry::Registry;
use crate::util::{registry_path, trim_trailing_separator};
use anyhow::Context;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

const SKIPPED_DIRS: &[&str] = &[".env", "node_modules", "vendor"];

pub fn exec(common: &CommonArgs, folder: &Path) -> anyhow::Result<()> {
    let folder = trim_trailing_separator(folder);
    println!("Scanning {}", folder.display());

    let found = find_repositories(&folder)
        .with_context(|| format!("Failed to scan {}", folder.display()))?;
    let registry = Registry::new(registry_path(common.registry.as_deref())?);
    let added = registry
        .merge(&found)
        .with_context(|| format!("Failed to update {}", registry.path().display()))?;

    tracing::info!(found = found.len(), added, "registry updated");
    println!("Found {} repositories, {} new", found.len(), added);
    Ok(())
}

/// Every directory under `root` that contains a `.git` directory.
///
/// Nested repositories are reported too; `.git` contents are never walked.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(GardenError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| {
            let inside_git = entry
                .path()
                .parent()
                .is_some_and(|parent| parent.file_name() == Some(OsStr::new(".git")));
            let skipped = entry.depth() > 0
                && entry.file_type().is_some_and(|ft| ft.is_dir())
                && SKIPPED_DIRS.iter().any(|name| entry.file_name() == *name);
            !inside_git && !skipped
        })
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth().unwrap_or(0) > 0 => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        if is_dir && entry.file_name() == ".git" {
            if let Some(parent) = entry.path().parent() {
                tracing::debug!(repo = %parent.display(), "found repository");
                repos.push(parent.to_path_buf());
            }
        }
    }

    repos.sort();
    Ok(repos)
}
