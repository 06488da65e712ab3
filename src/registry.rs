use crate::cli::CommonArgs;
use crate::error::Result;
use crate::util::registry_path;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Plain-text list of tracked repositories, one path per line.
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as an empty list.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    pub fn save(&self, repos: &[PathBuf]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = repos
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Append repositories not yet tracked and persist. Returns how many were new.
    pub fn merge(&self, found: &[PathBuf]) -> Result<usize> {
        let mut repos = self.load()?;
        let before = repos.len();
        for repo in found {
            if !repos.contains(repo) {
                repos.push(repo.clone());
            }
        }
        self.save(&repos)?;
        Ok(repos.len() - before)
    }
}

pub fn exec_list(common: &CommonArgs) -> anyhow::Result<()> {
    let registry = Registry::new(registry_path(common.registry.as_deref())?);
    let repos = registry
        .load()
        .with_context(|| format!("Failed to read {}", registry.path().display()))?;
    for repo in repos {
        println!("{}", repo.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let registry = Registry::new(dir.path().join("list"));
        assert!(registry.load().unwrap().is_empty());
    }

    #[test]
    fn merge_keeps_existing_order_and_skips_duplicates() {
        let dir = tempdir().unwrap();
        let registry = Registry::new(dir.path().join("list"));
        registry
            .save(&[PathBuf::from("/src/b"), PathBuf::from("/src/a")])
            .unwrap();

        let added = registry
            .merge(&[PathBuf::from("/src/a"), PathBuf::from("/src/c")])
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(
            registry.load().unwrap(),
            vec![
                PathBuf::from("/src/b"),
                PathBuf::from("/src/a"),
                PathBuf::from("/src/c")
            ]
        );
        let raw = std::fs::read_to_string(registry.path()).unwrap();
        assert_eq!(raw, "/src/b\n/src/a\n/src/c");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list");
        std::fs::write(&path, "/one\n\n/two\n").unwrap();
        let registry = Registry::new(path);
        assert_eq!(
            registry.load().unwrap(),
            vec![PathBuf::from("/one"), PathBuf::from("/two")]
        );
    }
}
