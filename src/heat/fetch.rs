use super::aggregate::{tally, DayCountTable};
use super::offset::Today;
use crate::git::GitRepo;
use crate::model::CommitRecord;
use anyhow::Context;
use chrono::TimeZone;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Source of commit records for a repository path.
pub trait CommitLog {
    fn read(&self, path: &Path) -> crate::error::Result<Vec<CommitRecord>>;
}

/// Reads history straight from the repository on disk.
pub struct GitLog;

impl CommitLog for GitLog {
    fn read(&self, path: &Path) -> crate::error::Result<Vec<CommitRecord>> {
        GitRepo::open(path)?.commit_records()
    }
}

/// Tally every repository into its own table and sum them.
///
/// The first repository that cannot be read aborts the whole run.
pub fn fetch_day_counts<Tz: TimeZone>(
    repos: &[PathBuf],
    author: &str,
    today: &Today<Tz>,
    log: &impl CommitLog,
    show_progress: bool,
) -> anyhow::Result<DayCountTable> {
    let pb = if show_progress {
        let pb = ProgressBar::new(repos.len() as u64);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut table = DayCountTable::new();
    for path in repos {
        pb.set_message(path.display().to_string());

        let commits = log
            .read(path)
            .with_context(|| format!("Failed to read history of {}", path.display()))?;
        let repo_table = tally(&commits, author, today);

        tracing::debug!(
            repo = %path.display(),
            commits = commits.len(),
            matched = repo_table.total(),
            "repository tallied"
        );
        table.merge(&repo_table);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GardenError;
    use chrono::{DateTime, FixedOffset};
    use std::collections::HashMap;

    struct FixtureLog {
        repos: HashMap<PathBuf, Vec<CommitRecord>>,
    }

    impl CommitLog for FixtureLog {
        fn read(&self, path: &Path) -> crate::error::Result<Vec<CommitRecord>> {
            self.repos
                .get(path)
                .cloned()
                .ok_or_else(|| GardenError::NotADirectory(path.to_path_buf()))
        }
    }

    fn today() -> Today<FixedOffset> {
        Today::new(DateTime::parse_from_rfc3339("2024-06-11T18:00:00+02:00").unwrap())
    }

    fn commit(author: &str, ts: &str) -> CommitRecord {
        CommitRecord::new(author, DateTime::parse_from_rfc3339(ts).unwrap())
    }

    fn fixture() -> FixtureLog {
        let mut repos = HashMap::new();
        repos.insert(
            PathBuf::from("a"),
            vec![
                commit("me@x.org", "2024-06-11T09:00:00+02:00"),
                commit("other@x.org", "2024-06-11T09:00:00+02:00"),
            ],
        );
        repos.insert(
            PathBuf::from("b"),
            vec![
                commit("me@x.org", "2024-06-11T10:00:00+02:00"),
                commit("me@x.org", "2024-06-01T10:00:00+02:00"),
            ],
        );
        FixtureLog { repos }
    }

    #[test]
    fn repositories_are_summed() {
        let repos = vec![PathBuf::from("a"), PathBuf::from("b")];
        let table = fetch_day_counts(&repos, "me@x.org", &today(), &fixture(), false).unwrap();
        assert_eq!(table.get(4), 2);
        assert_eq!(table.get(14), 1);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn repository_order_is_irrelevant() {
        let log = fixture();
        let forward = vec![PathBuf::from("a"), PathBuf::from("b")];
        let backward = vec![PathBuf::from("b"), PathBuf::from("a")];
        assert_eq!(
            fetch_day_counts(&forward, "me@x.org", &today(), &log, false).unwrap(),
            fetch_day_counts(&backward, "me@x.org", &today(), &log, false).unwrap()
        );
    }

    #[test]
    fn no_repositories_is_an_empty_table() {
        let table = fetch_day_counts(&[], "me@x.org", &today(), &fixture(), false).unwrap();
        assert_eq!(table, DayCountTable::new());
    }

    #[test]
    fn unreadable_repository_aborts() {
        let repos = vec![PathBuf::from("a"), PathBuf::from("missing")];
        let err = fetch_day_counts(&repos, "me@x.org", &today(), &fixture(), false).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err:#}");
    }
}
