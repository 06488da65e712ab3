use crate::error::{GardenError, Result};
use crate::model::CommitRecord;
use chrono::{DateTime, FixedOffset};
use gix::{ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted at `path`. No upward discovery.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Every commit reachable from HEAD, each visited once, in no particular order.
    pub fn commit_records(&self) -> Result<Vec<CommitRecord>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let author = commit.author()?;
            let time = author.time()?;

            records.push(CommitRecord {
                author_email: author.email.to_string(),
                timestamp: to_datetime(time.seconds, time.offset)?,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.detach());
            }
        }

        Ok(records)
    }
}

fn to_datetime(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let tz = FixedOffset::east_opt(offset)
        .ok_or_else(|| GardenError::InvalidTimestamp(format!("Invalid UTC offset: {offset}")))?;
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&tz))
        .ok_or_else(|| GardenError::InvalidTimestamp(format!("Invalid timestamp: {seconds}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_commit_offset() {
        let dt = to_datetime(1_718_100_000, 2 * 3600).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 7200);
        assert_eq!(dt.timestamp(), 1_718_100_000);
    }

    #[test]
    fn rejects_impossible_offset() {
        assert!(to_datetime(0, 48 * 3600).is_err());
    }

    #[test]
    fn opening_a_plain_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GitRepo::open(dir.path()).is_err());
    }
}
