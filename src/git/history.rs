use super::diff::FileDiffEntry;
use super::repository::Repository;
use crate::error::Result;
use git2::Oid;

/// One step of the backward walk: the commit under analysis, the commit
/// immediately preceding it, and the file-level diff between the two.
#[derive(Debug)]
pub struct CommitStep {
    pub current: Oid,
    pub previous: Oid,
    pub entries: Vec<FileDiffEntry>,
}

/// Iterates first-parent history backward from a starting commit, one
/// (current, previous) pair at a time, newest pair first. A history of N
/// commits yields N-1 steps; the oldest commit has no previous commit and
/// is never the `current` side of a step.
///
/// Each step's diff is computed when the step is yielded; nothing is
/// cached across steps.
pub struct HistoryWalker<'a> {
    repo: &'a Repository,
    commits: Vec<Oid>,
    pos: usize,
}

impl<'a> HistoryWalker<'a> {
    pub fn new(repo: &'a Repository, start: Oid) -> Result<Self> {
        let commits = repo.ancestry(start)?;
        Ok(Self {
            repo,
            commits,
            pos: 0,
        })
    }

    /// Number of commit pairs the walk will produce
    pub fn pair_count(&self) -> usize {
        self.commits.len().saturating_sub(1)
    }
}

impl Iterator for HistoryWalker<'_> {
    type Item = Result<CommitStep>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = *self.commits.get(self.pos)?;
        let previous = *self.commits.get(self.pos + 1)?;
        self.pos += 1;

        Some(
            self.repo
                .diff_entries(previous, current)
                .map(|entries| CommitStep {
                    current,
                    previous,
                    entries,
                }),
        )
    }
}
