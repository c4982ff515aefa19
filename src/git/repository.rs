use super::diff::{ChangeKind, FileDiffEntry};
use crate::error::{Error, Result};
use git2::{build::CheckoutBuilder, DiffOptions, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around the git2 repository handle. The handle is held for the
/// lifetime of one run and released when this struct drops.
pub struct Repository {
    repo: Git2Repo,
}

impl Repository {
    /// Open the repository at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|err| {
            if err.code() == git2::ErrorCode::NotFound {
                Error::RepositoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Git(err)
            }
        })?;
        Ok(Self { repo })
    }

    /// Resolve a commit-ish spec (hash, abbreviated hash, ref name) to the
    /// commit it points at
    pub fn resolve_commit(&self, spec: &str) -> Result<Oid> {
        let object = self.repo.revparse_single(spec)?;
        let commit = object.peel_to_commit()?;
        Ok(commit.id())
    }

    /// Force-checkout the given commit, detaching HEAD onto it
    pub fn checkout(&self, oid: Oid) -> Result<()> {
        let commit = self.repo.find_commit(oid)?;
        let mut opts = CheckoutBuilder::new();
        opts.force();
        self.repo.checkout_tree(commit.as_object(), Some(&mut opts))?;
        self.repo.set_head_detached(oid)?;
        Ok(())
    }

    /// First-parent ancestry starting at `start`, newest first
    pub fn ancestry(&self, start: Oid) -> Result<Vec<Oid>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(start)?;
        revwalk.simplify_first_parent()?;

        let mut commits = Vec::new();
        for oid in revwalk {
            commits.push(oid?);
        }
        Ok(commits)
    }

    /// File-level diff between two commits' trees. Each pair is diffed
    /// independently; rename detection is deliberately not requested.
    pub fn diff_entries(&self, previous: Oid, current: Oid) -> Result<Vec<FileDiffEntry>> {
        let previous_tree = self.repo.find_commit(previous)?.tree()?;
        let current_tree = self.repo.find_commit(current)?.tree()?;

        let mut opts = DiffOptions::new();
        let diff = self.repo.diff_tree_to_tree(
            Some(&previous_tree),
            Some(&current_tree),
            Some(&mut opts),
        )?;

        let entries = diff
            .deltas()
            .map(|delta| FileDiffEntry {
                old_path: delta
                    .old_file()
                    .path()
                    .map(|p| p.to_string_lossy().into_owned()),
                new_path: delta
                    .new_file()
                    .path()
                    .map(|p| p.to_string_lossy().into_owned()),
                kind: ChangeKind::from(delta.status()),
            })
            .collect();

        Ok(entries)
    }

    /// Content of the blob at `path` in the tree of `commit`. A path the
    /// diff reported but the tree cannot serve is a backend inconsistency
    /// and surfaces as a fatal git error.
    pub fn blob_content(&self, commit: Oid, path: &str) -> Result<String> {
        let commit = self.repo.find_commit(commit)?;
        let tree = commit.tree()?;
        let entry = tree.get_path(Path::new(path))?;
        let blob = self.repo.find_blob(entry.id())?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}
