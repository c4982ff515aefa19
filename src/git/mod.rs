mod diff;
mod history;
mod repository;

pub use diff::{ChangeKind, FileDiffEntry};
pub use history::HistoryWalker;
pub use repository::Repository;

// Re-export for embedding surfaces
#[allow(unused_imports)]
pub use history::CommitStep;

/// Scratch-repository helpers shared by the git unit tests.
#[cfg(test)]
pub(crate) mod scratch {
    use git2::{Oid, Repository as Git2Repo, Signature};
    use std::path::Path;

    pub fn scratch_repo() -> (tempfile::TempDir, Git2Repo) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        (dir, repo)
    }

    pub fn commit_file(repo: &Git2Repo, path: &str, text: &str, message: &str) -> Oid {
        let workdir = repo.workdir().unwrap();
        std::fs::write(workdir.join(path), text).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        index.write().unwrap();
        commit_index(repo, message)
    }

    pub fn commit_removal(repo: &Git2Repo, path: &str, message: &str) -> Oid {
        let workdir = repo.workdir().unwrap();
        std::fs::remove_file(workdir.join(path)).unwrap();

        let mut index = repo.index().unwrap();
        index.remove_path(Path::new(path)).unwrap();
        index.write().unwrap();
        commit_index(repo, message)
    }

    fn commit_index(repo: &Git2Repo, message: &str) -> Oid {
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let sig = Signature::now("tester", "tester@example.com").unwrap();
        let parent = repo
            .head()
            .ok()
            .and_then(|h| h.target())
            .map(|oid| repo.find_commit(oid).unwrap());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}
