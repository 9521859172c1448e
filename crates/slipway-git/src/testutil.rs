//! Shared helpers for building throwaway repositories in tests

use git2::{Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

use crate::repository::GitRepo;

/// Initialize a repository with `n` commits on the default branch
pub(crate) fn repo_with_commits(n: usize) -> (TempDir, GitRepo) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();

    let sig = Signature::now("Test", "test@example.com").unwrap();

    for i in 0..n {
        let file = format!("file-{}.txt", i);
        std::fs::write(temp.path().join(&file), format!("content {}", i)).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(&file)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let parents: Vec<git2::Commit<'_>> = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        repo.commit(
            Some("HEAD"),
            &sig,
            &sig,
            &format!("commit {}", i),
            &tree,
            &parent_refs,
        )
        .unwrap();
    }

    let git_repo = GitRepo::open(temp.path()).unwrap();
    (temp, git_repo)
}
