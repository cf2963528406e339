//! Merge-in-progress detection.

use git2::{Repository, RepositoryState};

/// Whether a merge is currently in progress (a `MERGE_HEAD` marker exists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeState(pub bool);

pub fn observe(repo: &Repository) -> MergeState {
    MergeState(repo.state() == RepositoryState::Merge)
}
