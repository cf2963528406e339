//! Repository probing and the five observations the evaluator consumes.
//!
//! Observations are pure functions of a [`RepoHandle`]; each is total over
//! its own recoverable failure modes (missing upstream, corrupted ref, bare
//! repository, ...) rather than propagating an error. A broken observation
//! must never turn a shell prompt into a hard failure.

use git2::Repository;

pub mod head;
pub mod merge;
pub mod remote;
pub mod stash;
pub mod working_state;

pub use head::HeadRef;
pub use merge::MergeState;
pub use remote::RemoteDivergence;
pub use stash::StashCount;
pub use working_state::WorkingState;

/// An open repository. Opaque identity created by [`probe`]; never mutated
/// beyond what `git2` itself needs internally (stash enumeration borrows
/// mutably).
pub struct RepoHandle {
    repo: Repository,
}

impl RepoHandle {
    pub fn head(&self) -> HeadRef {
        head::resolve(&self.repo)
    }

    pub fn working_state(&self) -> WorkingState {
        working_state::observe(&self.repo)
    }

    pub fn remote_divergence(&self, head: &HeadRef, remote_branch: Option<&str>) -> RemoteDivergence {
        remote::observe(&self.repo, head, remote_branch)
    }

    pub fn stash_count(&mut self) -> StashCount {
        stash::observe(&mut self.repo)
    }

    pub fn merge_state(&self) -> MergeState {
        merge::observe(&self.repo)
    }
}

/// Discover the repository enclosing `cwd`, walking parent directories
/// upward. A `NotFound` (or any other discovery failure) folds into `None` —
/// the one binary-wide point where an absent repository becomes "empty
/// observations" rather than a propagated error.
pub fn probe(cwd: &std::path::Path) -> Option<RepoHandle> {
    let repo = Repository::discover(cwd).ok()?;
    Some(RepoHandle { repo })
}

/// The four observations gathered once per invocation (everything except
/// remote divergence, which is re-queried per `remote_difference` node since
/// its target branch varies by config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observations {
    pub head: HeadRef,
    pub working_state: WorkingState,
    pub stash_count: StashCount,
    pub merge_state: MergeState,
}

impl Observations {
    pub fn gather(repo: &mut RepoHandle) -> Self {
        Self {
            head: repo.head(),
            working_state: repo.working_state(),
            stash_count: repo.stash_count(),
            merge_state: repo.merge_state(),
        }
    }
}
