//! Stash count.

use git2::Repository;

/// Non-negative count of stash log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StashCount(pub u32);

/// Count stash entries. `stash_foreach` mutably borrows the repository, so
/// this observation is the one that needs `&mut Repository`.
pub fn observe(repo: &mut Repository) -> StashCount {
    let mut count = 0u32;
    let _ = repo.stash_foreach(|_, _, _| {
        count += 1;
        true
    });
    StashCount(count)
}
