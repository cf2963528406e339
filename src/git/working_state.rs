//! Working-tree and index classification.

use git2::{Repository, Status, StatusOptions};

/// Four independent non-negative counts. Every non-clean path contributes to
/// exactly one bucket: conflicts dominate, then staged, then unstaged, then
/// untracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingState {
    pub untracked: u32,
    pub unstaged_modifications: u32,
    pub staged_modifications: u32,
    pub conflicts: u32,
}

const CONFLICTED: Status = Status::CONFLICTED;
const STAGED: Status = Status::from_bits_truncate(
    Status::INDEX_NEW.bits()
        | Status::INDEX_MODIFIED.bits()
        | Status::INDEX_DELETED.bits()
        | Status::INDEX_RENAMED.bits()
        | Status::INDEX_TYPECHANGE.bits(),
);
const UNSTAGED: Status = Status::from_bits_truncate(
    Status::WT_MODIFIED.bits()
        | Status::WT_DELETED.bits()
        | Status::WT_RENAMED.bits()
        | Status::WT_TYPECHANGE.bits(),
);
const UNTRACKED: Status = Status::WT_NEW;

/// Classify every status entry into exactly one bucket, highest-severity
/// wins for the rare path whose bits span more than one bucket.
pub fn observe(repo: &Repository) -> WorkingState {
    if repo.is_bare() {
        return WorkingState::default();
    }

    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .include_ignored(false)
        .recurse_untracked_dirs(true);

    let statuses = match repo.statuses(Some(&mut opts)) {
        Ok(statuses) => statuses,
        Err(_) => return WorkingState::default(),
    };

    let mut state = WorkingState::default();
    for entry in statuses.iter() {
        let bits = entry.status();
        if bits.intersects(CONFLICTED) {
            state.conflicts += 1;
        } else if bits.intersects(STAGED) {
            state.staged_modifications += 1;
        } else if bits.intersects(UNSTAGED) {
            state.unstaged_modifications += 1;
        } else if bits.intersects(UNTRACKED) {
            state.untracked += 1;
        }
    }
    state
}
