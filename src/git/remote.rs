//! Ahead/behind divergence against a remote-tracking branch.

use git2::{BranchType, Repository};

use super::head::HeadRef;

/// Divergence of local `HEAD` against a specific remote-tracking branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteDivergence {
    /// No such remote-tracking branch exists.
    Absent,
    Present { ahead: u32, behind: u32 },
}

/// Resolve `remote_branch` (`<remote>/<branch>`) if given, otherwise the
/// current branch's configured upstream, and compute the symmetric
/// difference against local `HEAD` from their merge base. Detached or unborn
/// heads have no meaningful divergence.
pub fn observe(repo: &Repository, head: &HeadRef, remote_branch: Option<&str>) -> RemoteDivergence {
    let HeadRef::Branch(local_name) = head else {
        return RemoteDivergence::Absent;
    };

    let Some(local_oid) = repo
        .find_branch(local_name, BranchType::Local)
        .ok()
        .and_then(|b| b.get().target())
    else {
        return RemoteDivergence::Absent;
    };

    let remote_oid = match remote_branch {
        Some(spec) => repo
            .find_reference(&format!("refs/remotes/{spec}"))
            .ok()
            .and_then(|r| r.target()),
        None => repo
            .find_branch(local_name, BranchType::Local)
            .ok()
            .and_then(|b| b.upstream().ok())
            .and_then(|upstream| upstream.get().target()),
    };

    let Some(remote_oid) = remote_oid else {
        return RemoteDivergence::Absent;
    };

    match repo.graph_ahead_behind(local_oid, remote_oid) {
        Ok((ahead, behind)) => RemoteDivergence::Present {
            ahead: ahead as u32,
            behind: behind as u32,
        },
        Err(_) => RemoteDivergence::Absent,
    }
}
