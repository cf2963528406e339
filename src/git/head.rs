//! HEAD resolution: branch, detached, or unborn.

use git2::{ErrorCode, Repository};

/// Where `HEAD` currently points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadRef {
    /// `HEAD` resolves to an existing branch.
    Branch(String),
    /// `HEAD` points directly at a commit. Kept in full; truncation to 7
    /// characters is the head-label renderer's concern, not this observation.
    Detached(String),
    /// `HEAD` points at a branch ref with no commits yet. Carries the branch
    /// name read from the symbolic target, so a repository configured with
    /// `init.defaultBranch = main` reports `main`, not a hardcoded literal.
    Unborn(String),
}

/// Resolve `HEAD`. Total: any lookup failure other than the well-known
/// unborn-branch case still produces a defined value rather than an error,
/// since a broken prompt observation must never block the shell.
pub fn resolve(repo: &Repository) -> HeadRef {
    match repo.head() {
        Ok(head) => {
            if let Some(name) = head.shorthand() {
                if head.is_branch() {
                    return HeadRef::Branch(name.to_string());
                }
            }
            match head.target() {
                Some(oid) => HeadRef::Detached(oid.to_string()),
                None => HeadRef::Unborn(unborn_placeholder(repo)),
            }
        }
        Err(e) if e.code() == ErrorCode::UnbornBranch => HeadRef::Unborn(unborn_placeholder(repo)),
        Err(_) => HeadRef::Unborn(unborn_placeholder(repo)),
    }
}

/// Read the branch name an unborn `HEAD` points at, e.g. `refs/heads/master`
/// → `master`. Falls back to `"master"` if the symbolic target can't be read.
fn unborn_placeholder(repo: &Repository) -> String {
    repo.find_reference("HEAD")
        .ok()
        .and_then(|r| r.symbolic_target().map(str::to_string))
        .and_then(|target| target.strip_prefix("refs/heads/").map(str::to_string))
        .unwrap_or_else(|| "master".to_string())
}

/// First 7 hex characters of a detached commit id.
pub fn short_hex(hex: &str) -> &str {
    let end = hex.char_indices().nth(7).map_or(hex.len(), |(idx, _)| idx);
    &hex[..end]
}

/// Head label per the rendering priority (merge placement is a separate,
/// addressable leaf — see `crate::eval`): branch name, or the first 7 hex
/// characters of a detached commit, or the unborn placeholder.
pub fn label(head: &HeadRef) -> String {
    match head {
        HeadRef::Branch(name) => name.clone(),
        HeadRef::Detached(hex) => short_hex(hex).to_string(),
        HeadRef::Unborn(placeholder) => placeholder.clone(),
    }
}

/// The local branch short name, used for `<LOCAL_BRANCH>` substitution inside
/// a `remote_difference` group. Detached/unborn heads have no branch name to
/// substitute, so this falls back to the same label used at top level.
pub fn local_branch_name(head: &HeadRef) -> String {
    label(head)
}
