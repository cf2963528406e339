//! Walks the config tree, invoking observations for each leaf and
//! materializing each node into a rendered fragment, then resolves
//! separator visibility across each group's children.

pub mod separator;

use crate::config::{Node, SeparatorDisplay};
use crate::git::{HeadRef, Observations, RemoteDivergence, RepoHandle};

/// Whether a rendered non-separator fragment actually produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    Emitted,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Separator(SeparatorDisplay),
    Content(ContentState),
}

/// One rendered sibling in a group's child list.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub text: String,
    pub kind: FragmentKind,
}

impl Fragment {
    fn empty() -> Self {
        Self {
            text: String::new(),
            kind: FragmentKind::Content(ContentState::Empty),
        }
    }

    fn emitted(text: String) -> Self {
        Self {
            text,
            kind: FragmentKind::Content(ContentState::Emitted),
        }
    }
}

/// Scope carried down while walking inside a `remote_difference` node: its
/// resolved divergence (for `Ahead`/`Behind`) and the local branch short
/// name (for bare `Name` rendering and `<LOCAL_BRANCH>` substitution).
#[derive(Debug, Clone, Default)]
struct Scope {
    remote: Option<RemoteDivergence>,
    local_branch: Option<String>,
}

impl Scope {
    fn substitute(&self, text: &str) -> String {
        match &self.local_branch {
            Some(name) => text.replace("<LOCAL_BRANCH>", name),
            None => text.to_string(),
        }
    }
}

/// Render the whole document: an implicit top-level group over `values`.
pub fn eval_document(values: &[Node], repo: Option<&RepoHandle>, obs: Option<&Observations>) -> String {
    let scope = Scope::default();
    let fragments: Vec<Fragment> = values.iter().map(|n| eval_node(n, repo, obs, &scope)).collect();
    separator::resolve(&fragments)
}

fn eval_node(node: &Node, repo: Option<&RepoHandle>, obs: Option<&Observations>, scope: &Scope) -> Fragment {
    match node {
        Node::Separator {
            display,
            pre_format,
            post_format,
        } => Fragment {
            text: format!("{}{}", scope.substitute(pre_format), scope.substitute(post_format)),
            kind: FragmentKind::Separator(*display),
        },

        Node::Group {
            pre_format,
            post_format,
            values,
        } => {
            let children: Vec<Fragment> = values.iter().map(|n| eval_node(n, repo, obs, scope)).collect();
            let inner = separator::resolve(&children);
            if inner.is_empty() {
                Fragment::empty()
            } else {
                Fragment::emitted(format!("{}{inner}{}", scope.substitute(pre_format), scope.substitute(post_format)))
            }
        }

        Node::RemoteDifference {
            remote_branch,
            display_if_uptodate,
            pre_format,
            post_format,
            values,
        } => {
            let (Some(repo), Some(obs)) = (repo, obs) else {
                return Fragment::empty();
            };
            let divergence = repo.remote_divergence(&obs.head, remote_branch.as_deref());
            let RemoteDivergence::Present { ahead, behind } = divergence else {
                return Fragment::empty();
            };

            let inner_scope = Scope {
                remote: Some(divergence),
                local_branch: Some(crate::git::head::local_branch_name(&obs.head)),
            };
            let children: Vec<Fragment> = values
                .iter()
                .map(|n| eval_node(n, Some(repo), Some(obs), &inner_scope))
                .collect();
            let inner = separator::resolve(&children);

            let uptodate = ahead == 0 && behind == 0;
            if !inner.is_empty() {
                Fragment::emitted(format!("{}{inner}{}", scope.substitute(pre_format), scope.substitute(post_format)))
            } else if *display_if_uptodate && uptodate {
                Fragment::emitted(format!("{}{}", scope.substitute(pre_format), scope.substitute(post_format)))
            } else {
                Fragment::empty()
            }
        }

        Node::Name { pre_format, post_format } => {
            let Some(obs) = obs else { return Fragment::empty() };
            let value = match &scope.remote {
                Some(_) => scope.local_branch.clone().unwrap_or_default(),
                None => crate::git::head::label(&obs.head),
            };
            wrap_if_nonempty(&value, pre_format, post_format, scope)
        }

        Node::Ahead { pre_format, post_format } => match scope.remote {
            Some(RemoteDivergence::Present { ahead, .. }) if ahead > 0 => {
                wrap_if_nonempty(&ahead.to_string(), pre_format, post_format, scope)
            }
            _ => Fragment::empty(),
        },

        Node::Behind { pre_format, post_format } => match scope.remote {
            Some(RemoteDivergence::Present { behind, .. }) if behind > 0 => {
                wrap_if_nonempty(&behind.to_string(), pre_format, post_format, scope)
            }
            _ => Fragment::empty(),
        },

        Node::NewCommit { pre_format, post_format } | Node::Difference { pre_format, post_format } => {
            count_leaf(obs, pre_format, post_format, scope, |ws| ws.untracked)
        }

        Node::Changed { pre_format, post_format } => {
            count_leaf(obs, pre_format, post_format, scope, |ws| ws.unstaged_modifications)
        }

        Node::Staged { pre_format, post_format } => {
            count_leaf(obs, pre_format, post_format, scope, |ws| ws.staged_modifications)
        }

        Node::Conflicts { pre_format, post_format } => {
            count_leaf(obs, pre_format, post_format, scope, |ws| ws.conflicts)
        }

        Node::Stashed { pre_format, post_format } => {
            let Some(obs) = obs else { return Fragment::empty() };
            let count = obs.stash_count.0;
            if count == 0 {
                Fragment::empty()
            } else {
                wrap_if_nonempty(&count.to_string(), pre_format, post_format, scope)
            }
        }

        Node::Merge { pre_format, post_format } => {
            let Some(obs) = obs else { return Fragment::empty() };
            if obs.merge_state.0 {
                wrap_if_nonempty("merge", pre_format, post_format, scope)
            } else {
                Fragment::empty()
            }
        }
    }
}

fn count_leaf(
    obs: Option<&Observations>,
    pre_format: &str,
    post_format: &str,
    scope: &Scope,
    extract: impl Fn(&crate::git::WorkingState) -> u32,
) -> Fragment {
    let Some(obs) = obs else { return Fragment::empty() };
    let count = extract(&obs.working_state);
    if count == 0 {
        Fragment::empty()
    } else {
        wrap_if_nonempty(&count.to_string(), pre_format, post_format, scope)
    }
}

fn wrap_if_nonempty(value: &str, pre_format: &str, post_format: &str, scope: &Scope) -> Fragment {
    if value.is_empty() {
        Fragment::empty()
    } else {
        Fragment::emitted(format!(
            "{}{value}{}",
            scope.substitute(pre_format),
            scope.substitute(post_format)
        ))
    }
}
