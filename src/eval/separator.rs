//! Separator-visibility resolution, kept free of tree traversal so it can be
//! exercised directly against the literal scenarios in isolation from any
//! repository state.

use super::{ContentState, Fragment, FragmentKind};
use crate::config::SeparatorDisplay;

/// Resolve which fragments in `fragments` are visible and concatenate their
/// text in order.
///
/// - `Always` separators are always emitted.
/// - `Surrounded` separators are emitted iff the nearest non-separator
///   sibling on each side (scanning past other separators) exists and is
///   `Emitted`.
pub fn resolve(fragments: &[Fragment]) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if is_visible(fragments, i) {
            out.push_str(&fragment.text);
        }
    }
    out
}

fn is_visible(fragments: &[Fragment], i: usize) -> bool {
    match &fragments[i].kind {
        FragmentKind::Content(ContentState::Emitted) => true,
        FragmentKind::Content(ContentState::Empty) => false,
        FragmentKind::Separator(SeparatorDisplay::Always) => true,
        FragmentKind::Separator(SeparatorDisplay::Surrounded) => {
            nearest_content_emitted(fragments[..i].iter().rev())
                && nearest_content_emitted(fragments[i + 1..].iter())
        }
    }
}

/// Scan past separators in the given direction; `true` iff the nearest
/// non-separator found is `Emitted`, `false` if none exists or it is empty.
fn nearest_content_emitted<'a>(mut iter: impl Iterator<Item = &'a Fragment>) -> bool {
    iter.find_map(|f| match &f.kind {
        FragmentKind::Content(state) => Some(matches!(state, ContentState::Emitted)),
        FragmentKind::Separator(_) => None,
    })
    .unwrap_or(false)
}
