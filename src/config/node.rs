//! The config document and its tagged `Node` tree, deserialized directly
//! from the user's YAML with `serde_yaml`.

use serde::Deserialize;

/// Top-level document: `version: '1'` plus a `values:` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigDocument {
    pub version: String,
    #[serde(default)]
    pub values: Vec<Node>,
}

/// Visibility policy for a `separator` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorDisplay {
    Always,
    Surrounded,
}

impl Default for SeparatorDisplay {
    /// Undocumented by the upstream test corpus; a separator a config author
    /// forgets to annotate behaves like ordinary decorative content rather
    /// than one that always appears.
    fn default() -> Self {
        Self::Surrounded
    }
}

/// One node of the format tree. Tagged on `type`, mirroring how node kinds
/// are dispatched by a string in the original configuration format — mapped
/// here to one enum case per kind rather than runtime string matching.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// The top-level container node, named `repo` in the document.
    #[serde(rename = "repo")]
    Group {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
        #[serde(default)]
        values: Vec<Node>,
    },
    Separator {
        #[serde(default)]
        display: SeparatorDisplay,
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    RemoteDifference {
        #[serde(default)]
        remote_branch: Option<String>,
        #[serde(default)]
        display_if_uptodate: bool,
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
        #[serde(default)]
        values: Vec<Node>,
    },
    Name {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Ahead {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Behind {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    /// Alias of `difference`: a new, untracked file. Both names render the
    /// same `WorkingState::untracked` count; kept as two node kinds because
    /// the upstream config vocabulary exposes both.
    NewCommit {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Changed {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Staged {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Conflicts {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Difference {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    Stashed {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
    /// Addressable `MergeState` leaf. Not one of the upstream node kinds
    /// documented by name, but required so the "merge" label can appear as
    /// an ordinary sibling rather than a hardcoded prefix — see the
    /// `merge│master↑1│✖1` scenario.
    Merge {
        #[serde(default)]
        pre_format: String,
        #[serde(default)]
        post_format: String,
    },
}

/// Walk the tree and translate named color tokens in every `pre_format` /
/// `post_format` into ANSI escapes. Done once while building the tree, never
/// inside the evaluator, which only ever concatenates opaque strings.
pub fn translate_colors(document: &mut ConfigDocument) {
    for node in &mut document.values {
        translate_node(node);
    }
}

fn translate_node(node: &mut Node) {
    match node {
        Node::Group {
            pre_format,
            post_format,
            values,
        }
        | Node::RemoteDifference {
            pre_format,
            post_format,
            values,
            ..
        } => {
            *pre_format = super::color::translate(pre_format);
            *post_format = super::color::translate(post_format);
            for child in values {
                translate_node(child);
            }
        }
        Node::Separator {
            pre_format, post_format, ..
        }
        | Node::Name {
            pre_format, post_format, ..
        }
        | Node::Ahead {
            pre_format, post_format, ..
        }
        | Node::Behind {
            pre_format, post_format, ..
        }
        | Node::NewCommit {
            pre_format, post_format, ..
        }
        | Node::Changed {
            pre_format, post_format, ..
        }
        | Node::Staged {
            pre_format, post_format, ..
        }
        | Node::Conflicts {
            pre_format, post_format, ..
        }
        | Node::Difference {
            pre_format, post_format, ..
        }
        | Node::Stashed {
            pre_format, post_format, ..
        }
        | Node::Merge {
            pre_format, post_format, ..
        } => {
            *pre_format = super::color::translate(pre_format);
            *post_format = super::color::translate(post_format);
        }
    }
}
