use thiserror::Error;

use crate::{NodeId, String};

/// Errors reported by tree operations.
///
/// A failed operation never leaves a partial mutation behind: every check
/// runs before the first node is relinked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("child index {index} out of range for a node with {count} children")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("child range {start}..={stop} out of range for a node with {count} children")]
    RangeOutOfRange {
        start: usize,
        stop: usize,
        count: usize,
    },

    #[error("node has no parent to be positioned in")]
    NoParent,

    #[error("a nil list node cannot be placed as a single child")]
    NilChild,

    #[error("a node cannot be its own child")]
    SelfChild,

    #[error("attaching this node would make it its own ancestor")]
    Cycle,

    #[error("node has no token to update")]
    NoToken,

    #[error("more than one node as root: nil root has {children} children, expected exactly 1")]
    MalformedRoot { children: usize },

    #[error("error nodes can only be created while parsing tokens, not while walking a tree")]
    TreeStreamErrorNode,

    #[error("inconsistent tree at {node:?}: {reason}")]
    Inconsistent { node: NodeId, reason: String },
}

/// Coarse classification of [`TreeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    InvalidArgument,
    MalformedRoot,
    Misuse,
    Inconsistent,
}

impl TreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfRange { .. } | Self::RangeOutOfRange { .. } | Self::NoParent => {
                ErrorKind::OutOfRange
            }
            Self::NilChild | Self::SelfChild | Self::Cycle | Self::NoToken => {
                ErrorKind::InvalidArgument
            }
            Self::MalformedRoot { .. } => ErrorKind::MalformedRoot,
            Self::TreeStreamErrorNode => ErrorKind::Misuse,
            Self::Inconsistent { .. } => ErrorKind::Inconsistent,
        }
    }
}

pub type Result<T, E = TreeError> = core::result::Result<T, E>;
