//! List error types
//!
//! [`ListError`] covers two kinds of failure:
//! - a caller passed a handle that does not name a live node ([`ListError::InvalidNode`])
//! - [`super::DoubleLinkedList::validate`] found a broken structural invariant
//!
//! The operations themselves keep the invariants, so the second group only shows
//! up if a bug corrupts the links.

use crate::memory::{ArenaError, NodeId};
use thiserror::Error;

/// Which link of a node an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    Prev,
    Next,
}

impl std::fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkDirection::Prev => write!(f, "prev"),
            LinkDirection::Next => write!(f, "next"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Handle is unknown or refers to a removed node
    #[error(transparent)]
    InvalidNode(#[from] ArenaError),

    /// `a.next == b` without `b.prev == a` (or the reverse)
    #[error("Broken link: {node}.{direction} points at {target}, which does not point back")]
    BrokenLink {
        node: NodeId,
        direction: LinkDirection,
        target: NodeId,
    },

    /// Following links revisited a node
    #[error("Cycle detected: node {node} reached twice while walking {direction} links")]
    Cycle {
        node: NodeId,
        direction: LinkDirection,
    },

    /// Exactly one of first/last is set
    #[error("Inconsistent ends: first is {first:?} but last is {last:?}")]
    EmptinessMismatch {
        first: Option<NodeId>,
        last: Option<NodeId>,
    },

    /// The walk reached a different number of nodes than the list holds
    #[error("Length mismatch: list holds {expected} nodes, walk reached {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// An end node links outward past the end of the list
    #[error("Dangling end: {node}.{direction} should be NULL but points at {target}")]
    DanglingEnd {
        node: NodeId,
        direction: LinkDirection,
        target: NodeId,
    },

    /// The walk ran out of links before reaching the opposite end
    #[error("Walking {direction} links stopped at {reached} instead of the list end")]
    EndNotReached {
        reached: NodeId,
        direction: LinkDirection,
    },
}
