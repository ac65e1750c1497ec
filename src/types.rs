//! Newtype wrappers and value constants shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backed-up minimax value of a position.
///
/// Always one of [`WIN_VALUE`], [`LOSS_VALUE`], or [`DRAW_VALUE`]; the game is
/// small enough that no finer-grained evaluation exists.
pub type Score = i8;

/// Value of a position the computer is guaranteed to win.
pub const WIN_VALUE: Score = 1;

/// Value of a position the human is guaranteed to win.
pub const LOSS_VALUE: Score = -1;

/// Value of a position where perfect play from both sides draws.
pub const DRAW_VALUE: Score = 0;

/// Index of a node inside a [`SearchTree`] arena.
///
/// Nodes are owned by the tree and reference their children by `NodeId`
/// rather than by pointer, so a tree can be traversed, serialized, and
/// compared without lifetime bookkeeping. Ids are only meaningful within the
/// tree that issued them.
///
/// [`SearchTree`]: crate::search::SearchTree
///
/// # Examples
///
/// ```
/// use oxo::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Id of the root node in every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a node id from a raw arena index.
    pub fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the arena index this id refers to.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_roundtrip() {
        let id = NodeId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(usize::from(id), 7);
        assert_eq!(id.to_string(), "#7");
    }

    #[test]
    fn test_root_is_zero() {
        assert_eq!(NodeId::ROOT.index(), 0);
    }

    #[test]
    fn test_score_constants_span_the_value_range() {
        assert_eq!(WIN_VALUE, 1);
        assert_eq!(DRAW_VALUE, 0);
        assert_eq!(LOSS_VALUE, -1);
    }
}
