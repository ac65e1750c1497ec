//! Terminal classification and outcome aggregation over a materialized tree

use serde::{Deserialize, Serialize};

use crate::{
    search::tree::{SearchTree, TerminalKind},
    tictactoe::Player,
    types::NodeId,
};

/// Terminal-leaf counts for a subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TerminalCounts {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl TerminalCounts {
    /// Total number of terminal leaves counted
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Classify terminal leaves and aggregate win/loss/draw counts bottom-up.
///
/// Post-order over the materialized tree: a leaf is classified by its own
/// position (computer line → win, human line → loss, full board → draw,
/// otherwise non-terminal and counted as nothing); an internal node stores
/// the sum of its children's counts and is never itself marked terminal.
///
/// Only materialized nodes are visited. Under the default two-level
/// materialization this classifies the root's children, not the positions
/// the evaluator explored below them.
///
/// The pass is idempotent: re-running it on an unchanged tree reproduces
/// identical counts at every node.
pub fn analyze_terminal(tree: &mut SearchTree) -> TerminalCounts {
    analyze_node(tree, NodeId::ROOT)
}

fn analyze_node(tree: &mut SearchTree, id: NodeId) -> TerminalCounts {
    let children = tree.get(id).children.clone();

    let (kind, counts) = if children.is_empty() {
        classify_leaf(tree, id)
    } else {
        let mut total = TerminalCounts::default();
        for child in children {
            let child_counts = analyze_node(tree, child);
            total.wins += child_counts.wins;
            total.losses += child_counts.losses;
            total.draws += child_counts.draws;
        }
        (None, total)
    };

    let node = tree.get_mut(id);
    node.terminal = kind;
    node.wins = counts.wins;
    node.losses = counts.losses;
    node.draws = counts.draws;
    counts
}

fn classify_leaf(tree: &SearchTree, id: NodeId) -> (Option<TerminalKind>, TerminalCounts) {
    let board = &tree.get(id).board;
    match board.winner() {
        Some(Player::Computer) => (
            Some(TerminalKind::Win),
            TerminalCounts {
                wins: 1,
                ..Default::default()
            },
        ),
        Some(Player::Human) => (
            Some(TerminalKind::Loss),
            TerminalCounts {
                losses: 1,
                ..Default::default()
            },
        ),
        None if board.is_full() => (
            Some(TerminalKind::Draw),
            TerminalCounts {
                draws: 1,
                ..Default::default()
            },
        ),
        None => (None, TerminalCounts::default()),
    }
}

/// Aggregate statistics over a built (and analyzed) tree, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSummary {
    /// Total materialized nodes
    pub nodes: usize,
    /// Deepest materialized ply
    pub max_depth: u8,
    /// Node count per ply, index = depth
    pub nodes_per_depth: Vec<usize>,
    /// Root-level terminal counts from the most recent analysis pass
    pub counts: TerminalCounts,
}

impl TreeSummary {
    /// Summarize a tree.
    ///
    /// The win/loss/draw counts reflect the most recent [`analyze_terminal`]
    /// pass; on a tree that was never analyzed they are zero.
    pub fn of(tree: &SearchTree) -> Self {
        let max_depth = tree.iter().map(|(_, node)| node.depth).max().unwrap_or(0);
        let mut nodes_per_depth = vec![0usize; max_depth as usize + 1];
        for (_, node) in tree.iter() {
            nodes_per_depth[node.depth as usize] += 1;
        }

        let root = tree.root();
        TreeSummary {
            nodes: tree.len(),
            max_depth,
            nodes_per_depth,
            counts: TerminalCounts {
                wins: root.wins,
                losses: root.losses,
                draws: root.draws,
            },
        }
    }
}
