//! Search tree materialization
//!
//! A [`SearchTree`] is built fresh for every decision and discarded at the
//! next one. Nodes live in an arena owned by the tree and reference their
//! children by [`NodeId`], preserving move-enumeration order, so the tree
//! can be walked, serialized, and rendered without any pointer chasing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    search::{
        config::{Materialization, SearchConfig},
        minimax::evaluate,
    },
    tictactoe::{Board, Player, Square},
    types::{DRAW_VALUE, LOSS_VALUE, NodeId, Score, WIN_VALUE},
};

/// Terminal classification of a leaf node, assigned by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalKind {
    /// The computer has three in a row
    Win,
    /// The human has three in a row
    Loss,
    /// Full board, no winner
    Draw,
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalKind::Win => write!(f, "win"),
            TerminalKind::Loss => write!(f, "loss"),
            TerminalKind::Draw => write!(f, "draw"),
        }
    }
}

/// One explored position in the visualized tree.
///
/// `wins`, `losses`, and `draws` count terminal leaves in the subtree rooted
/// here; they are zero until [`analyze_terminal`] runs over the tree.
///
/// [`analyze_terminal`]: crate::search::analyze_terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNode {
    /// Board snapshot at this node
    pub board: Board,
    /// Backed-up minimax value
    pub value: Score,
    /// Ply from the root (root = 0)
    pub depth: u8,
    /// True if this node is a computer choice point
    pub is_maximizing: bool,
    /// The move that produced this node from its parent; absent for the root
    pub square: Option<Square>,
    /// Children in move-enumeration (row-major) order
    pub children: Vec<NodeId>,
    /// Terminal classification, assigned by the analyzer
    pub terminal: Option<TerminalKind>,
    /// Computer wins among terminal leaves of this subtree
    pub wins: u32,
    /// Human wins among terminal leaves of this subtree
    pub losses: u32,
    /// Draws among terminal leaves of this subtree
    pub draws: u32,
}

impl SearchNode {
    fn new(board: Board, depth: u8, is_maximizing: bool, square: Option<Square>) -> Self {
        SearchNode {
            board,
            value: DRAW_VALUE,
            depth,
            is_maximizing,
            square,
            children: Vec::new(),
            terminal: None,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// True if this node has no materialized children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True if the analyzer classified this node as terminal
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }
}

/// An owned, rooted, acyclic forest of one tree per decision.
///
/// The root is always [`NodeId::ROOT`]. Positions repeating under different
/// move orders are materialized once per explored path, never deduplicated;
/// the structure is a strict tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Build the tree for a decision from `board`, computer to move.
    ///
    /// One child is materialized per legal move, in row-major enumeration
    /// order, carrying the move's backed-up minimax score. With the default
    /// [`Materialization::TopMoves`] the exhaustive recursion below depth 1
    /// contributes only values, not nodes; [`Materialization::Full`]
    /// materializes every ply instead.
    ///
    /// The root's `value` carries the chosen (maximum) child score once all
    /// moves are evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the position already has a
    /// winner or a full board, since there is nothing to decide.
    pub fn build(board: &Board, config: &SearchConfig) -> Result<SearchTree, crate::Error> {
        if board.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let mut nodes = vec![SearchNode::new(*board, 0, true, None)];
        let mut best: Option<Score> = None;

        for square in board.available_moves() {
            let next = board
                .with_mark(square, Player::Computer)
                .expect("move enumeration only yields empty squares");

            let child_id = match config.materialization {
                Materialization::TopMoves => {
                    let mut child = SearchNode::new(next, 1, false, Some(square));
                    child.value = evaluate(&next, Player::Human);
                    push_node(&mut nodes, child)
                }
                Materialization::Full => {
                    materialize(&mut nodes, next, Player::Human, 1, Some(square))
                }
            };

            let value = nodes[child_id.index()].value;
            nodes[NodeId::ROOT.index()].children.push(child_id);
            best = Some(best.map_or(value, |b: Score| b.max(value)));
        }

        let best = best.expect("a non-terminal position has at least one move");
        nodes[NodeId::ROOT.index()].value = best;

        Ok(SearchTree { nodes })
    }

    /// Id of the root node
    pub fn root_id(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The root node
    pub fn root(&self) -> &SearchNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Look up a node by id
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Number of materialized nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds no nodes (never the case for a built tree)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their ids, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i as u32), node))
    }

    /// Iterate over the children of a node, in sibling order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> {
        self.get(id)
            .children
            .iter()
            .map(move |&child| self.get(child))
    }
}

fn push_node(nodes: &mut Vec<SearchNode>, node: SearchNode) -> NodeId {
    let id = NodeId::new(nodes.len() as u32);
    nodes.push(node);
    id
}

/// Depth-first full materialization: every explored position becomes a node,
/// and values are backed up from materialized children instead of a separate
/// evaluation pass.
fn materialize(
    nodes: &mut Vec<SearchNode>,
    board: Board,
    to_move: Player,
    depth: u8,
    square: Option<Square>,
) -> NodeId {
    let id = push_node(nodes, SearchNode::new(board, depth, to_move.is_maximizing(), square));

    if let Some(winner) = board.winner() {
        nodes[id.index()].value = match winner {
            Player::Computer => WIN_VALUE,
            Player::Human => LOSS_VALUE,
        };
        return id;
    }
    if board.is_full() {
        nodes[id.index()].value = DRAW_VALUE;
        return id;
    }

    let mut best = if to_move.is_maximizing() {
        Score::MIN
    } else {
        Score::MAX
    };

    for square in board.available_moves() {
        let next = board
            .with_mark(square, to_move)
            .expect("move enumeration only yields empty squares");
        let child_id = materialize(nodes, next, to_move.opponent(), depth + 1, Some(square));
        let value = nodes[child_id.index()].value;
        best = if to_move.is_maximizing() {
            best.max(value)
        } else {
            best.min(value)
        };
        nodes[id.index()].children.push(child_id);
    }

    nodes[id.index()].value = best;
    id
}
