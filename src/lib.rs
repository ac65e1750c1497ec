//! oxo - perfect-play noughts and crosses (tic-tac-toe) engine
//!
//! This crate provides:
//! - Immutable 3x3 board values with pure position queries
//! - Exhaustive minimax evaluation with no pruning and no caching
//! - A search tree materialized fresh for every decision, for inspection
//!   and visualization by a presentation layer
//! - Terminal-outcome aggregation over the tree and a first-maximum
//!   decision policy
//! - A terminal CLI for playing against the engine and analyzing positions

pub mod cli;
pub mod error;
pub mod export;
pub mod search;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use search::{
    DecisionResult, Interpretation, Materialization, SearchConfig, SearchNode, SearchTree,
    TerminalCounts, TerminalKind, TreeSummary, analyze_terminal, decide, decide_with_config,
    evaluate,
};
pub use tictactoe::{Board, Cell, Game, GameOutcome, PlayedMove, Player, Square};
pub use types::{DRAW_VALUE, LOSS_VALUE, NodeId, Score, WIN_VALUE};
