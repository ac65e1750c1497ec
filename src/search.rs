//! Game-tree search: exhaustive minimax plus an inspectable decision tree

pub mod analysis;
pub mod config;
pub mod decision;
pub mod minimax;
pub mod tree;

pub use analysis::{TerminalCounts, TreeSummary, analyze_terminal};
pub use config::{Materialization, SearchConfig};
pub use decision::{DecisionResult, Interpretation, decide, decide_with_config};
pub use minimax::evaluate;
pub use tree::{SearchNode, SearchTree, TerminalKind};
