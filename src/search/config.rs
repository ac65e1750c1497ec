//! Search configuration

/// How much of the explored game tree to materialize as nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialization {
    /// Root plus one node per immediate computer move (two levels). The
    /// exhaustive recursion below depth 1 contributes backed-up values only.
    /// This keeps the visualized tree legible: at most ten nodes per
    /// decision.
    #[default]
    TopMoves,
    /// Materialize every explored ply. Legibility trades against size: an
    /// early-game decision can produce hundreds of thousands of nodes.
    Full,
}

/// Configuration for building a decision's search tree.
///
/// # Examples
///
/// ```
/// use oxo::{Materialization, SearchConfig};
///
/// let config = SearchConfig::new().with_materialization(Materialization::Full);
/// assert_eq!(config.materialization, Materialization::Full);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    /// Tree materialization depth
    pub materialization: Materialization,
}

impl SearchConfig {
    /// Create a configuration with the two-level default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the materialization depth
    pub fn with_materialization(mut self, materialization: Materialization) -> Self {
        self.materialization = materialization;
        self
    }
}
