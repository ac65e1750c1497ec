//! Output formatting for the CLI

use crate::{
    search::{SearchTree, TreeSummary},
    tictactoe::Board,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{key}:"), value);
}

/// Print the board with row and column guides
pub fn print_board(board: &Board) {
    println!("    0 1 2");
    for (row, line) in board.to_string().lines().enumerate() {
        let spaced: String = line
            .chars()
            .map(|c| format!("{c} "))
            .collect::<String>()
            .trim_end()
            .to_string();
        println!("  {row} {spaced}");
    }
}

/// Print the evaluated root children as a per-move table
pub fn print_move_table(tree: &SearchTree) {
    println!("  {:10} {:>5}  {:>4} {:>4} {:>4}", "move", "value", "W", "L", "D");
    for child in tree.children(tree.root_id()) {
        let square = child.square.expect("root children record their move");
        println!(
            "  {:10} {:>5}  {:>4} {:>4} {:>4}",
            square.to_string(),
            child.value,
            child.wins,
            child.losses,
            child.draws,
        );
    }
}

/// Print aggregate statistics for an analyzed tree
pub fn print_tree_summary(summary: &TreeSummary) {
    print_kv("nodes", &summary.nodes.to_string());
    print_kv("max depth", &summary.max_depth.to_string());
    let per_depth: Vec<String> = summary
        .nodes_per_depth
        .iter()
        .enumerate()
        .map(|(depth, count)| format!("{depth}:{count}"))
        .collect();
    print_kv("per depth", &per_depth.join(" "));
    print_kv(
        "terminal W/L/D",
        &format!(
            "{}/{}/{}",
            summary.counts.wins, summary.counts.losses, summary.counts.draws
        ),
    );
}
