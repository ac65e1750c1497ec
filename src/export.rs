//! Export of built search trees for external analysis
//!
//! Two formats: the whole tree as JSON (children referenced by arena index,
//! so the structure survives a round-trip), and a flat per-node CSV table
//! for spreadsheet-style inspection.

use std::{fs::File, io::BufWriter, path::Path};

use crate::{Result, search::SearchTree};

/// Write the whole tree as pretty-printed JSON.
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn write_tree_json(tree: &SearchTree, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), tree)?;
    Ok(())
}

/// Write one CSV row per materialized node.
///
/// Columns: id, depth, move, maximizing, value, terminal, wins, losses,
/// draws, board (nine-character encoding).
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn write_nodes_csv(tree: &SearchTree, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "id",
        "depth",
        "move",
        "maximizing",
        "value",
        "terminal",
        "wins",
        "losses",
        "draws",
        "board",
    ])?;

    for (id, node) in tree.iter() {
        let square = node
            .square
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let terminal = node
            .terminal
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "none".to_string());

        writer.write_record([
            id.index().to_string(),
            node.depth.to_string(),
            square,
            node.is_maximizing.to_string(),
            node.value.to_string(),
            terminal,
            node.wins.to_string(),
            node.losses.to_string(),
            node.draws.to_string(),
            node.board.encode(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{SearchConfig, analyze_terminal},
        tictactoe::Board,
    };

    fn analyzed_tree() -> SearchTree {
        let board = Board::from_string("OO.XX....").unwrap();
        let mut tree = SearchTree::build(&board, &SearchConfig::default()).unwrap();
        analyze_terminal(&mut tree);
        tree
    }

    #[test]
    fn test_json_roundtrip_through_a_file() {
        let tree = analyzed_tree();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");

        write_tree_json(&tree, &path).unwrap();
        let restored: SearchTree =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(tree, restored);
    }

    #[test]
    fn test_csv_has_one_row_per_node() {
        let tree = analyzed_tree();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.csv");

        write_nodes_csv(&tree, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), tree.len() + 1);
        assert!(lines[0].starts_with("id,depth,move"));
        // Root row: no producing move.
        assert!(lines[1].contains(",-,"));
    }
}
