//! Analyze a position: decision, per-move evaluations, tree statistics

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    cli::output,
    export,
    search::{Materialization, SearchConfig, TreeSummary, decide_with_config},
    tictactoe::Board,
};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Position as nine cell characters, row-major: '.' empty, 'X' human, 'O' computer
    pub board: String,

    /// Materialize every explored ply instead of only the computer's immediate moves
    #[arg(long)]
    pub full: bool,

    /// Write the evaluated tree as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the evaluated nodes as a CSV table
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("cannot parse board '{}'", args.board))?;

    let materialization = if args.full {
        Materialization::Full
    } else {
        Materialization::TopMoves
    };
    let config = SearchConfig::new().with_materialization(materialization);

    let (decision, tree) =
        decide_with_config(&board, &config).context("nothing to decide from this position")?;

    output::print_section("Position (computer to move)");
    output::print_board(&board);

    output::print_section("Decision");
    output::print_kv("move", &decision.square.to_string());
    output::print_kv("value", &decision.score.to_string());
    output::print_kv("reading", &decision.interpretation.to_string());

    output::print_section("Move evaluations");
    output::print_move_table(&tree);

    output::print_section("Search tree");
    output::print_tree_summary(&TreeSummary::of(&tree));

    if let Some(path) = args.json {
        export::write_tree_json(&tree, &path)?;
        println!("\ntree written to {}", path.display());
    }
    if let Some(path) = args.csv {
        export::write_nodes_csv(&tree, &path)?;
        println!("\nnode table written to {}", path.display());
    }

    Ok(())
}
