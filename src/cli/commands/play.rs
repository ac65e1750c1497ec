//! Play an interactive terminal game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use crate::{
    cli::output,
    search::{SearchConfig, TreeSummary, decide_with_config},
    tictactoe::{Game, GameOutcome, Player, Square},
};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Print search tree statistics after every computer move
    #[arg(long)]
    pub show_tree: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();
    let config = SearchConfig::default();

    println!("You are X and move first. Enter moves as ROW COL (each 0-2).");
    println!("'n' starts a new game, 'q' quits.");

    loop {
        println!();
        output::print_board(game.board());

        if let Some(outcome) = game.outcome() {
            match outcome {
                GameOutcome::Win(Player::Human) => println!("\nYou win."),
                GameOutcome::Win(Player::Computer) => println!("\nThe computer wins."),
                GameOutcome::Draw => println!("\nDraw."),
            }
            print!("play again? (n = new game, q = quit)> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            match line?.trim() {
                "n" | "new" => game.reset(),
                _ => break,
            }
            continue;
        }

        match game.to_move() {
            Player::Human => {
                print!("your move> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else { break };
                let line = line?;
                let input = line.trim();
                match input {
                    "q" | "quit" => break,
                    "n" | "new" => game.reset(),
                    "" => {}
                    _ => match parse_square(input) {
                        Ok(square) => {
                            if let Err(err) = game.play(square) {
                                println!("{err}");
                            }
                        }
                        Err(message) => println!("{message}"),
                    },
                }
            }
            Player::Computer => {
                let (decision, tree) = decide_with_config(game.board(), &config)?;
                println!(
                    "computer plays {}: {} (value {})",
                    decision.square, decision.interpretation, decision.score
                );
                if args.show_tree {
                    output::print_move_table(&tree);
                    output::print_tree_summary(&TreeSummary::of(&tree));
                }
                game.play(decision.square)?;
            }
        }
    }

    Ok(())
}

fn parse_square(input: &str) -> Result<Square, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!("expected ROW COL, got '{input}'"));
    };

    let row: usize = row
        .parse()
        .map_err(|_| format!("'{row}' is not a row number"))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("'{col}' is not a column number"))?;

    Square::new(row, col).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        let square = parse_square("1 2").unwrap();
        assert_eq!((square.row(), square.col()), (1, 2));

        assert!(parse_square("3 0").is_err());
        assert!(parse_square("1").is_err());
        assert!(parse_square("a b").is_err());
    }
}
