mod utils;

use crate::utils::*;

use anyhow::{Context, Result};
use clap::Parser;
use racko_common::{
    game::{DEFAULT_RACK_SIZE, Game},
    moves::{apply_move, describe_move, format_moves},
};
use racko_solver::DEFAULT_MAX_STATES;

use std::{
    io::{IsTerminal, Read, stdin},
    path::PathBuf,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Seed for a reproducible shuffle (random otherwise)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Number of rack slots
    #[arg(short, long, default_value_t = DEFAULT_RACK_SIZE, value_name = "NUM")]
    rack_size: usize,
    /// Max states to explore
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_STATES, value_name = "NUM")]
    max_states: u32,
    /// Preview the initial layout without solving
    #[arg(short, long)]
    preview: bool,
    /// Describe each move of the solution step by step
    #[arg(short, long)]
    describe: bool,
    /// Path to a game layout file to solve
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let Cli {
        seed,
        rack_size,
        max_states,
        preview,
        describe,
        file,
    } = Cli::parse();

    let game = if let Some(file) = file {
        let content = std::fs::read_to_string(file)?;
        Game::parse(&content).context("Failed to parse layout")?
    } else if !stdin().is_terminal() {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Game::parse(&content).context("Failed to parse layout")?
    } else {
        let seed = seed.unwrap_or(rand::random());
        println!("Seed: {seed}");
        Game::new_from_seed(seed, rack_size)?
    };
    if preview {
        println!("{}", game.to_pretty_string());
        return Ok(());
    }

    let moves = do_solve(&game, max_states)?;
    println!("{}", format_moves(&moves));

    if describe {
        let mut replayed = game;
        for mov in &moves {
            println!("{}", describe_move(&replayed, mov));
            apply_move(&mut replayed, mov);
        }
        println!("\n{}", replayed.to_pretty_string());
    }

    Ok(())
}
