/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Fortune Maze.

Fortune Maze is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Fortune Maze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Fortune Maze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The command generates mazes and prints them, with their items and hazards, so that
//! developers can review the generator output.
//!
//! # Examples
//!
//! Generate a small maze from a given seed:
//!
//! ```text
//! $ fortune-maze --seed 7 --size 11
//! ```
//!
//! Generate ten mazes and print some statistics:
//!
//! ```text
//! $ fortune-maze -c 10 --summary
//! ```

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

use fortune_maze::errors::MazeError;
use fortune_maze::game::Game;
use fortune_maze::generator::division::MazeGenerator;
use fortune_maze::generator::grid::{Grid, Position};
use fortune_maze::generator::treasures::TreasureDistributor;

const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Size of the maze in the game.
const DEFAULT_SIZE: usize = 43;

/// Generate random Fortune Maze layouts.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of rows and columns of the maze (odd number between 11 and 59)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the random generator (a random seed is used by default)
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the mazes in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the mazes
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Statistics for one generated maze.
struct RunStats {
    chambers: usize,
    attempts: usize,
    items: usize,
    hazards: usize,
    duration: f32,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Seed = {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    let mut stats: Vec<RunStats> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        debug!("Maze {i}");

        let (game, run) = match build(args.size, &mut rng) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        };

        if args.json {
            match serde_json::to_string(&game) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Error: cannot serialize the maze: {e}");
                    return 1;
                }
            }
        } else {
            if i > 0 {
                println!();
            }
            println!("{game}");
        }
        stats.push(run);
    }

    if args.summary && !stats.is_empty() {
        print_summary(seed, &stats);
    }
    0
}

/// Generate a maze with its items and hazards, and collect the statistics.
fn build(size: usize, rng: &mut StdRng) -> Result<(Game, RunStats), MazeError> {
    let mut generator: MazeGenerator = MazeGenerator::new(size)?;
    let grid: Grid = generator.generate(rng)?;

    let mut distributor: TreasureDistributor = TreasureDistributor::new(&grid);
    let positions: Vec<Position> = distributor.distribute(rng)?;
    let attempts: usize = distributor.attempts;
    let duration: f32 = generator.duration + distributor.duration;

    let game: Game = Game::from_parts(grid, &positions);
    let run: RunStats = RunStats {
        chambers: generator.iteration,
        attempts,
        items: game.items.len(),
        hazards: game.hazards.len(),
        duration,
    };
    Ok((game, run))
}

fn print_summary(seed: u64, stats: &[RunStats]) {
    let count: usize = stats.len();
    let total: f32 = stats.iter().map(|s| s.duration).sum();
    let max: f32 = stats.iter().map(|s| s.duration).fold(0.0, f32::max);
    let chambers: usize = stats.iter().map(|s| s.chambers).sum();
    let attempts: usize = stats.iter().map(|s| s.attempts).sum();
    let items: usize = stats.iter().map(|s| s.items).sum();
    let hazards: usize = stats.iter().map(|s| s.hazards).sum();

    eprintln!(
        "
              seed = {}
        total time = {}s
      average time = {}s
          max time = {}s
  average chambers = {}
  average attempts = {}
     average items = {}
   average hazards = {}",
        seed,
        total,
        total / count as f32,
        max,
        chambers / count,
        attempts / count,
        items as f32 / count as f32,
        hazards as f32 / count as f32
    );
}
