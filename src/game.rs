/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the maze, the items and the hazards.
//! The presentation layer reads it, reports the items that the player collects, and ticks the
//! hazard cycle at its own pace.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::errors::MazeError;
use crate::generator::division::MazeGenerator;
use crate::generator::grid::{Grid, Position};
use crate::generator::hazards::{Hazard, HazardPlacer};
use crate::generator::motion::{HazardCycle, HazardMotion};
use crate::generator::treasures::{Item, TreasureDistributor};

/// Manage the status of the game in progress.
#[derive(Serialize, Debug, Clone)]
pub struct Game {
    /// Maze.
    pub grid: Grid,

    /// Items to collect.
    pub items: Vec<Item>,

    /// Hazards guarding the items.
    pub hazards: Vec<Hazard>,

    /// Movement status of each hazard, in the order of [`Game::hazards`].
    #[serde(skip)]
    motions: Vec<HazardMotion>,

    /// Phase shared by all the hazards.
    #[serde(skip)]
    cycle: HazardCycle,
}

impl Game {
    /// Generate a new maze of the given size with its items and hazards.
    ///
    /// # Errors
    ///
    /// Returns the errors from the maze generator or from the item distributor.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, MazeError> {
        let grid: Grid = MazeGenerator::new(size)?.generate(rng)?;
        let positions: Vec<Position> = TreasureDistributor::new(&grid).distribute(rng)?;
        Ok(Self::from_parts(grid, &positions))
    }

    /// Create a game from a finished maze and item positions. Hazards are computed.
    pub fn from_parts(grid: Grid, positions: &[Position]) -> Self {
        let hazards: Vec<Hazard> = HazardPlacer::new(&grid).place(positions);
        debug!(
            "New game: {} items, {} hazards",
            positions.len(),
            hazards.len()
        );
        Self {
            items: positions.iter().map(|p| Item::new(*p)).collect(),
            motions: hazards.iter().map(HazardMotion::new).collect(),
            hazards,
            grid,
            cycle: HazardCycle::new(),
        }
    }

    /// Collect the item at the given position, if any.
    ///
    /// Return whether an item has been collected.
    pub fn collect_at(&mut self, position: Position) -> bool {
        match self
            .items
            .iter_mut()
            .find(|i| i.position == position && !i.collected)
        {
            Some(item) => {
                item.collected = true;
                debug!("Item at {position} collected");
                true
            }
            None => false,
        }
    }

    /// Number of collected items.
    pub fn score(&self) -> usize {
        self.items.iter().filter(|i| i.collected).count()
    }

    /// Whether all the items have been collected.
    pub fn all_collected(&self) -> bool {
        self.items.iter().all(|i| i.collected)
    }

    /// Current phase of the hazard cycle.
    pub fn phase(&self) -> usize {
        self.cycle.phase()
    }

    /// Move the hazards to the next phase and return that phase.
    pub fn tick(&mut self) -> usize {
        let phase: usize = self.cycle.tick();

        for (hazard, motion) in self.hazards.iter().zip(self.motions.iter_mut()) {
            let collected: bool = self.items.get(hazard.item).is_some_and(|i| i.collected);
            motion.advance(phase, collected);
        }
        phase
    }

    /// Return the movement status of the hazard with the given index.
    pub fn motion(&self, hazard: usize) -> Option<&HazardMotion> {
        self.motions.get(hazard)
    }

    /// Whether a closed hazard occupies the given cell.
    ///
    /// Only the starting cell of each hazard is compared. The partial displacement returned by
    /// [`HazardMotion::displacement`] is ignored, so a presentation layer that needs exact
    /// collisions must combine the two.
    pub fn is_hazard_closed_at(&self, position: Position) -> bool {
        let phase: usize = self.cycle.phase();

        self.hazards
            .iter()
            .zip(self.motions.iter())
            .any(|(h, m)| h.position == position && m.is_closed(phase))
    }
}

/// ASCII representation: items are `$` and hazards show their direction.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size: usize = self.grid.size();
        let mut lines: Vec<Vec<char>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.grid.cell_at(row, col).symbol())
                    .collect()
            })
            .collect();

        let marks = self
            .items
            .iter()
            .filter(|i| !i.collected)
            .map(|i| (i.position, '$'))
            .chain(self.hazards.iter().map(|h| (h.position, h.axis.symbol())));
        for (p, symbol) in marks {
            if let Some(c) = lines.get_mut(p.row).and_then(|l| l.get_mut(p.col)) {
                *c = symbol;
            }
        }

        let text: Vec<String> = lines.iter().map(|l| l.iter().collect()).collect();
        write!(f, "{}", text.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::hazards::Axis;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CORRIDORS: &str = "\
###########
#.........#
###########
#.........#
#.#######.#
#.........#
###########
#.#.#.#.#.#
#.#.#.#.#.#
#.........#
###########";

    fn game() -> Game {
        let grid: Grid = CORRIDORS.parse().unwrap();
        Game::from_parts(grid, &[Position::new(1, 3), Position::new(7, 5)])
    }

    #[test]
    fn hazards_are_computed_from_the_items() {
        let g: Game = game();

        assert_eq!(g.items.len(), 2);
        assert_eq!(g.hazards.len(), 2);
        assert_eq!(g.hazards[0].axis, Axis::Right);
        assert_eq!(g.hazards[0].position, Position::new(1, 4));
        assert_eq!(g.hazards[1].axis, Axis::Down);
        assert_eq!(g.hazards[1].position, Position::new(8, 5));
    }

    #[test]
    fn collecting_items() {
        let mut g: Game = game();

        assert!(!g.collect_at(Position::new(2, 2)));
        assert!(g.collect_at(Position::new(1, 3)));
        assert!(!g.collect_at(Position::new(1, 3)));
        assert_eq!(g.score(), 1);
        assert!(!g.all_collected());
        assert!(g.collect_at(Position::new(7, 5)));
        assert!(g.all_collected());
    }

    #[test]
    fn hazards_park_after_collection() {
        let mut g: Game = game();

        assert!(g.is_hazard_closed_at(Position::new(1, 4)));
        g.collect_at(Position::new(1, 3));
        for _ in 0..crate::generator::motion::PHASES {
            g.tick();
        }
        assert_eq!(g.phase(), 0);
        assert!(g.motion(0).unwrap().is_parked());
        assert!(!g.motion(1).unwrap().is_parked());
        assert!(!g.is_hazard_closed_at(Position::new(1, 4)));
        assert!(g.is_hazard_closed_at(Position::new(8, 5)));
    }

    #[test]
    fn closed_hazard_is_reported_on_its_starting_cell_only() {
        let mut g: Game = game();

        // Phase 2: closed, and already moved by a quarter of a cell
        g.tick();
        g.tick();
        assert_eq!(g.motion(0).unwrap().displacement(), (0, 1));
        assert!(g.is_hazard_closed_at(Position::new(1, 4)));
        assert!(!g.is_hazard_closed_at(Position::new(1, 5)));
    }

    #[test]
    fn display_shows_items_and_hazards() {
        let mut g: Game = game();
        let text: String = g.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "#..$>.....#");
        assert_eq!(lines[8], "#.#.#v#.#.#");

        g.collect_at(Position::new(1, 3));
        assert!(g.to_string().starts_with("###########\n#...>.....#"));
    }

    #[test]
    fn new_game_is_reproducible() {
        let a: Game = Game::new(43, &mut StdRng::seed_from_u64(2025)).unwrap();
        let b: Game = Game::new(43, &mut StdRng::seed_from_u64(2025)).unwrap();

        assert_eq!(a.grid, b.grid);
        assert_eq!(a.items, b.items);
        assert_eq!(a.hazards, b.hazards);
        assert_eq!(a.score(), 0);
    }

    #[test]
    fn invalid_size_is_reported() {
        let res: Result<Game, MazeError> = Game::new(42, &mut StdRng::seed_from_u64(0));

        assert_eq!(res.err(), Some(MazeError::InvalidSize(42)));
    }
}
