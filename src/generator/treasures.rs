/*
treasures.rs

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

//! Distribute the items (treasures) in the maze.
//!
//! The inside of the maze is split into square super-cells of [`TREASURE_DENSITY`] cells, and
//! one item is placed in each super-cell.
//! The item cell is selected at random, and is accepted only if it matches the following rules:
//!
//! 1. The cell is not a wall.
//! 2. The cell has walls above and below, or on its left and right (the item is in a corridor).
//! 3. The four diagonal cells are walls (the item is not next to a junction or an opening).
//! 4. The cell is not within two cells of an item already placed.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::grid::{CellType, Grid, Position};
use crate::errors::MazeError;

/// Number of cells on each side of a super-cell.
pub const TREASURE_DENSITY: usize = 10;

/// Number of random cells tested in a super-cell before giving up.
pub const MAX_ATTEMPTS: usize = 10_000;

/// Minimum distance, on both axis, between two items.
const MIN_SPACING: usize = 3;

/// Collectible item.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Item {
    /// Cell of the item.
    pub position: Position,

    /// Whether the player collected the item.
    pub collected: bool,
}

impl Item {
    /// Create an [`Item`] object that is not collected yet.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            collected: false,
        }
    }
}

/// [`TreasureDistributor`] object.
pub struct TreasureDistributor<'a> {
    /// Finished maze.
    grid: &'a Grid,

    /// Offset of the first super-cell.
    padding: usize,

    /// Number of super-cells on each axis.
    per_row: usize,

    /// Number of random cells tested during the last distribution.
    pub attempts: usize,

    /// Duration in seconds of the last distribution.
    pub duration: f32,
}

impl<'a> TreasureDistributor<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        let size: usize = grid.size();
        let padding: usize = (size % TREASURE_DENSITY).saturating_sub(1);

        Self {
            grid,
            padding,
            per_row: (size - padding) / TREASURE_DENSITY,
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Number of items per row of super-cells. The total number of items is the square of
    /// that number.
    pub fn items_per_row(&self) -> usize {
        self.per_row
    }

    /// Select and return the item cells, super-cell by super-cell, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::PlacementExhaustion`] when no valid cell is found in a super-cell
    /// after [`MAX_ATTEMPTS`] attempts.
    pub fn distribute<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Position>, MazeError> {
        self.attempts = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        let mut items: Vec<Position> = Vec::with_capacity(self.per_row * self.per_row);
        for i in 0..self.per_row {
            for j in 0..self.per_row {
                let res: Result<Position, MazeError> = self.random_location(i, j, &items, rng);
                match res {
                    Ok(p) => {
                        debug!("Item {} in super-cell ({i}, {j}) at {p}", items.len());
                        items.push(p);
                    }
                    Err(e) => {
                        self.duration = start.elapsed().as_secs_f32();
                        return Err(e);
                    }
                }
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Items = {}  Attempts = {}  Duration = {}",
            items.len(),
            self.attempts,
            self.duration
        );
        Ok(items)
    }

    /// Return the first and last index covered by a super-cell, clamped to the inside of the
    /// maze.
    fn bounds(&self, index: usize) -> (usize, usize) {
        let first: usize = self.padding + index * TREASURE_DENSITY;
        let last: usize = first + TREASURE_DENSITY;

        (first.max(1), last.min(self.grid.size() - 2))
    }

    /// Select a random cell in the super-cell that matches the placement rules.
    fn random_location<R: Rng + ?Sized>(
        &mut self,
        i: usize,
        j: usize,
        placed: &[Position],
        rng: &mut R,
    ) -> Result<Position, MazeError> {
        let (min_row, max_row) = self.bounds(i);
        let (min_col, max_col) = self.bounds(j);

        for _ in 0..MAX_ATTEMPTS {
            self.attempts += 1;
            let p: Position = Position::new(
                rng.random_range(min_row..=max_row),
                rng.random_range(min_col..=max_col),
            );
            if is_valid_location(self.grid, p, placed) {
                return Ok(p);
            }
        }
        Err(MazeError::PlacementExhaustion {
            row: i,
            col: j,
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Whether an item can be placed at the given position.
pub fn is_valid_location(grid: &Grid, p: Position, placed: &[Position]) -> bool {
    if grid.is_wall(p) {
        return false;
    }

    let wall = |dr: isize, dc: isize| grid.neighbor(p, dr, dc) == CellType::Wall;

    // In a corridor
    if !((wall(-1, 0) && wall(1, 0)) || (wall(0, -1) && wall(0, 1))) {
        return false;
    }

    // Away from openings
    if !(wall(-1, -1) && wall(-1, 1) && wall(1, -1) && wall(1, 1)) {
        return false;
    }

    // Away from the other items
    !placed
        .iter()
        .any(|o| o.row.abs_diff(p.row) < MIN_SPACING && o.col.abs_diff(p.col) < MIN_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::division::MazeGenerator;
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

    #[test]
    fn super_cell_layout_follows_the_size() {
        let g43: Grid = Grid::new(43).unwrap();
        let d: TreasureDistributor = TreasureDistributor::new(&g43);
        assert_eq!(d.padding, 2);
        assert_eq!(d.items_per_row(), 4);
        assert_eq!(d.bounds(0), (2, 12));
        assert_eq!(d.bounds(3), (32, 41));

        let g11: Grid = Grid::new(11).unwrap();
        let d: TreasureDistributor = TreasureDistributor::new(&g11);
        assert_eq!(d.padding, 0);
        assert_eq!(d.items_per_row(), 1);
        assert_eq!(d.bounds(0), (1, 9));

        let g59: Grid = Grid::new(59).unwrap();
        let d: TreasureDistributor = TreasureDistributor::new(&g59);
        assert_eq!(d.padding, 8);
        assert_eq!(d.items_per_row(), 5);
    }

    #[test]
    fn location_rules() {
        let grid: Grid = CORRIDORS.parse().unwrap();

        // Wall
        assert!(!is_valid_location(&grid, Position::new(2, 4), &[]));
        // Horizontal corridor, walls on the diagonals
        assert!(is_valid_location(&grid, Position::new(1, 4), &[]));
        // Vertical corridor
        assert!(is_valid_location(&grid, Position::new(7, 3), &[]));
        // Corridor end, opening on the diagonal
        assert!(!is_valid_location(&grid, Position::new(3, 2), &[]));
        // Junction
        assert!(!is_valid_location(&grid, Position::new(9, 3), &[]));
        // Too close to another item
        assert!(!is_valid_location(
            &grid,
            Position::new(1, 4),
            &[Position::new(3, 6)]
        ));
        assert!(is_valid_location(
            &grid,
            Position::new(1, 4),
            &[Position::new(1, 7)]
        ));
    }

    #[test]
    fn items_follow_the_rules() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let grid: Grid = MazeGenerator::new(43).unwrap().generate(&mut rng).unwrap();
        let mut d: TreasureDistributor = TreasureDistributor::new(&grid);
        let items: Vec<Position> = d.distribute(&mut rng).unwrap();

        assert_eq!(items.len(), 16);
        assert!(d.attempts >= 16);
        for (i, p) in items.iter().enumerate() {
            assert!(is_valid_location(&grid, *p, &items[..i]));
        }
    }

    #[test]
    fn sealed_maze_exhausts_the_attempts() {
        let text: String = vec!["#".repeat(11); 11].join("\n");
        let grid: Grid = text.parse().unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(0);

        assert_eq!(
            TreasureDistributor::new(&grid).distribute(&mut rng),
            Err(MazeError::PlacementExhaustion {
                row: 0,
                col: 0,
                attempts: MAX_ATTEMPTS
            })
        );
    }
}
