/*
lib.rs

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

//! Procedural maze generation with items and hazards.
//!
//! The library generates a square maze by recursive division, distributes collectible items
//! in its corridors, and places hazards that guard the items.
//! See the [`generator`] module for the details of each step, and the [`game::Game`] object
//! that groups the results for a game in progress.

pub mod errors;
pub mod game;
pub mod generator;

use rand::Rng;

use errors::MazeError;
use generator::division::MazeGenerator;
use generator::grid::{Grid, Position};
use generator::hazards::{Axis, Hazard, HazardPlacer};
use generator::treasures::TreasureDistributor;

/// Generate a maze of the given size.
///
/// # Errors
///
/// Returns [`MazeError::InvalidSize`] when the size is not an odd number between 11 and 59.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Grid, MazeError> {
    MazeGenerator::new(size)?.generate(rng)
}

/// Return the item positions for the given maze.
///
/// # Errors
///
/// Returns [`MazeError::PlacementExhaustion`] when a super-cell has no valid cell.
pub fn distribute_items<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> Result<Vec<Position>, MazeError> {
    TreasureDistributor::new(grid).distribute(rng)
}

/// Return the hazard positions and directions for the given items.
pub fn place_hazards(grid: &Grid, items: &[Position]) -> Vec<(Position, Axis)> {
    HazardPlacer::new(grid)
        .place(items)
        .iter()
        .map(|h: &Hazard| (h.position, h.axis))
        .collect()
}
