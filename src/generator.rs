/*
generator.rs

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

//! Generate mazes, and place items and hazards in them.
//!
//! The generation is done in three steps:
//!
//! * A [`grid::Grid`] with a wall frame is divided into a maze.
//!   You create the maze by creating a [`division::MazeGenerator`] object and by using its
//!   [`division::MazeGenerator::generate`] method.
//!   The method recursively divides the grid in [`chamber::Chamber`] regions, and ensures that
//!   all the path cells are connected.
//!
//! * Items are placed in the corridors of the finished maze.
//!   You create a [`treasures::TreasureDistributor`] object and use its
//!   [`treasures::TreasureDistributor::distribute`] method to get the item positions.
//!   If no valid cell is found after too many attempts, then the method returns an error.
//!
//! * Hazards are placed next to the items, by using the [`hazards::HazardPlacer::place`]
//!   method.
//!   The [`motion`] module describes how the hazards move during the game.
//!
//! All the randomness comes from the [`rand::Rng`] object provided by the caller, so that a
//! seeded generator always produces the same maze.

pub mod chamber;
pub mod division;
pub mod grid;
pub mod hazards;
pub mod motion;
pub mod treasures;
