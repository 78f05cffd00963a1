/*
errors.rs

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

//! Errors raised while building a maze and its contents.

use thiserror::Error;

use crate::generator::grid::{MAX_SIZE, MIN_SIZE};

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The requested maze size is out of range or even.
    #[error("invalid maze size {0}: expected an odd number between {min} and {max}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(usize),

    /// The recursive division reached a chamber it does not know how to divide.
    ///
    /// Every chamber has odd dimensions when the grid size is valid, so this error denotes a
    /// bug in the generator.
    #[error("chamber {height}x{width} at ({row}, {col}) cannot be divided")]
    DegenerateChamber {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// No cell satisfying the placement rules was found in a super-cell.
    #[error("no item cell found in super-cell ({row}, {col}) after {attempts} attempts")]
    PlacementExhaustion {
        row: usize,
        col: usize,
        attempts: usize,
    },

    /// The ASCII representation of a grid cannot be read.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
