/*
chamber.rs

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

//! Rectangular region of the grid under division.
//!
//! A [`Chamber`] is a view over the [`Grid`]: an origin and a size.
//! Its border is owned by the caller (the parent chamber or the grid frame), and the division
//! algorithm only writes inside the chamber.
//! Neighboring chambers share their border row or column.
//!
//! Only the maze generator writes through a chamber. A finished grid cannot be changed from
//! outside the crate:
//!
//! ```compile_fail
//! use fortune_maze::generator::chamber::Chamber;
//! use fortune_maze::generator::grid::{CellType, Grid};
//!
//! let mut grid: Grid = Grid::new(11).unwrap();
//! Chamber::new(0, 0, 3, 3).set(&mut grid, 0, 0, CellType::Path);
//! ```

use super::grid::{CellType, Grid};

/// Side of a chamber.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Path cell on the border of a chamber.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entrance {
    /// Side of the chamber.
    pub side: Side,

    /// Column for the top and bottom sides, row for the left and right sides, relative to the
    /// chamber origin.
    pub offset: usize,
}

/// Chamber object.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Chamber {
    /// Grid row of the top left corner.
    pub row: usize,

    /// Grid column of the top left corner.
    pub col: usize,

    /// Number of rows, borders included.
    pub height: usize,

    /// Number of columns, borders included.
    pub width: usize,
}

impl Chamber {
    /// Create a [`Chamber`] object.
    pub fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// Chamber covering the whole grid.
    pub fn whole(grid: &Grid) -> Self {
        Self::new(0, 0, grid.size(), grid.size())
    }

    /// Return the cell at the given coordinates, relative to the chamber origin.
    pub fn cell(&self, grid: &Grid, row: usize, col: usize) -> CellType {
        grid.cell_at(self.row + row, self.col + col)
    }

    /// Change the cell at the given coordinates, relative to the chamber origin.
    pub(crate) fn set(&self, grid: &mut Grid, row: usize, col: usize, cell: CellType) {
        grid.set(self.row + row, self.col + col, cell);
    }

    /// Scan the four sides of the chamber and return the path cells.
    ///
    /// Corners are never entrances.
    pub fn entrances(&self, grid: &Grid) -> Vec<Entrance> {
        let mut v: Vec<Entrance> = Vec::new();

        for col in 1..self.width - 1 {
            if self.cell(grid, 0, col) == CellType::Path {
                v.push(Entrance {
                    side: Side::Top,
                    offset: col,
                });
            }
            if self.cell(grid, self.height - 1, col) == CellType::Path {
                v.push(Entrance {
                    side: Side::Bottom,
                    offset: col,
                });
            }
        }
        for row in 1..self.height - 1 {
            if self.cell(grid, row, 0) == CellType::Path {
                v.push(Entrance {
                    side: Side::Left,
                    offset: row,
                });
            }
            if self.cell(grid, row, self.width - 1) == CellType::Path {
                v.push(Entrance {
                    side: Side::Right,
                    offset: row,
                });
            }
        }
        v
    }

    /// Split the chamber in four at the crossing of the given row and column (relative to the
    /// chamber origin).
    ///
    /// The chambers are returned in the top left, top right, bottom left, bottom right order.
    /// They share the dividing row and column.
    pub fn split(&self, wall_row: usize, wall_col: usize) -> [Chamber; 4] {
        let top_height: usize = wall_row + 1;
        let bottom_height: usize = self.height - wall_row;
        let left_width: usize = wall_col + 1;
        let right_width: usize = self.width - wall_col;

        [
            Chamber::new(self.row, self.col, top_height, left_width),
            Chamber::new(self.row, self.col + wall_col, top_height, right_width),
            Chamber::new(self.row + wall_row, self.col, bottom_height, left_width),
            Chamber::new(
                self.row + wall_row,
                self.col + wall_col,
                bottom_height,
                right_width,
            ),
        ]
    }
}

/// Whether the list contains an entrance at the given side and offset.
pub fn has_entrance(entrances: &[Entrance], side: Side, offset: usize) -> bool {
    entrances
        .iter()
        .any(|e| e.side == side && e.offset == offset)
}

/// Return the offsets of the entrances on the given sides.
pub fn entrance_offsets(entrances: &[Entrance], sides: &[Side]) -> Vec<usize> {
    entrances
        .iter()
        .filter(|e| sides.contains(&e.side))
        .map(|e| e.offset)
        .collect()
}
