/*
grid.rs

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

//! Square maze grid made of wall and path cells.
//!
//! The [`Grid`] object is created with a solid frame and an empty inside.
//! The [`crate::generator::division::MazeGenerator`] then draws the inner walls.
//! Once the generation is complete, the grid is only read.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::errors::MazeError;

/// Smallest legal maze size.
pub const MIN_SIZE: usize = 11;

/// Largest legal maze size.
pub const MAX_SIZE: usize = 59;

/// Kind of a maze cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Path,
    Wall,
}

impl CellType {
    /// Character used in the ASCII representation of the grid.
    pub fn symbol(self) -> char {
        match self {
            CellType::Path => '.',
            CellType::Wall => '#',
        }
    }
}

/// Coordinates of a cell in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position shifted by the given row and column deltas, or None if the result
    /// would be negative.
    pub fn offset(&self, delta_row: isize, delta_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(delta_row)?,
            col: self.col.checked_add_signed(delta_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Maze grid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Vec<CellType>>,
}

impl Grid {
    /// Verify that the size can be used for a maze.
    ///
    /// The size must be odd (`1 + 2n`) and strictly between 10 and 60.
    pub fn check_size(size: usize) -> Result<(), MazeError> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) && size % 2 == 1 {
            Ok(())
        } else {
            Err(MazeError::InvalidSize(size))
        }
    }

    /// Create a [`Grid`] object with a wall frame and no inner walls.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidSize`] when the size is not valid.
    pub fn new(size: usize) -> Result<Self, MazeError> {
        Self::check_size(size)?;

        let mut cells: Vec<Vec<CellType>> = vec![vec![CellType::Path; size]; size];
        for i in 0..size {
            cells[0][i] = CellType::Wall;
            cells[size - 1][i] = CellType::Wall;
            cells[i][0] = CellType::Wall;
            cells[i][size - 1] = CellType::Wall;
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns) in the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the cell at the given coordinates.
    ///
    /// Cells outside the grid are walls.
    pub fn cell_at(&self, row: usize, col: usize) -> CellType {
        match self.cells.get(row).and_then(|r| r.get(col)) {
            Some(c) => *c,
            None => CellType::Wall,
        }
    }

    /// Return the cell at the given position.
    pub fn cell(&self, position: Position) -> CellType {
        self.cell_at(position.row, position.col)
    }

    /// Return the cell next to the given position. Cells outside the grid are walls.
    pub fn neighbor(&self, position: Position, delta_row: isize, delta_col: isize) -> CellType {
        match position.offset(delta_row, delta_col) {
            Some(p) => self.cell(p),
            None => CellType::Wall,
        }
    }

    /// Whether the cell at the given position is a wall.
    pub fn is_wall(&self, position: Position) -> bool {
        self.cell(position) == CellType::Wall
    }

    /// Whether the cell at the given position is a path.
    pub fn is_path(&self, position: Position) -> bool {
        self.cell(position) == CellType::Path
    }

    /// Change a cell. Only the maze generator modifies the grid.
    ///
    /// Coordinates outside the grid are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: CellType) {
        if let Some(c) = self.cells.get_mut(row).and_then(|l| l.get_mut(col)) {
            *c = cell;
        }
    }

    /// Return the list of the path cells, row by row.
    pub fn paths(&self) -> Vec<Position> {
        let mut v: Vec<Position> = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if *cell == CellType::Path {
                    v.push(Position::new(row, col));
                }
            }
        }
        v
    }

    /// Whether every path cell can be reached from every other path cell.
    pub fn is_connected(&self) -> bool {
        let paths: Vec<Position> = self.paths();
        let Some(first) = paths.first() else {
            return true;
        };

        let mut visited: Vec<Vec<bool>> = vec![vec![false; self.size]; self.size];
        let mut queue: VecDeque<Position> = VecDeque::new();
        let mut count: usize = 0;

        visited[first.row][first.col] = true;
        queue.push_back(*first);
        while let Some(p) = queue.pop_front() {
            count += 1;
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(n) = p.offset(dr, dc)
                    && self.is_path(n)
                    && !visited[n.row][n.col]
                {
                    visited[n.row][n.col] = true;
                    queue.push_back(n);
                }
            }
        }
        count == paths.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let s: String = line.iter().map(|c| c.symbol()).collect();
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Read a grid from its ASCII representation.
///
/// - `#` or `W` is a wall.
/// - `.` or a space is a path.
///
/// Trailing empty lines are ignored. The grid must be square and its size must be valid.
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.trim_end_matches(['\n', '\r']).lines().collect();
        let size: usize = lines.len();
        Self::check_size(size)?;

        let mut cells: Vec<Vec<CellType>> = Vec::with_capacity(size);
        for (i, line) in lines.iter().enumerate() {
            let row: Vec<CellType> = line
                .trim_end_matches('\r')
                .chars()
                .map(|c| match c {
                    '#' | 'W' => Ok(CellType::Wall),
                    '.' | ' ' => Ok(CellType::Path),
                    _ => Err(MazeError::Parse {
                        line: i + 1,
                        reason: format!("unexpected character {c:?}"),
                    }),
                })
                .collect::<Result<Vec<CellType>, MazeError>>()?;
            if row.len() != size {
                return Err(MazeError::Parse {
                    line: i + 1,
                    reason: format!("{} cells instead of {size}", row.len()),
                });
            }
            cells.push(row);
        }
        Ok(Self { size, cells })
    }
}
