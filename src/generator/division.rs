/*
division.rs

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

//! Generate a maze by recursive division.
//!
//! The generator starts from an empty grid with a wall frame.
//! Large chambers are divided in four by a horizontal and a vertical wall, each of the four wall
//! arms gets one gap, and the four resulting chambers are divided recursively.
//! Chambers with a side of five cells get a single wall, and chambers with a side of three cells
//! are left as corridors.
//!
//! Walls are drawn on even coordinates and gaps are cut on odd coordinates. An odd chamber
//! split on an even line gives two odd chambers, so every chamber has odd dimensions.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::Instant;

use super::chamber::{self, Chamber, Entrance, Side};
use super::grid::{CellType, Grid};
use crate::errors::MazeError;

/// [`MazeGenerator`] object.
pub struct MazeGenerator {
    /// Size of the grid to generate.
    pub size: usize,

    /// Number of chambers processed during the last generation.
    pub iteration: usize,

    /// Duration in seconds of the last generation.
    pub duration: f32,
}

impl MazeGenerator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidSize`] when the size is not valid.
    pub fn new(size: usize) -> Result<Self, MazeError> {
        Grid::check_size(size)?;
        Ok(Self {
            size,
            iteration: 0,
            duration: 0.0,
        })
    }

    /// Generate and return a maze.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::DegenerateChamber`] if the division reaches a chamber that cannot
    /// be processed. This does not happen for valid grid sizes.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Grid, MazeError> {
        self.iteration = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        let mut grid: Grid = Grid::new(self.size)?;
        let whole: Chamber = Chamber::whole(&grid);
        let res: Result<(), MazeError> = self.divide(&mut grid, whole, rng);

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Size = {}  Chambers = {}  Duration = {}",
            self.size, self.iteration, self.duration
        );
        res?;

        if log_enabled!(Level::Debug) {
            for line in grid.to_string().lines() {
                debug!("{line}");
            }
        }
        Ok(grid)
    }

    /// Recursively divide a chamber.
    fn divide<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        chamber: Chamber,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        self.iteration += 1;

        let height: usize = chamber.height;
        let width: usize = chamber.width;
        if height < 3 || width < 3 || height % 2 == 0 || width % 2 == 0 {
            return Err(Self::degenerate(&chamber));
        }

        let entrances: Vec<Entrance> = chamber.entrances(grid);
        debug!(
            "== Chamber {height}x{width} at ({}, {})  entrances = {entrances:?}",
            chamber.row, chamber.col
        );

        if height == 3 || width == 3 {
            // Corridor
            Ok(())
        } else if height == 5 {
            self.divide_flat(grid, &chamber, &entrances, rng)
        } else if width == 5 {
            self.divide_narrow(grid, &chamber, &entrances, rng)
        } else {
            self.divide_cross(grid, &chamber, &entrances, rng)
        }
    }

    /// Draw a horizontal wall in the middle of a chamber that is five cells high.
    fn divide_flat<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        chamber: &Chamber,
        entrances: &[Entrance],
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let width: usize = chamber.width;

        // Do not block an entrance that opens on the middle row
        let left_open: bool = chamber::has_entrance(entrances, Side::Left, 2);
        let right_open: bool = chamber::has_entrance(entrances, Side::Right, 2);
        for col in 1..width - 1 {
            if !((col == 1 && left_open) || (col == width - 2 && right_open)) {
                chamber.set(grid, 2, col, CellType::Wall);
            }
        }

        let gap: usize = if width == 5 {
            2
        } else {
            random_odd(rng, 1, width - 2).ok_or_else(|| Self::degenerate(chamber))?
        };
        chamber.set(grid, 2, gap, CellType::Path);
        debug!("    Horizontal wall  gap = {gap}");
        Ok(())
    }

    /// Draw a vertical wall in the middle of a chamber that is five cells wide.
    fn divide_narrow<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        chamber: &Chamber,
        entrances: &[Entrance],
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let height: usize = chamber.height;

        let top_open: bool = chamber::has_entrance(entrances, Side::Top, 2);
        let bottom_open: bool = chamber::has_entrance(entrances, Side::Bottom, 2);
        for row in 1..height - 1 {
            if !((row == 1 && top_open) || (row == height - 2 && bottom_open)) {
                chamber.set(grid, row, 2, CellType::Wall);
            }
        }

        let gap: usize =
            random_odd(rng, 1, height - 2).ok_or_else(|| Self::degenerate(chamber))?;
        chamber.set(grid, gap, 2, CellType::Path);
        debug!("    Vertical wall  gap = {gap}");
        Ok(())
    }

    /// Divide a large chamber in four and recursively divide the resulting chambers.
    fn divide_cross<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        chamber: &Chamber,
        entrances: &[Entrance],
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let height: usize = chamber.height;
        let width: usize = chamber.width;

        // The new walls must not end in front of an entrance
        let avoid_cols: Vec<usize> =
            chamber::entrance_offsets(entrances, &[Side::Top, Side::Bottom]);
        let avoid_rows: Vec<usize> =
            chamber::entrance_offsets(entrances, &[Side::Left, Side::Right]);
        let wall_col: usize = random_even(rng, 2, width - 3, &avoid_cols)
            .ok_or_else(|| Self::degenerate(chamber))?;
        let wall_row: usize = random_even(rng, 2, height - 3, &avoid_rows)
            .ok_or_else(|| Self::degenerate(chamber))?;

        for row in 1..height - 1 {
            chamber.set(grid, row, wall_col, CellType::Wall);
        }
        for col in 1..width - 1 {
            chamber.set(grid, wall_row, col, CellType::Wall);
        }

        // One gap per wall arm
        let top_gap: usize = if wall_row > 2 {
            random_odd(rng, 1, wall_row - 1).ok_or_else(|| Self::degenerate(chamber))?
        } else {
            1
        };
        let bottom_gap: usize = if height - wall_row > 2 {
            random_odd(rng, wall_row + 1, height - 2).ok_or_else(|| Self::degenerate(chamber))?
        } else {
            height - 2
        };
        let left_gap: usize = if wall_col > 2 {
            random_odd(rng, 1, wall_col - 1).ok_or_else(|| Self::degenerate(chamber))?
        } else {
            1
        };
        let right_gap: usize = if width - wall_col > 2 {
            random_odd(rng, wall_col + 1, width - 2).ok_or_else(|| Self::degenerate(chamber))?
        } else {
            width - 2
        };
        chamber.set(grid, top_gap, wall_col, CellType::Path);
        chamber.set(grid, bottom_gap, wall_col, CellType::Path);
        chamber.set(grid, wall_row, left_gap, CellType::Path);
        chamber.set(grid, wall_row, right_gap, CellType::Path);
        debug!(
            "    Cross at ({wall_row}, {wall_col})  gaps = top {top_gap}, bottom {bottom_gap}, left {left_gap}, right {right_gap}"
        );

        // The sub-chambers only write inside their borders, so the shared row and column stay
        // as drawn above.
        for sub in chamber.split(wall_row, wall_col) {
            self.divide(grid, sub, rng)?;
        }
        Ok(())
    }

    fn degenerate(chamber: &Chamber) -> MazeError {
        MazeError::DegenerateChamber {
            row: chamber.row,
            col: chamber.col,
            height: chamber.height,
            width: chamber.width,
        }
    }
}

/// Return a random even number between `min` and `max` (inclusive) that is not in `avoid`, or
/// None if there is no such number.
fn random_even<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
    avoid: &[usize],
) -> Option<usize> {
    let candidates: Vec<usize> = (min..=max)
        .filter(|n| n % 2 == 0 && !avoid.contains(n))
        .collect();
    candidates.choose(rng).copied()
}

/// Return a random odd number between `min` and `max` (inclusive), or None if there is no such
/// number.
fn random_odd<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> Option<usize> {
    let candidates: Vec<usize> = (min..=max).filter(|n| n % 2 == 1).collect();
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_positions_respect_parity() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let even: usize = random_even(&mut rng, 2, 20, &[4, 8]).unwrap();
            assert_eq!(even % 2, 0);
            assert!((2..=20).contains(&even));
            assert!(even != 4 && even != 8);

            let odd: usize = random_odd(&mut rng, 1, 19).unwrap();
            assert_eq!(odd % 2, 1);
            assert!((1..=19).contains(&odd));
        }
        assert_eq!(random_even(&mut rng, 2, 4, &[2, 4]), None);
        assert_eq!(random_odd(&mut rng, 2, 2), None);
    }

    #[test]
    fn five_by_five_chamber_gets_a_centered_gap() {
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        let generator: MazeGenerator = MazeGenerator::new(11).unwrap();
        let mut grid: Grid = Grid::new(11).unwrap();
        let chamber: Chamber = Chamber::new(0, 0, 5, 5);

        for col in 0..5 {
            grid.set(4, col, CellType::Wall);
        }
        for row in 0..5 {
            grid.set(row, 4, CellType::Wall);
        }
        let entrances: Vec<Entrance> = chamber.entrances(&grid);
        generator
            .divide_flat(&mut grid, &chamber, &entrances, &mut rng)
            .unwrap();

        assert_eq!(grid.cell_at(2, 1), CellType::Wall);
        assert_eq!(grid.cell_at(2, 2), CellType::Path);
        assert_eq!(grid.cell_at(2, 3), CellType::Wall);
    }

    #[test]
    fn flat_chamber_keeps_entrance_on_the_middle_row_open() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let generator: MazeGenerator = MazeGenerator::new(11).unwrap();
        let mut grid: Grid = Grid::new(11).unwrap();
        let chamber: Chamber = Chamber::new(0, 0, 5, 11);

        for col in 0..11 {
            grid.set(4, col, CellType::Wall);
        }
        grid.set(2, 0, CellType::Path);
        let entrances: Vec<Entrance> = chamber.entrances(&grid);
        generator
            .divide_flat(&mut grid, &chamber, &entrances, &mut rng)
            .unwrap();

        assert_eq!(grid.cell_at(2, 1), CellType::Path);
        let walls: usize = (1..10)
            .filter(|c| grid.cell_at(2, *c) == CellType::Wall)
            .count();
        // One cell kept for the entrance, at most one gap cut
        assert!(walls == 7 || walls == 8);
    }

    #[test]
    fn narrow_chamber_gets_a_vertical_wall_with_an_odd_gap() {
        let generator: MazeGenerator = MazeGenerator::new(11).unwrap();

        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let mut grid: Grid = Grid::new(11).unwrap();
            let chamber: Chamber = Chamber::new(0, 0, 11, 5);

            for row in 0..11 {
                grid.set(row, 4, CellType::Wall);
            }
            let entrances: Vec<Entrance> = chamber.entrances(&grid);
            generator
                .divide_narrow(&mut grid, &chamber, &entrances, &mut rng)
                .unwrap();

            let gaps: Vec<usize> = (1..10)
                .filter(|r| grid.cell_at(*r, 2) == CellType::Path)
                .collect();
            assert_eq!(gaps.len(), 1);
            assert_eq!(gaps[0] % 2, 1);
            assert_eq!(grid.cell_at(0, 2), CellType::Wall);
            assert_eq!(grid.cell_at(10, 2), CellType::Wall);
        }
    }

    #[test]
    fn narrow_chamber_keeps_entrance_on_the_middle_column_open() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let generator: MazeGenerator = MazeGenerator::new(11).unwrap();
        let mut grid: Grid = Grid::new(11).unwrap();
        let chamber: Chamber = Chamber::new(0, 0, 11, 5);

        for row in 0..11 {
            grid.set(row, 4, CellType::Wall);
        }
        grid.set(0, 2, CellType::Path);
        let entrances: Vec<Entrance> = chamber.entrances(&grid);
        generator
            .divide_narrow(&mut grid, &chamber, &entrances, &mut rng)
            .unwrap();

        assert_eq!(grid.cell_at(1, 2), CellType::Path);
        let walls: usize = (1..10)
            .filter(|r| grid.cell_at(*r, 2) == CellType::Wall)
            .count();
        // One cell kept for the entrance, at most one gap cut
        assert!(walls == 7 || walls == 8);
    }

    #[test]
    fn even_chamber_is_rejected() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut generator: MazeGenerator = MazeGenerator::new(11).unwrap();
        let mut grid: Grid = Grid::new(11).unwrap();

        let res: Result<(), MazeError> =
            generator.divide(&mut grid, Chamber::new(0, 0, 6, 9), &mut rng);
        assert_eq!(
            res,
            Err(MazeError::DegenerateChamber {
                row: 0,
                col: 0,
                height: 6,
                width: 9
            })
        );
    }

    #[test]
    fn generated_grid_is_connected() {
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let mut generator: MazeGenerator = MazeGenerator::new(43).unwrap();
        let grid: Grid = generator.generate(&mut rng).unwrap();

        assert_eq!(grid.size(), 43);
        assert!(grid.is_connected());
        assert!(generator.iteration > 1);
        for i in 0..43 {
            assert_eq!(grid.cell_at(0, i), CellType::Wall);
            assert_eq!(grid.cell_at(42, i), CellType::Wall);
            assert_eq!(grid.cell_at(i, 0), CellType::Wall);
            assert_eq!(grid.cell_at(i, 42), CellType::Wall);
        }
    }

    #[test]
    fn odd_cells_are_never_walls() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let grid: Grid = MazeGenerator::new(31).unwrap().generate(&mut rng).unwrap();

        for row in (1..30).step_by(2) {
            for col in (1..30).step_by(2) {
                assert_eq!(grid.cell_at(row, col), CellType::Path);
            }
        }
    }
}
