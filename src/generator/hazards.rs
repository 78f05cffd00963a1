/*
hazards.rs

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

//! Place the hazards (trap walls) that guard the items.
//!
//! An item is always in a corridor (see [`super::treasures`]).
//! The hazard is placed next to the item, on the side of the corridor that has the most room,
//! and moves along the corridor on that side.
//! When both sides have the same room, the hazard goes to the left (horizontal corridor) or up
//! (vertical corridor).
//! No hazard is placed when the item is in a dead end of length one on both sides.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::grid::{CellType, Grid, Position};

/// Direction in which a hazard moves.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Up,
    Down,
    Left,
    Right,
}

impl Axis {
    /// Row and column deltas for one step in that direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Up => (-1, 0),
            Axis::Down => (1, 0),
            Axis::Left => (0, -1),
            Axis::Right => (0, 1),
        }
    }

    /// Character used in the ASCII representation of a layout.
    pub fn symbol(self) -> char {
        match self {
            Axis::Up => '^',
            Axis::Down => 'v',
            Axis::Left => '<',
            Axis::Right => '>',
        }
    }
}

/// Hazard guarding an item.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hazard {
    /// Cell of the hazard, next to the item.
    pub position: Position,

    /// Direction of the movement.
    pub axis: Axis,

    /// Index of the guarded item in the item list.
    pub item: usize,
}

/// [`HazardPlacer`] object.
pub struct HazardPlacer<'a> {
    /// Finished maze.
    grid: &'a Grid,
}

impl<'a> HazardPlacer<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Return the hazards for the given items. At most one hazard is returned per item, in the
    /// order of the items.
    pub fn place(&self, items: &[Position]) -> Vec<Hazard> {
        let mut hazards: Vec<Hazard> = Vec::with_capacity(items.len());

        for (i, p) in items.iter().enumerate() {
            let horizontal: bool = self.is_wall(*p, Axis::Up) && self.is_wall(*p, Axis::Down);
            let vertical: bool = self.is_wall(*p, Axis::Left) && self.is_wall(*p, Axis::Right);

            let hazard: Option<Hazard> = if horizontal {
                self.guard(i, *p, Axis::Left, Axis::Right)
            } else if vertical {
                self.guard(i, *p, Axis::Up, Axis::Down)
            } else {
                None
            };
            match hazard {
                Some(h) => {
                    debug!("Hazard for item {i} at {}: {}", h.position, h.axis);
                    hazards.push(h);
                }
                None => debug!("No hazard for item {i} at {p}"),
            }
        }
        hazards
    }

    /// Select the side of the corridor for the hazard. The `first` direction wins ties.
    fn guard(&self, item: usize, p: Position, first: Axis, second: Axis) -> Option<Hazard> {
        let space_first: usize = self.space(p, first);
        let space_second: usize = self.space(p, second);

        let axis: Axis = if space_first >= space_second && space_first > 1 {
            first
        } else if space_second >= space_first && space_second > 1 {
            second
        } else {
            return None;
        };
        let (dr, dc) = axis.delta();
        Some(Hazard {
            position: p.offset(dr, dc)?,
            axis,
            item,
        })
    }

    /// Count the path cells from the given position (included) to the next wall.
    fn space(&self, p: Position, axis: Axis) -> usize {
        let (dr, dc) = axis.delta();
        let mut count: usize = 0;
        let mut current: Option<Position> = Some(p);

        while let Some(c) = current
            && self.grid.is_path(c)
        {
            count += 1;
            current = c.offset(dr, dc);
        }
        count
    }

    /// Whether the cell next to the given position is a wall.
    fn is_wall(&self, p: Position, axis: Axis) -> bool {
        let (dr, dc) = axis.delta();
        self.grid.neighbor(p, dr, dc) == CellType::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDORS: &str = "\
###########
#...#.....#
###########
#.#.....#.#
#.#######.#
#.#.....#.#
#.#######.#
#.#.#.#.#.#
#.....#.###
#.#.#.#.#.#
###########";

    fn grid() -> Grid {
        CORRIDORS.parse().unwrap()
    }

    #[test]
    fn space_counts_the_item_cell() {
        let grid: Grid = grid();
        let placer: HazardPlacer = HazardPlacer::new(&grid);

        assert_eq!(placer.space(Position::new(1, 2), Axis::Left), 2);
        assert_eq!(placer.space(Position::new(1, 2), Axis::Right), 2);
        assert_eq!(placer.space(Position::new(1, 6), Axis::Right), 4);
        assert_eq!(placer.space(Position::new(0, 0), Axis::Up), 0);
    }

    #[test]
    fn tie_favors_left() {
        let grid: Grid = grid();
        // Corridor of five cells, item in the middle
        let hazards: Vec<Hazard> = HazardPlacer::new(&grid).place(&[Position::new(3, 5)]);

        assert_eq!(
            hazards,
            vec![Hazard {
                position: Position::new(3, 4),
                axis: Axis::Left,
                item: 0
            }]
        );
    }

    #[test]
    fn longer_side_wins() {
        let grid: Grid = grid();
        let hazards: Vec<Hazard> =
            HazardPlacer::new(&grid).place(&[Position::new(1, 6), Position::new(5, 3)]);

        assert_eq!(
            hazards,
            vec![
                Hazard {
                    position: Position::new(1, 7),
                    axis: Axis::Right,
                    item: 0
                },
                Hazard {
                    position: Position::new(5, 4),
                    axis: Axis::Right,
                    item: 1
                }
            ]
        );
    }

    #[test]
    fn vertical_tie_favors_up() {
        let grid: Grid = grid();
        // Column 9, rows 3 to 7
        let hazards: Vec<Hazard> = HazardPlacer::new(&grid).place(&[Position::new(5, 9)]);

        assert_eq!(hazards.len(), 1);
        assert_eq!(hazards[0].axis, Axis::Up);
        assert_eq!(hazards[0].position, Position::new(4, 9));

        let hazards: Vec<Hazard> = HazardPlacer::new(&grid).place(&[Position::new(7, 9)]);
        assert_eq!(hazards[0].axis, Axis::Up);

        let hazards: Vec<Hazard> = HazardPlacer::new(&grid).place(&[Position::new(4, 9)]);
        assert_eq!(hazards[0].axis, Axis::Down);
        assert_eq!(hazards[0].position, Position::new(5, 9));
    }

    #[test]
    fn short_corridors_get_no_hazard() {
        let grid: Grid = grid();
        // Closed cell
        let hazards: Vec<Hazard> = HazardPlacer::new(&grid).place(&[Position::new(9, 9)]);
        assert!(hazards.is_empty());

        // Only the second item has room around it
        let hazards: Vec<Hazard> =
            HazardPlacer::new(&grid).place(&[Position::new(9, 9), Position::new(8, 2)]);
        assert_eq!(hazards.len(), 1);
        assert_eq!(hazards[0].item, 1);
        assert_eq!(hazards[0].axis, Axis::Right);
    }

    #[test]
    fn open_cell_gets_no_hazard() {
        let grid: Grid = Grid::new(11).unwrap();

        assert!(HazardPlacer::new(&grid).place(&[Position::new(5, 5)]).is_empty());
    }

    #[test]
    fn axis_names() {
        assert_eq!(Axis::Left.to_string(), "left");
        assert_eq!(Axis::Down.to_string(), "down");
        assert_eq!(Axis::Up.symbol(), '^');
    }
}
