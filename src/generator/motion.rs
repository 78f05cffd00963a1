/*
motion.rs

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

//! Movement of the hazards.
//!
//! All the hazards move together, following a cycle of [`PHASES`] phases driven by a
//! [`HazardCycle`] object.
//! During a cycle, a hazard slides along its axis by up to one cell, waits, and comes back.
//! While it is near its starting cell, the hazard is closed and hurts the player.
//!
//! When the player collects the item that a hazard guards, the hazard finishes its movement
//! until it is fully extended, and then stays there, open, for the rest of the game.
//! A parked hazard is harmless, even during the closed phases of the shared cycle: only the
//! moving hazards follow the closed phases.

use serde::{Deserialize, Serialize};

use super::hazards::{Axis, Hazard};

/// Number of phases in a cycle.
pub const PHASES: usize = 12;

/// Extension of the hazard along its axis for each phase, in quarters of a cell.
const EXTENSION: [usize; PHASES] = [0, 0, 1, 2, 3, 4, 4, 4, 3, 2, 1, 0];

/// Phases during which the hazard is closed.
const CLOSED: [usize; 6] = [0, 1, 2, 3, 10, 11];

/// Phases during which a hazard can park.
const PARKING: [usize; 2] = [6, 7];

/// Shared phase counter.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HazardCycle {
    phase: usize,
}

impl HazardCycle {
    /// Create a [`HazardCycle`] object at the first phase.
    pub fn new() -> Self {
        Self { phase: 0 }
    }

    /// Current phase.
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Move to the next phase and return it.
    pub fn tick(&mut self) -> usize {
        self.phase = (self.phase + 1) % PHASES;
        self.phase
    }

    /// Whether a moving hazard is closed during the current phase.
    pub fn is_closed(&self) -> bool {
        CLOSED.contains(&self.phase)
    }
}

/// Movement status of one hazard.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct HazardMotion {
    /// Direction of the movement.
    pub axis: Axis,

    /// Current extension, in quarters of a cell.
    extension: usize,

    /// Whether the hazard stopped moving.
    parked: bool,
}

impl HazardMotion {
    /// Create a [`HazardMotion`] object for the given hazard.
    pub fn new(hazard: &Hazard) -> Self {
        Self {
            axis: hazard.axis,
            extension: 0,
            parked: false,
        }
    }

    /// Follow the cycle. `item_collected` tells whether the guarded item has been collected.
    pub fn advance(&mut self, phase: usize, item_collected: bool) {
        if self.parked {
            return;
        }
        self.extension = EXTENSION[phase % PHASES];
        if item_collected && PARKING.contains(&(phase % PHASES)) {
            self.parked = true;
        }
    }

    /// Whether the hazard stopped moving.
    pub fn is_parked(&self) -> bool {
        self.parked
    }

    /// Whether the hazard hurts the player during the given phase.
    pub fn is_closed(&self, phase: usize) -> bool {
        !self.parked && CLOSED.contains(&(phase % PHASES))
    }

    /// Current displacement from the starting cell, in quarters of a cell, as row and column
    /// deltas.
    pub fn displacement(&self) -> (isize, isize) {
        let (dr, dc) = self.axis.delta();
        let e: isize = self.extension as isize;
        (dr * e, dc * e)
    }
}
