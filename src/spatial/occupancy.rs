//! Claimed grid cells and the stack of unresolved doors
//!
//! Both structures are mutated in matched apply/undo pairs by the search, so
//! every mutator here has an exact inverse.

use crate::spatial::grid::{Coordinate, Door};
use std::collections::HashMap;

/// Cells claimed by placed pieces, mapped to the index of the owning piece
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashMap<Coordinate, usize>,
}

impl Occupancy {
    /// Create an empty occupancy set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of claimed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is claimed
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is claimed by any piece
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Index of the piece owning `cell`
    pub fn owner(&self, cell: Coordinate) -> Option<usize> {
        self.cells.get(&cell).copied()
    }

    /// Claim every cell of a footprint for `piece`
    ///
    /// Returns `false` and leaves the set untouched when any cell is already
    /// claimed, so a footprint is either claimed whole or not at all.
    pub fn claim(&mut self, footprint: &[Coordinate], piece: usize) -> bool {
        if footprint.iter().any(|cell| self.contains(*cell)) {
            return false;
        }
        for cell in footprint {
            self.cells.insert(*cell, piece);
        }
        true
    }

    /// Release every cell of a previously claimed footprint
    pub fn release(&mut self, footprint: &[Coordinate]) {
        for cell in footprint {
            self.cells.remove(cell);
        }
    }

    /// All claimed cells in unspecified order
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }
}

/// Unresolved doors, processed last-in-first-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    doors: Vec<Door>,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self { doors: Vec::new() }
    }

    /// Number of unresolved doors
    pub const fn len(&self) -> usize {
        self.doors.len()
    }

    /// Whether every door has been resolved
    pub const fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    /// Door at `index`, counting from the head
    pub fn get(&self, index: usize) -> Option<Door> {
        self.doors.get(index).copied()
    }

    /// Position of `door`, if it is unresolved
    pub fn position(&self, door: Door) -> Option<usize> {
        self.doors.iter().position(|candidate| *candidate == door)
    }

    /// Push doors onto the tail
    pub fn extend(&mut self, doors: impl IntoIterator<Item = Door>) {
        self.doors.extend(doors);
    }

    /// Remove and return the door at `index`
    pub fn take(&mut self, index: usize) -> Option<Door> {
        (index < self.doors.len()).then(|| self.doors.remove(index))
    }

    /// Put a door back at `index`, undoing [`Frontier::take`]
    ///
    /// An index past the tail appends the door; debug builds reject it as a
    /// mismatched undo.
    pub fn restore(&mut self, index: usize, door: Door) {
        debug_assert!(
            index <= self.doors.len(),
            "restore index {index} past frontier length {}",
            self.doors.len()
        );
        let index = index.min(self.doors.len());
        self.doors.insert(index, door);
    }

    /// Drop the `count` most recently pushed doors
    pub fn truncate_tail(&mut self, count: usize) {
        let keep = self.doors.len().saturating_sub(count);
        self.doors.truncate(keep);
    }

    /// Doors from head to tail
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Door> {
        self.doors.iter()
    }
}
