//! Mutable search state with exact apply/undo of tentative placements
//!
//! The search never copies the state. Each tentative placement is applied in
//! place and yields an [`Attachment`] receipt; handing the receipt back to
//! [`SearchState::detach`] restores the state to exactly what it was before.

use crate::catalog::template::{PlacedPiece, RoomTemplate};
use crate::spatial::grid::{Coordinate, Door};
use crate::spatial::occupancy::{Frontier, Occupancy};
use std::sync::Arc;

/// One node of the search tree
///
/// `pieces[0]` is the start room. Every later piece `pieces[i]` was attached
/// through the door `links[i - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    occupancy: Occupancy,
    frontier: Frontier,
    pieces: Vec<PlacedPiece>,
    links: Vec<Door>,
}

/// Receipt for a tentative placement, consumed by [`SearchState::detach`]
#[derive(Debug)]
#[must_use = "an attachment must be detached to roll the placement back"]
pub struct Attachment {
    frontier_index: usize,
    door: Door,
    // In removal order; restored in reverse
    matched: Vec<(usize, Door)>,
    pushed: usize,
}

impl SearchState {
    /// Fresh state holding only `start`, anchored at the origin
    pub fn seeded(start: Arc<RoomTemplate>) -> Self {
        let piece = PlacedPiece::new(start, Coordinate::ORIGIN);
        let mut occupancy = Occupancy::new();
        // A validated template never repeats a cell, so the claim always succeeds
        let _ = occupancy.claim(piece.footprint(), 0);
        let mut frontier = Frontier::new();
        frontier.extend(piece.doors().iter().copied());

        Self {
            occupancy,
            frontier,
            pieces: vec![piece],
            links: Vec::new(),
        }
    }

    /// Number of placed rooms, start included
    pub const fn depth(&self) -> usize {
        self.pieces.len()
    }

    /// Claimed cells
    pub const fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Unresolved doors
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Placed rooms in placement order
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    /// Doors each non-start room was attached through
    pub fn links(&self) -> &[Door] {
        &self.links
    }

    /// Room covering `cell`
    pub fn piece_at(&self, cell: Coordinate) -> Option<&PlacedPiece> {
        self.occupancy
            .owner(cell)
            .and_then(|index| self.pieces.get(index))
    }

    /// Tentatively place `piece` to resolve the frontier door at `frontier_index`
    ///
    /// `connector` is the piece's absolute door meeting the resolved door.
    /// Frontier doors opening into the new footprint are matched and removed;
    /// the piece's other doors that open into free cells are pushed onto the
    /// tail. Returns `None` with nothing changed if the index is stale or a
    /// footprint cell is taken.
    pub fn attach(
        &mut self,
        frontier_index: usize,
        piece: PlacedPiece,
        connector: Door,
    ) -> Option<Attachment> {
        let door = self.frontier.get(frontier_index)?;
        if !self.occupancy.claim(piece.footprint(), self.pieces.len()) {
            return None;
        }
        let taken = self.frontier.take(frontier_index);
        debug_assert_eq!(taken, Some(door), "frontier changed between get and take");

        let matched_positions: Vec<usize> = self
            .frontier
            .iter()
            .enumerate()
            .filter(|(_, open)| piece.footprint().contains(&open.target()))
            .map(|(position, _)| position)
            .collect();
        // Highest first so earlier positions stay valid
        let matched: Vec<(usize, Door)> = matched_positions
            .into_iter()
            .rev()
            .filter_map(|position| self.frontier.take(position).map(|open| (position, open)))
            .collect();

        let opened: Vec<Door> = piece
            .doors()
            .iter()
            .copied()
            .filter(|own| *own != connector && !self.occupancy.contains(own.target()))
            .collect();
        let pushed = opened.len();
        self.frontier.extend(opened);

        self.pieces.push(piece);
        self.links.push(door);

        Some(Attachment {
            frontier_index,
            door,
            matched,
            pushed,
        })
    }

    /// Roll back the placement recorded by `attachment`
    ///
    /// Attachments must be detached in the reverse order they were made.
    pub fn detach(&mut self, attachment: Attachment) {
        let _ = self.links.pop();
        if let Some(piece) = self.pieces.pop() {
            self.occupancy.release(piece.footprint());
        }
        self.frontier.truncate_tail(attachment.pushed);
        for (position, door) in attachment.matched.into_iter().rev() {
            self.frontier.restore(position, door);
        }
        self.frontier
            .restore(attachment.frontier_index, attachment.door);
    }

    /// Split into placed rooms and their link doors
    pub fn into_parts(self) -> (Vec<PlacedPiece>, Vec<Door>) {
        (self.pieces, self.links)
    }
}
