//! Candidate rooms for an unresolved door and the adjacency rules they must pass

use crate::algorithm::state::SearchState;
use crate::catalog::template::{PlacedPiece, RoomTemplate};
use crate::spatial::grid::{Coordinate, Direction, Door};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// A template paired with the door that would meet the resolved door
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Template to place
    pub template: Arc<RoomTemplate>,
    /// Template-relative door facing back through the hallway
    pub connector: Door,
}

impl Candidate {
    /// Place the template so its connector sits on `cell`
    pub fn place_at(&self, cell: Coordinate) -> (PlacedPiece, Door) {
        let piece = PlacedPiece::attached(Arc::clone(&self.template), self.connector, cell);
        let connector = self.connector.translated(piece.origin());
        (piece, connector)
    }
}

/// Every `(template, connector)` pair in `pool` able to meet a door facing `direction`
///
/// Compatibility is decided by door direction alone; a template with several
/// suitable doors contributes one candidate per door.
pub fn compatible_candidates(pool: &[Arc<RoomTemplate>], direction: Direction) -> Vec<Candidate> {
    let wanted = direction.opposite();
    pool.iter()
        .flat_map(|template| {
            template
                .doors()
                .iter()
                .filter(move |door| door.direction == wanted)
                .map(move |door| Candidate {
                    template: Arc::clone(template),
                    connector: *door,
                })
        })
        .collect()
}

/// Compatible candidates in a fresh uniformly random order
pub fn shuffled_candidates<R: Rng + ?Sized>(
    pool: &[Arc<RoomTemplate>],
    direction: Direction,
    rng: &mut R,
) -> Vec<Candidate> {
    let mut candidates = compatible_candidates(pool, direction);
    candidates.shuffle(rng);
    candidates
}

/// Check `piece` can join the layout through `connector`
///
/// Besides requiring free cells, no door may open into a wall: each of the
/// piece's other doors that faces an occupied cell must be met by a door of
/// the piece there, and each unresolved door facing into the piece must be met
/// by one of the piece's doors.
pub fn fits(state: &SearchState, piece: &PlacedPiece, connector: Door) -> bool {
    if piece
        .footprint()
        .iter()
        .any(|cell| state.occupancy().contains(*cell))
    {
        return false;
    }

    let outward_sealed = piece
        .doors()
        .iter()
        .filter(|door| **door != connector)
        .all(|door| match state.piece_at(door.target()) {
            Some(neighbor) => neighbor.has_door(door.mate()),
            None => true,
        });
    if !outward_sealed {
        return false;
    }

    state
        .frontier()
        .iter()
        .filter(|open| piece.footprint().contains(&open.target()))
        .all(|open| piece.has_door(open.mate()))
}
