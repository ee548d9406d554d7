//! Accepted layouts and the placement list handed to the renderer

use crate::algorithm::state::SearchState;
use crate::catalog::pools::Catalog;
use crate::catalog::template::{HallwayTemplate, PlacedPiece};
use crate::io::configuration::GenerationConfig;
use crate::io::error::GenerationError;
use crate::spatial::grid::{Coordinate, Direction, Door};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One placed piece of an accepted layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Room anchored at its origin
    Room(PlacedPiece),
    /// Hallway laid on the door it leaves through
    Hallway {
        /// Hallway template matching the door's axis
        template: Arc<HallwayTemplate>,
        /// Door the hallway starts from
        door: Door,
    },
}

/// Kind of a renderer placement record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Room template
    Room,
    /// Hallway template
    Hallway,
}

/// Flat placement handed to a scene renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    /// Room or hallway
    pub kind: PieceKind,
    /// Template identifier
    pub template: String,
    /// Absolute origin; for hallways, the cell of the door they start from
    pub origin: Coordinate,
    /// Door direction, for hallways only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Placement {
    /// Flatten into a renderer record
    pub fn record(&self) -> PlacementRecord {
        match self {
            Self::Room(piece) => PlacementRecord {
                kind: PieceKind::Room,
                template: piece.template().id().to_owned(),
                origin: piece.origin(),
                direction: None,
            },
            Self::Hallway { template, door } => PlacementRecord {
                kind: PieceKind::Hallway,
                template: template.id().to_owned(),
                origin: door.at,
                direction: Some(door.direction),
            },
        }
    }
}

/// Broken layout property found by [`Layout::verify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutViolation {
    /// Two rooms claim the same cell
    Overlap {
        /// Shared cell
        cell: Coordinate,
    },
    /// A door opens into a room that has no door facing back
    UnsealedDoor {
        /// Offending door
        door: Door,
    },
    /// Room count is outside the configured bounds
    Size {
        /// Rooms placed
        rooms: usize,
    },
    /// The room reaching the size cap is not a terminal template
    NonTerminalCap {
        /// Template placed at the cap
        template: String,
    },
}

impl fmt::Display for LayoutViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlap { cell } => write!(f, "cell {cell} is claimed twice"),
            Self::UnsealedDoor { door } => write!(f, "door {door} opens into a wall"),
            Self::Size { rooms } => write!(f, "{rooms} rooms is outside the size bounds"),
            Self::NonTerminalCap { template } => {
                write!(f, "'{template}' reached the size cap but is not terminal")
            }
        }
    }
}

/// Ordered placement list of an accepted layout
///
/// The start room comes first, then a hallway and a room for each step along
/// the successful search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
    attempts: usize,
    iterations: usize,
}

impl Layout {
    /// Build from a state the search accepted
    pub fn from_state(
        state: SearchState,
        catalog: &Catalog,
        attempts: usize,
        iterations: usize,
    ) -> Self {
        let (pieces, links) = state.into_parts();
        let mut placements = Vec::with_capacity(pieces.len() * 2);
        let mut pieces = pieces.into_iter();

        if let Some(start) = pieces.next() {
            placements.push(Placement::Room(start));
        }
        for (door, piece) in links.into_iter().zip(pieces) {
            placements.push(Placement::Hallway {
                template: Arc::clone(catalog.hallway_for(door.direction)),
                door,
            });
            placements.push(Placement::Room(piece));
        }

        Self {
            placements,
            attempts,
            iterations,
        }
    }

    /// Every placement in order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placed rooms in order, start first
    pub fn rooms(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.placements.iter().filter_map(|placement| match placement {
            Placement::Room(piece) => Some(piece),
            Placement::Hallway { .. } => None,
        })
    }

    /// Number of placed rooms, start included
    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    /// Attempts used to produce this layout
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Search nodes visited across all attempts
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Renderer records in placement order
    pub fn records(&self) -> Vec<PlacementRecord> {
        self.placements.iter().map(Placement::record).collect()
    }

    /// Pass the layout through only if [`Layout::verify`] finds nothing
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLayout`] with the first violation found
    pub fn verified(
        self,
        catalog: &Catalog,
        config: &GenerationConfig,
    ) -> Result<Self, GenerationError> {
        match self.verify(catalog, config) {
            Ok(()) => Ok(self),
            Err(violation) => Err(GenerationError::InvalidLayout { violation }),
        }
    }

    /// Re-check the guarantees of an accepted layout
    ///
    /// # Errors
    ///
    /// Returns the first violation found among overlap, unsealed doors, size
    /// bounds and terminal placement at the cap
    pub fn verify(
        &self,
        catalog: &Catalog,
        config: &GenerationConfig,
    ) -> Result<(), LayoutViolation> {
        let rooms: Vec<&PlacedPiece> = self.rooms().collect();

        let mut owners: HashMap<Coordinate, usize> = HashMap::new();
        for (index, room) in rooms.iter().enumerate() {
            for cell in room.footprint() {
                if owners.insert(*cell, index).is_some() {
                    return Err(LayoutViolation::Overlap { cell: *cell });
                }
            }
        }

        for room in &rooms {
            for door in room.doors() {
                let unsealed = owners
                    .get(&door.target())
                    .and_then(|index| rooms.get(*index))
                    .is_some_and(|neighbor| !neighbor.has_door(door.mate()));
                if unsealed {
                    return Err(LayoutViolation::UnsealedDoor { door: *door });
                }
            }
        }

        if rooms.len() < config.min_size || rooms.len() > config.max_size {
            return Err(LayoutViolation::Size { rooms: rooms.len() });
        }

        // The start room is never drawn from a pool
        let capped = (config.max_size > 1)
            .then(|| rooms.get(config.max_size - 1))
            .flatten();
        if let Some(capped) = capped {
            let is_terminal = catalog
                .terminal()
                .iter()
                .any(|template| Arc::ptr_eq(template, capped.template()));
            if !is_terminal {
                return Err(LayoutViolation::NonTerminalCap {
                    template: capped.template().id().to_owned(),
                });
            }
        }

        Ok(())
    }
}
