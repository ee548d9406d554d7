//! Immutable room and hallway templates and their placed instances

use crate::io::configuration::MAX_TEMPLATE_EXTENT;
use crate::io::error::{Result, invalid_catalog};
use crate::spatial::grid::{Coordinate, Direction, Door};
use std::collections::HashSet;
use std::sync::Arc;

/// Room shape with its door connectors, relative to the template origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTemplate {
    id: String,
    footprint: Vec<Coordinate>,
    doors: Vec<Door>,
}

impl RoomTemplate {
    /// Create a validated room template
    ///
    /// # Errors
    ///
    /// Returns an error if the footprint is empty, repeats a cell or reaches
    /// beyond [`MAX_TEMPLATE_EXTENT`], or if a door is off the footprint, opens
    /// back into it, or is declared twice
    pub fn new(
        id: impl Into<String>,
        footprint: Vec<Coordinate>,
        doors: Vec<Door>,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(invalid_catalog(&"template identifier is empty"));
        }
        if footprint.is_empty() {
            return Err(invalid_catalog(&format!("template '{id}' has an empty footprint")));
        }

        let out_of_bounds = footprint.iter().find(|cell| {
            cell.x.unsigned_abs() > MAX_TEMPLATE_EXTENT.unsigned_abs()
                || cell.y.unsigned_abs() > MAX_TEMPLATE_EXTENT.unsigned_abs()
        });
        if let Some(cell) = out_of_bounds {
            return Err(invalid_catalog(&format!(
                "template '{id}' has cell {cell} beyond the extent limit of {MAX_TEMPLATE_EXTENT}"
            )));
        }

        let cells: HashSet<Coordinate> = footprint.iter().copied().collect();
        if cells.len() != footprint.len() {
            return Err(invalid_catalog(&format!(
                "template '{id}' lists a footprint cell twice"
            )));
        }

        let mut seen = HashSet::with_capacity(doors.len());
        for door in &doors {
            if !cells.contains(&door.at) {
                return Err(invalid_catalog(&format!(
                    "template '{id}' has door {door} outside its footprint"
                )));
            }
            if cells.contains(&door.target()) {
                return Err(invalid_catalog(&format!(
                    "template '{id}' has door {door} opening into its own footprint"
                )));
            }
            if !seen.insert(*door) {
                return Err(invalid_catalog(&format!(
                    "template '{id}' declares door {door} twice"
                )));
            }
        }

        Ok(Self {
            id,
            footprint,
            doors,
        })
    }

    /// Single-cell room at the origin with one door per given direction
    ///
    /// # Errors
    ///
    /// Returns an error if a direction is repeated
    pub fn single_cell(id: impl Into<String>, directions: &[Direction]) -> Result<Self> {
        let doors = directions
            .iter()
            .map(|direction| Door::new(Coordinate::ORIGIN, *direction))
            .collect();
        Self::new(id, vec![Coordinate::ORIGIN], doors)
    }

    /// Stable identifier handed to the renderer
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cells covered, relative to the origin
    pub fn footprint(&self) -> &[Coordinate] {
        &self.footprint
    }

    /// Doors, relative to the origin
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Whether the template has no door other than its connector
    pub const fn is_dead_end(&self) -> bool {
        self.doors.len() <= 1
    }
}

/// Corridor piece laid directly on a door
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallwayTemplate {
    id: String,
}

impl HallwayTemplate {
    /// Create a hallway template
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(invalid_catalog(&"hallway identifier is empty"));
        }
        Ok(Self { id })
    }

    /// Stable identifier handed to the renderer
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Room template anchored at an absolute origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPiece {
    template: Arc<RoomTemplate>,
    origin: Coordinate,
    footprint: Vec<Coordinate>,
    doors: Vec<Door>,
}

impl PlacedPiece {
    /// Anchor `template` at `origin`, deriving absolute cells and doors
    pub fn new(template: Arc<RoomTemplate>, origin: Coordinate) -> Self {
        let footprint = template
            .footprint()
            .iter()
            .map(|cell| *cell + origin)
            .collect();
        let doors = template
            .doors()
            .iter()
            .map(|door| door.translated(origin))
            .collect();
        Self {
            template,
            origin,
            footprint,
            doors,
        }
    }

    /// Anchor `template` so its `connector` door sits on `cell`
    pub fn attached(template: Arc<RoomTemplate>, connector: Door, cell: Coordinate) -> Self {
        Self::new(template, cell - connector.at)
    }

    /// Shared template this piece instantiates
    pub const fn template(&self) -> &Arc<RoomTemplate> {
        &self.template
    }

    /// Absolute origin
    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Absolute cells covered
    pub fn footprint(&self) -> &[Coordinate] {
        &self.footprint
    }

    /// Absolute doors
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Whether this piece exposes exactly `door`
    pub fn has_door(&self, door: Door) -> bool {
        self.doors.contains(&door)
    }
}
