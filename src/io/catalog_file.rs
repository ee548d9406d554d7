//! JSON catalog files
//!
//! ```json
//! {
//!   "start": {"id": "start", "footprint": [[0, 0]], "doors": [{"at": [0, 0], "direction": "east"}]},
//!   "rooms": [{"id": "corridor", "footprint": [[0, 0]], "doors": [
//!     {"at": [0, 0], "direction": "west"}, {"at": [0, 0], "direction": "east"}]}],
//!   "terminals": [{"id": "closet", "footprint": [[0, 0]], "doors": [{"at": [0, 0], "direction": "west"}]}],
//!   "hallways": {"vertical": "hall_ns", "horizontal": "hall_ew"}
//! }
//! ```

use crate::catalog::pools::Catalog;
use crate::catalog::template::{HallwayTemplate, RoomTemplate};
use crate::io::error::{GenerationError, Result, file_system_error};
use crate::spatial::grid::{Coordinate, Door};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Room template as written in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSpec {
    /// Stable identifier
    pub id: String,
    /// Cells covered, relative to the origin
    pub footprint: Vec<Coordinate>,
    /// Doors, relative to the origin
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl TemplateSpec {
    fn into_template(self) -> Result<RoomTemplate> {
        RoomTemplate::new(self.id, self.footprint, self.doors)
    }
}

/// Hallway identifiers by orientation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HallwaySpec {
    /// Hallway for north and south doors
    pub vertical: String,
    /// Hallway for east and west doors
    pub horizontal: String,
}

/// Catalog as written in a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Template placed at the origin
    pub start: TemplateSpec,
    /// Designated target template
    #[serde(default)]
    pub target: Option<TemplateSpec>,
    /// General room pool
    pub rooms: Vec<TemplateSpec>,
    /// Terminal (dead-end) room pool
    #[serde(default)]
    pub terminals: Vec<TemplateSpec>,
    /// Hallway templates
    pub hallways: HallwaySpec,
}

impl CatalogFile {
    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text doesn't match the catalog schema
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| GenerationError::CatalogParse {
            path: "<inline>".into(),
            source,
        })
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| file_system_error(path, "read catalog", source))?;
        serde_json::from_str(&text).map_err(|source| GenerationError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate into a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if any template or the catalog as a whole is invalid
    pub fn into_catalog(self) -> Result<Catalog> {
        let start = self.start.into_template()?;
        let general = self
            .rooms
            .into_iter()
            .map(TemplateSpec::into_template)
            .collect::<Result<Vec<_>>>()?;
        let terminal = self
            .terminals
            .into_iter()
            .map(TemplateSpec::into_template)
            .collect::<Result<Vec<_>>>()?;

        let catalog = Catalog::new(
            start,
            general,
            terminal,
            HallwayTemplate::new(self.hallways.vertical)?,
            HallwayTemplate::new(self.hallways.horizontal)?,
        )?;

        match self.target {
            Some(target) => catalog.with_target(target.into_template()?),
            None => Ok(catalog),
        }
    }
}

/// Load and validate a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    CatalogFile::from_path(path)?.into_catalog()
}
