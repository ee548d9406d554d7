//! Read-only collection of templates supplied by the caller

use crate::catalog::template::{HallwayTemplate, RoomTemplate};
use crate::io::error::{Result, invalid_catalog};
use crate::spatial::grid::Direction;
use std::collections::HashSet;
use std::sync::Arc;

/// Everything the search may place
///
/// General templates grow the layout; terminal templates only close a branch
/// and are the sole pool offered for the placement that reaches the size cap.
#[derive(Debug, Clone)]
pub struct Catalog {
    start: Arc<RoomTemplate>,
    target: Option<Arc<RoomTemplate>>,
    general: Vec<Arc<RoomTemplate>>,
    terminal: Vec<Arc<RoomTemplate>>,
    vertical_hallway: Arc<HallwayTemplate>,
    horizontal_hallway: Arc<HallwayTemplate>,
}

impl Catalog {
    /// Assemble and validate a catalog
    ///
    /// An empty terminal pool is accepted: generation then abandons any
    /// branch that would reach the size cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the general pool is empty, the start template has
    /// no doors, or two templates share an identifier
    pub fn new(
        start: RoomTemplate,
        general: Vec<RoomTemplate>,
        terminal: Vec<RoomTemplate>,
        vertical_hallway: HallwayTemplate,
        horizontal_hallway: HallwayTemplate,
    ) -> Result<Self> {
        if general.is_empty() {
            return Err(invalid_catalog(&"general room pool is empty"));
        }
        if start.doors().is_empty() {
            return Err(invalid_catalog(&format!(
                "start template '{}' has no doors",
                start.id()
            )));
        }

        for template in &terminal {
            if !template.is_dead_end() {
                log::warn!(
                    "terminal template '{}' has {} doors; extra doors keep branches open",
                    template.id(),
                    template.doors().len()
                );
            }
        }

        let catalog = Self {
            start: Arc::new(start),
            target: None,
            general: general.into_iter().map(Arc::new).collect(),
            terminal: terminal.into_iter().map(Arc::new).collect(),
            vertical_hallway: Arc::new(vertical_hallway),
            horizontal_hallway: Arc::new(horizontal_hallway),
        };
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// Attach the designated target template
    ///
    /// # Errors
    ///
    /// Returns an error if its identifier collides with another template
    pub fn with_target(mut self, target: RoomTemplate) -> Result<Self> {
        self.target = Some(Arc::new(target));
        self.check_unique_ids()?;
        Ok(self)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let rooms = std::iter::once(&self.start)
            .chain(self.target.iter())
            .chain(self.general.iter())
            .chain(self.terminal.iter())
            .map(|template| template.id());
        let hallways = [&self.vertical_hallway, &self.horizontal_hallway]
            .into_iter()
            .map(|template| template.id());

        for id in rooms.chain(hallways) {
            if !seen.insert(id) {
                return Err(invalid_catalog(&format!(
                    "template identifier '{id}' is used more than once"
                )));
            }
        }
        Ok(())
    }

    /// Template placed at the origin
    pub const fn start(&self) -> &Arc<RoomTemplate> {
        &self.start
    }

    /// Designated target template, consumed by callers
    pub const fn target(&self) -> Option<&Arc<RoomTemplate>> {
        self.target.as_ref()
    }

    /// Templates used while the layout is below its size cap
    pub fn general(&self) -> &[Arc<RoomTemplate>] {
        &self.general
    }

    /// Dead-end templates used to reach the size cap
    pub fn terminal(&self) -> &[Arc<RoomTemplate>] {
        &self.terminal
    }

    /// Pool to draw from when the next placement makes `room_count` rooms
    pub fn pool_for(&self, room_count: usize, max_size: usize) -> &[Arc<RoomTemplate>] {
        if room_count == max_size {
            &self.terminal
        } else {
            &self.general
        }
    }

    /// Hallway laid on a door facing `direction`
    pub const fn hallway_for(&self, direction: Direction) -> &Arc<HallwayTemplate> {
        if direction.is_vertical() {
            &self.vertical_hallway
        } else {
            &self.horizontal_hallway
        }
    }
}
