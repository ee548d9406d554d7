//! Scene renderer collaborators receiving committed layouts

use crate::algorithm::layout::PlacementRecord;
use crate::io::error::Result;
use serde::Serialize;
use std::io::Write;

/// Owner of whatever represents the current layout outside the search
///
/// Implementations only ever see complete, accepted layouts.
pub trait SceneRenderer {
    /// Destroy the previously instantiated layout
    ///
    /// # Errors
    ///
    /// Returns an error if the scene cannot be cleared
    fn clear(&mut self) -> Result<()>;

    /// Instantiate a layout from its ordered placement list
    ///
    /// # Errors
    ///
    /// Returns an error if the placements cannot be instantiated
    fn instantiate(&mut self, placements: &[PlacementRecord]) -> Result<()>;
}

#[derive(Serialize)]
struct LayoutDocument<'a> {
    layout: usize,
    placements: &'a [PlacementRecord],
}

/// Writes each committed layout as one JSON document per line
#[derive(Debug)]
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesRenderer<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Layouts written so far
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the writer
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> SceneRenderer for JsonLinesRenderer<W> {
    // Earlier lines stay in the stream; each line is a complete layout
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn instantiate(&mut self, placements: &[PlacementRecord]) -> Result<()> {
        let document = LayoutDocument {
            layout: self.written,
            placements,
        };
        serde_json::to_writer(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.written += 1;
        Ok(())
    }
}

/// In-memory scene keeping the live placement list
#[derive(Debug, Clone, Default)]
pub struct SceneRecorder {
    live: Vec<PlacementRecord>,
    instantiations: usize,
    clears: usize,
}

impl SceneRecorder {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements currently instantiated
    pub fn live(&self) -> &[PlacementRecord] {
        &self.live
    }

    /// Number of layouts instantiated
    pub const fn instantiations(&self) -> usize {
        self.instantiations
    }

    /// Number of times the scene was cleared
    pub const fn clears(&self) -> usize {
        self.clears
    }
}

impl SceneRenderer for SceneRecorder {
    fn clear(&mut self) -> Result<()> {
        self.live.clear();
        self.clears += 1;
        Ok(())
    }

    fn instantiate(&mut self, placements: &[PlacementRecord]) -> Result<()> {
        self.live.extend_from_slice(placements);
        self.instantiations += 1;
        Ok(())
    }
}
