//! Room and hallway templates and the pools the search draws from

/// Validated catalog of general, terminal, start and hallway templates
pub mod pools;
/// Room and hallway templates and placed pieces
pub mod template;

pub use pools::Catalog;
pub use template::{HallwayTemplate, PlacedPiece, RoomTemplate};
