//! Backtracking dungeon layout generation from modular room and hallway pieces
//!
//! Starting from a fixed start room, the search repeatedly resolves the most
//! recent unresolved door by attaching a compatible room through a hallway,
//! rolling back exactly on dead ends. Attempts that exceed their node budget
//! are discarded and restarted with fresh randomness.

#![forbid(unsafe_code)]

/// Backtracking search, attempt control and accepted layouts
pub mod algorithm;
/// Room and hallway templates and the pools they are drawn from
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid coordinates, doors, occupancy and the door frontier
pub mod spatial;

pub use algorithm::controller::{Generator, generate};
pub use algorithm::layout::{Layout, PlacementRecord};
pub use catalog::Catalog;
pub use io::configuration::GenerationConfig;
pub use io::error::{AbandonReason, GenerationError, Result};
