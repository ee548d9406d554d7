//! Spatial data structures for the layout grid
//!
//! This module contains spatial-related functionality including:
//! - Coordinates, directions and door connectors
//! - Occupancy tracking and the frontier of unresolved doors

/// Coordinates, directions and doors
pub mod grid;
/// Claimed cells and unresolved doors
pub mod occupancy;

pub use grid::{Coordinate, Direction, Door};
pub use occupancy::{Frontier, Occupancy};
