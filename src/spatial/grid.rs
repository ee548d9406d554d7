//! Integer grid coordinates, cardinal directions and door connectors
//!
//! All arithmetic is exact `i32` addition. The y axis grows northward, so
//! `North` steps to `(x, y + 1)` and `East` steps to `(x + 1, y)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Grid cell identified by its integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coordinate {
    /// Column, growing eastward
    pub x: i32,
    /// Row, growing northward
    pub y: i32,
}

impl Coordinate {
    /// Grid origin where the start piece is placed
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell one step away in the given direction
    pub const fn step(self, direction: Direction) -> Self {
        let [dx, dy] = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.x, coordinate.y]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction a door faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward positive y
    North,
    /// Toward negative y
    South,
    /// Toward positive x
    East,
    /// Toward negative x
    West,
}

impl Direction {
    /// Every direction, in declaration order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction a matching door must face
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Unit step `[dx, dy]` for this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::North => [0, 1],
            Self::South => [0, -1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }

    /// Whether a hallway through a door facing this way runs north-south
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Outward-facing connector on the boundary of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door {
    /// Footprint cell the door sits on
    pub at: Coordinate,
    /// Direction the door opens toward
    pub direction: Direction,
}

impl Door {
    /// Create a door on `at` facing `direction`
    pub const fn new(at: Coordinate, direction: Direction) -> Self {
        Self { at, direction }
    }

    /// Cell the door opens into
    pub const fn target(self) -> Coordinate {
        self.at.step(self.direction)
    }

    /// The door that would meet this one from the other side
    pub const fn mate(self) -> Self {
        Self::new(self.target(), self.direction.opposite())
    }

    /// Same door shifted by `origin`
    pub fn translated(self, origin: Coordinate) -> Self {
        Self::new(self.at + origin, self.direction)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.at, self.direction)
    }
}
