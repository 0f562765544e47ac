use crate::direction::Direction;
use core::fmt;
use std::ops::Add;

/// A tile location on the game map: x/y position plus the map layer
/// (elevation) the tile sits on. Value type, compared and hashed by
/// components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub layer: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32, layer: i32) -> Coordinate {
        Coordinate { x, y, layer }
    }

    /// The tile one step in the given direction, staying on the same layer.
    pub fn step(self, dir: Direction) -> Coordinate {
        let (dx, dy) = dir.offset();
        Coordinate::new(self.x + dx, self.y + dy, self.layer)
    }

    /// Number of 8-neighbourhood steps between two tiles, ignoring layers.
    pub fn chebyshev_distance(&self, other: &Coordinate) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Number of 4-neighbourhood steps between two tiles, ignoring layers.
    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Whether the other tile can be reached in a single step. Tiles on
    /// different layers are never adjacent.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.layer == other.layer && self != other && self.chebyshev_distance(other) == 1
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(self, dir: Direction) -> Coordinate {
        self.step(dir)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.layer)
    }
}
