use core::fmt;

/// The 8 compass directions a character can step in. The numbering runs
/// counter-clockwise starting at east, so diagonal directions are exactly the
/// odd-numbered ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All 8 directions in numbering order.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The 4 cardinal (non-diagonal) directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn num(self) -> u8 {
        match self {
            Direction::East => 0,
            Direction::NorthEast => 1,
            Direction::North => 2,
            Direction::NorthWest => 3,
            Direction::West => 4,
            Direction::SouthWest => 5,
            Direction::South => 6,
            Direction::SouthEast => 7,
        }
    }

    /// The single-step tile offset of this direction. The y axis points north.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::North => (0, 1),
            Direction::NorthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::South => (0, -1),
            Direction::SouthEast => (1, -1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        self.num() % 2 == 1
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        Direction::ALL[((self.num() + 4) % 8) as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::NorthEast => "northeast",
            Direction::North => "north",
            Direction::NorthWest => "northwest",
            Direction::West => "west",
            Direction::SouthWest => "southwest",
            Direction::South => "south",
            Direction::SouthEast => "southeast",
        };
        write!(f, "{}", name)
    }
}
