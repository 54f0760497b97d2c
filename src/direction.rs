/// 8 fixed movement directions, clockwise from north, for tiny predictable loops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All possible directions, in ring order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit cell offset for this direction (positive y is north)
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Direction of an arbitrary offset, collapsed to signs; `None` for (0, 0)
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (0, 1) => Some(Direction::North),
            (1, 1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::SouthEast),
            (0, -1) => Some(Direction::South),
            (-1, -1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Steps around the compass ring between two directions (0..=4)
    #[inline]
    pub const fn ring_distance(self, other: Direction) -> u8 {
        let diff = (self as i8 - other as i8).unsigned_abs();
        if diff > 4 {
            8 - diff
        } else {
            diff
        }
    }
}
