use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass direction between two adjacent cells.
///
/// `Invalid` is returned by adjacency lookups when two cells have no defined
/// relation. It is never passed to a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Left,
    Down,
    Invalid,
}

impl Direction {
    /// Preferred enumeration order for the four real directions
    pub const CANDIDATES: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// `CANDIDATES` back to front
    pub const REVERSED: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    pub fn is_valid(self) -> bool {
        self != Direction::Invalid
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Invalid => Direction::Invalid,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Left => "Left",
            Direction::Down => "Down",
            Direction::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}
