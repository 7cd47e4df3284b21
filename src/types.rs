//! various types that are useful for working with the cube snake
use crate::error::SnakeError;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// column delta
    pub column: i8,
    /// level delta
    pub level: i8,
}

/// number of directions a segment can travel in
pub const N_DIRECTIONS: usize = 6;

/// Represents the direction a segment travels in on its next tick.
///
/// The discriminants match the integer codes used by cube firmware input
/// sources, see [`Direction::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// one step along the row
    Forward = 0,
    /// one step back along the row
    Backward = 1,
    /// one level up
    Up = 2,
    /// same position in the next row
    Left = 3,
    /// one level down
    Down = 4,
    /// same position in the previous row
    Right = 5,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
            Direction::Up => write!(f, "up"),
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl Direction {
    /// convert this direction to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::Forward => Vector { column: 1, level: 0 },
            Direction::Backward => Vector { column: -1, level: 0 },
            Direction::Up => Vector { column: 0, level: 1 },
            Direction::Left => Vector { column: 8, level: 0 },
            Direction::Down => Vector { column: 0, level: -1 },
            Direction::Right => Vector { column: -8, level: 0 },
        }
    }

    /// returns all the directions, in code order
    pub fn all() -> [Direction; N_DIRECTIONS] {
        [
            Direction::Forward,
            Direction::Backward,
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ]
    }

    /// converts this direction to its integer code. codes are the same order as `Direction::all()`
    pub fn as_code(&self) -> u8 {
        *self as u8
    }

    /// true for the directions that move within the column axis rather than between levels
    pub fn is_horizontal(&self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }
}

impl TryFrom<u8> for Direction {
    type Error = SnakeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::all()
            .get(code as usize)
            .copied()
            .ok_or(SnakeError::InvalidDirection(code))
    }
}

/// What happened during a legal tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOutcome {
    /// every segment moved one cell
    Moved,
    /// the head reached the food and the snake grew by one segment
    Ate,
    /// the snake ate and now fills every body slot, the game is won
    BoardFull,
}

impl ShiftOutcome {
    /// whether food was eaten on this tick
    pub fn ate(&self) -> bool {
        matches!(self, ShiftOutcome::Ate | ShiftOutcome::BoardFull)
    }
}

/// A game for which the length of the snake can be got.
pub trait LengthGettableGame {
    /// get the number of occupied body slots
    fn get_length(&self) -> u8;
}

/// A game for which the current tick interval can be got.
pub trait SpeedGettableGame {
    /// get the number of time units between two shifts
    fn get_speed(&self) -> u16;
}

/// A game where single body segments can be looked up, head is position 0
pub trait SegmentGettableGame {
    /// the column of the segment at `pos`
    fn column_at(&self, pos: usize) -> Result<i8, SnakeError>;

    /// the level of the segment at `pos`
    fn level_at(&self, pos: usize) -> Result<i8, SnakeError>;

    /// the direction the segment at `pos` moves in on the next tick
    fn direction_at(&self, pos: usize) -> Result<Direction, SnakeError>;
}

/// A game where the food point can be placed and read back
pub trait FoodSettableGame {
    /// Place the food, no checks are made against the body or the cube bounds.
    ///
    /// Only the head eats. Food under a body segment, or on a cell a body segment is about to
    /// enter, stays where it is until the head reaches it.
    fn set_food(&mut self, column: i8, level: i8);

    /// remove the food
    fn clear_food(&mut self);

    /// where the food is, if any has been placed
    fn get_food(&self) -> Option<Cell>;
}

/// A game where positions can be checked against the snake body
pub trait OverlapQueryableGame {
    /// is any body segment at this position?
    fn point_overlaps(&self, column: i8, level: i8) -> bool;
}

/// A game where the head can be steered
pub trait DirectionSettableGame {
    /// set the direction the head takes on the next tick
    fn change_direction(&mut self, direction: Direction);
}

/// A game which knows whether the snake has filled its body
pub trait BoardFullDeterminableGame {
    /// whether every body slot is occupied
    fn is_full(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes() {
        for (code, direction) in Direction::all().iter().enumerate() {
            assert_eq!(direction.as_code() as usize, code);
            assert_eq!(Direction::try_from(code as u8).unwrap(), *direction);
        }
        assert_eq!(
            Direction::try_from(6),
            Err(SnakeError::InvalidDirection(6))
        );
        assert_eq!(
            Direction::try_from(255),
            Err(SnakeError::InvalidDirection(255))
        );
    }

    #[test]
    fn test_left_and_right_change_rows() {
        assert_eq!(Direction::Left.to_vector(), Vector { column: 8, level: 0 });
        assert_eq!(Direction::Right.to_vector(), Vector { column: -8, level: 0 });
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Backward).unwrap(),
            "\"backward\""
        );
        let d: Direction = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(d, Direction::Up);
    }
}
