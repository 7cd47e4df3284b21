//! the error type shared by the whole crate
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::grid::Cell;
use crate::types::Direction;

/// Everything that can go wrong while driving a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeError {
    /// A segment was about to leave the cube. This ends the game, only `reset` recovers.
    OutOfBounds {
        /// body position of the offending segment, 0 is the head
        segment: usize,
        /// where the segment was before the tick
        cell: Cell,
        /// the direction it tried to move in
        direction: Direction,
    },
    /// A segment lookup past the end of the body
    SegmentOutOfRange {
        /// the requested body position
        pos: usize,
        /// how many segments the snake has
        length: u8,
    },
    /// An integer direction code outside of 0..=5
    InvalidDirection(u8),
    /// A frame that doesn't describe a valid snake
    InvalidFrame(&'static str),
    /// A speed profile whose interval could never follow its own rules
    InvalidSpeedProfile(&'static str),
}

impl Display for SnakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::OutOfBounds {
                segment,
                cell,
                direction,
            } => write!(
                f,
                "segment {} at {} can't move {} without leaving the cube",
                segment, cell, direction
            ),
            SnakeError::SegmentOutOfRange { pos, length } => write!(
                f,
                "no segment at position {}, snake has length {}",
                pos, length
            ),
            SnakeError::InvalidDirection(code) => write!(f, "invalid direction code {}", code),
            SnakeError::InvalidFrame(reason) => write!(f, "invalid frame: {}", reason),
            SnakeError::InvalidSpeedProfile(reason) => {
                write!(f, "invalid speed profile: {}", reason)
            }
        }
    }
}

impl Error for SnakeError {}

impl SnakeError {
    /// true for the errors that end the current game
    pub fn is_game_over(&self) -> bool {
        matches!(self, SnakeError::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = SnakeError::OutOfBounds {
            segment: 0,
            cell: Cell::new(7, 2),
            direction: Direction::Forward,
        };
        assert_eq!(
            e.to_string(),
            "segment 0 at (7, 2) can't move forward without leaving the cube"
        );
        assert!(e.is_game_over());

        let e = SnakeError::SegmentOutOfRange { pos: 3, length: 1 };
        assert_eq!(e.to_string(), "no segment at position 3, snake has length 1");
        assert!(!e.is_game_over());
    }
}
