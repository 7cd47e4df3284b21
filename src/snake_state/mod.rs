//! the snake state machine and its capability implementations
use std::fmt::{self, Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SnakeError;
use crate::frame_representation::Frame;
use crate::grid::{out_of_bounds, Cell, COLUMNS_PER_ROW, LEVELS, ROWS};
use crate::speed::SpeedProfile;
use crate::types::{BoardFullDeterminableGame, Direction, ShiftOutcome};

mod board_full_determinable;
mod direction_settable;
mod food_settable;
mod length_gettable;
mod overlap_queryable;
mod segment_gettable;
mod speed_gettable;

/// Number of body slots, the snake can never be longer than this
pub const CAPACITY: usize = 10;

/// Where a new or reset snake starts
pub const START: Segment = Segment {
    cell: Cell::new(27, 2),
    direction: Direction::Forward,
};

/// A single piece of the snake body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// where the segment currently is
    pub cell: Cell,
    /// the way it moves on the next tick
    pub direction: Direction,
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cell, self.direction)
    }
}

/// The snake on the cube: body, tick interval and food.
///
/// Body slots are stored head first in a fixed array. Slots `[0, length)` are occupied and
/// slots `[length, CAPACITY)` are `None`, no allocation happens after construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SnakeState {
    body: [Option<Segment>; CAPACITY],
    length: u8,
    speed: u16,
    food: Option<Cell>,
    profile: SpeedProfile,
}

impl Default for SnakeState {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeState {
    /// A length one snake at [START] using the default [SpeedProfile]
    pub fn new() -> Self {
        Self::with_speed_profile(SpeedProfile::default())
    }

    /// A length one snake at [START] whose interval follows `profile`
    pub fn with_speed_profile(profile: SpeedProfile) -> Self {
        let mut body = [None; CAPACITY];
        body[0] = Some(START);
        SnakeState {
            body,
            length: 1,
            speed: profile.initial,
            food: None,
            profile,
        }
    }

    /// Like [SnakeState::with_speed_profile], but refuses a profile that starts below its floor
    pub fn try_with_speed_profile(profile: SpeedProfile) -> Result<Self, SnakeError> {
        profile.validate()?;
        Ok(Self::with_speed_profile(profile))
    }

    /// Back to the freshly constructed state, keeping the speed profile
    pub fn reset(&mut self) {
        *self = Self::with_speed_profile(self.profile);
    }

    /// the profile the tick interval follows
    pub fn speed_profile(&self) -> SpeedProfile {
        self.profile
    }

    /// the raw body slots, unoccupied slots are `None`
    pub fn slots(&self) -> &[Option<Segment>; CAPACITY] {
        &self.body
    }

    /// occupied segments from head to tail
    pub fn iter_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.body.iter().take(self.length as usize).flatten()
    }

    /// the head segment
    pub fn head(&self) -> Segment {
        self.body[0].expect("the head slot is always occupied")
    }

    /// Checks that exactly the first `length` slots are occupied
    pub fn assert_consistency(&self) -> bool {
        let length = self.length as usize;
        (1..=CAPACITY).contains(&length)
            && self
                .body
                .iter()
                .enumerate()
                .all(|(i, slot)| slot.is_some() == (i < length))
    }

    /// Advances the snake by one tick.
    ///
    /// Every segment moves one cell in its own direction, then takes over the direction the
    /// segment in front of it had, so the body retraces the head's path. When the head is about
    /// to enter the food cell the snake grows into it instead and the rest of the body stays put.
    ///
    /// Returns [SnakeError::OutOfBounds] if any segment that would move is about to leave the
    /// cube, in which case nothing is changed and the game is over until [SnakeState::reset].
    #[instrument(level = "trace", skip_all)]
    pub fn shift(&mut self) -> Result<ShiftOutcome, SnakeError> {
        let head = self.head();
        check_bounds(0, head)?;

        let next = head.cell.in_direction(head.direction);
        if self.food == Some(next) && !self.is_full() {
            let full = self.eat_detection(next);
            return Ok(if full {
                ShiftOutcome::BoardFull
            } else {
                ShiftOutcome::Ate
            });
        }

        for (pos, segment) in self.iter_segments().enumerate().skip(1) {
            check_bounds(pos, *segment)?;
        }

        let length = self.length as usize;
        let mut directions = [Direction::Forward; CAPACITY];
        for (direction, segment) in directions.iter_mut().zip(self.iter_segments()) {
            *direction = segment.direction;
        }

        for (pos, segment) in self.body[..length].iter_mut().flatten().enumerate() {
            segment.cell = segment.cell.in_direction(directions[pos]);
            if pos > 0 {
                segment.direction = directions[pos - 1];
            }
        }

        Ok(ShiftOutcome::Moved)
    }

    /// Grows the snake into `next` if that's where the food is.
    ///
    /// The new head carries the old head's direction and the old head becomes the second
    /// segment, so growing works the same from any length. The food is consumed and the interval
    /// shortens. Returns true when this meal filled the last body slot. A full snake can't grow
    /// and leaves the food where it is.
    pub fn eat_detection(&mut self, next: Cell) -> bool {
        if self.food != Some(next) || self.is_full() {
            return false;
        }

        let length = self.length as usize;
        let direction = self.head().direction;
        self.body.copy_within(0..length, 1);
        self.body[0] = Some(Segment {
            cell: next,
            direction,
        });
        self.length += 1;
        self.speed = self.profile.next(self.speed);
        self.food = None;

        debug!(
            length = self.length,
            speed = self.speed,
            "snake ate at {}", next
        );
        if self.is_full() {
            debug!("snake filled every body slot");
        }
        self.is_full()
    }

    /// Builds a snake from a frame, will return an error if the frame doesn't describe a snake
    /// that fits in [CAPACITY] slots with every segment somewhere a segment can be, or if the
    /// profile is invalid
    pub fn convert_from_frame(frame: Frame, profile: SpeedProfile) -> Result<Self, SnakeError> {
        profile.validate()?;

        if frame.body.is_empty() {
            return Err(SnakeError::InvalidFrame("snake has no head"));
        }

        if frame.body.len() > CAPACITY {
            return Err(SnakeError::InvalidFrame(
                "body is longer than the snake capacity",
            ));
        }

        if frame.length as usize != frame.body.len() {
            return Err(SnakeError::InvalidFrame("length doesn't match the body"));
        }

        if !frame.body.iter().all(|s| s.cell.reachable()) {
            return Err(SnakeError::InvalidFrame("body segment is off the cube"));
        }

        let mut body = [None; CAPACITY];
        for (slot, segment) in body.iter_mut().zip(frame.body) {
            *slot = Some(segment);
        }

        Ok(SnakeState {
            body,
            length: frame.length,
            speed: frame.speed,
            food: frame.food,
            profile,
        })
    }

    /// snapshot of everything a display driver needs
    pub fn frame(&self) -> Frame {
        Frame {
            length: self.length,
            speed: self.speed,
            food: self.food,
            body: self.iter_segments().copied().collect(),
        }
    }
}

fn check_bounds(segment: usize, s: Segment) -> Result<(), SnakeError> {
    if out_of_bounds(s.cell, s.direction) {
        debug!(segment, "game over, {} would leave the cube", s);
        return Err(SnakeError::OutOfBounds {
            segment,
            cell: s.cell,
            direction: s.direction,
        });
    }
    Ok(())
}

impl Display for SnakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = self.head().cell;
        for level in (0..LEVELS).rev() {
            writeln!(f, "level {}", level)?;
            for row in 0..ROWS {
                for x in 0..COLUMNS_PER_ROW {
                    let cell = Cell::new(row * COLUMNS_PER_ROW + x, level);
                    if cell == head {
                        write!(f, "H")?;
                    } else if self.iter_segments().any(|s| s.cell == cell) {
                        write!(f, "s")?;
                    } else if self.food == Some(cell) {
                        write!(f, "f")?;
                    } else {
                        write!(f, ".")?;
                    }
                    write!(f, " ")?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f, "{}", self.iter_segments().join(" -> "))?;
        let frame = serde_json::to_string(&self.frame()).map_err(|_| fmt::Error)?;
        writeln!(f, "{}", frame)?;
        Ok(())
    }
}
