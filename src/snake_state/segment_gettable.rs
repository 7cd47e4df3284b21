use crate::{error::SnakeError, types::Direction, types::SegmentGettableGame};

use super::{Segment, SnakeState};

impl SnakeState {
    /// the segment at `pos`, head is 0
    pub fn segment_at(&self, pos: usize) -> Result<Segment, SnakeError> {
        self.body[..self.length as usize]
            .get(pos)
            .copied()
            .flatten()
            .ok_or(SnakeError::SegmentOutOfRange {
                pos,
                length: self.length,
            })
    }
}

impl SegmentGettableGame for SnakeState {
    fn column_at(&self, pos: usize) -> Result<i8, SnakeError> {
        self.segment_at(pos).map(|s| s.cell.column)
    }

    fn level_at(&self, pos: usize) -> Result<i8, SnakeError> {
        self.segment_at(pos).map(|s| s.cell.level)
    }

    fn direction_at(&self, pos: usize) -> Result<Direction, SnakeError> {
        self.segment_at(pos).map(|s| s.direction)
    }
}
