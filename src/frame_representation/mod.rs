#![allow(missing_docs)]
//! serializable snapshots of a snake, the shape a display driver or a test fixture works with
use serde::{Deserialize, Serialize};

use crate::error::SnakeError;
use crate::grid::Cell;
use crate::snake_state::{Segment, SnakeState};
use crate::speed::SpeedProfile;

/// Everything needed to draw one tick of the game, body is ordered head to tail
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub length: u8,
    pub speed: u16,
    pub food: Option<Cell>,
    pub body: Vec<Segment>,
}

impl Frame {
    /// converts to a live snake using the default speed profile
    pub fn as_snake_state(&self) -> Result<SnakeState, SnakeError> {
        SnakeState::convert_from_frame(self.clone(), SpeedProfile::default())
    }

    pub fn head(&self) -> Option<&Segment> {
        self.body.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn fixture() -> Frame {
        let frame_fixture = include_str!("../../fixtures/three_segments.json");
        let f: Result<Frame, _> = serde_json::from_slice(frame_fixture.as_bytes());
        f.expect("the json literal is valid")
    }

    #[test]
    fn test_fixture_parses() {
        let f = fixture();
        assert_eq!(f.length, 3);
        assert_eq!(f.speed, 480);
        assert_eq!(f.food, Some(Cell::new(12, 0)));
        assert_eq!(
            f.head(),
            Some(&Segment {
                cell: Cell::new(29, 2),
                direction: Direction::Forward,
            })
        );
    }

    #[test]
    fn test_frame_of_new_snake() {
        let frame = SnakeState::new().frame();
        assert_eq!(
            serde_json::to_string(&frame).unwrap(),
            r#"{"length":1,"speed":800,"food":null,"body":[{"cell":{"column":27,"level":2},"direction":"forward"}]}"#
        );
    }

    #[test]
    fn test_invalid_frames_are_rejected() {
        let mut f = fixture();
        f.length = 4;
        assert_eq!(
            f.as_snake_state(),
            Err(SnakeError::InvalidFrame("length doesn't match the body"))
        );
        f.body.clear();
        assert_eq!(
            f.as_snake_state(),
            Err(SnakeError::InvalidFrame("snake has no head"))
        );
    }
}
