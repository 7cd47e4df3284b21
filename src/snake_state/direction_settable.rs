use crate::types::{Direction, DirectionSettableGame};

use super::SnakeState;

impl DirectionSettableGame for SnakeState {
    fn change_direction(&mut self, direction: Direction) {
        if let Some(head) = self.body[0].as_mut() {
            head.direction = direction;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use crate::error::SnakeError;
    use crate::types::SegmentGettableGame;

    use super::*;

    #[test]
    fn test_change_direction_only_touches_the_head() {
        let mut s = crate::state_fixture(include_str!("../../fixtures/three_segments.json"));
        s.change_direction(Direction::Down);
        assert_eq!(s.direction_at(0), Ok(Direction::Down));
        assert_eq!(s.direction_at(1), Ok(Direction::Forward));
        assert_eq!(s.direction_at(2), Ok(Direction::Forward));
        assert_eq!(s.column_at(0), Ok(29));
    }

    #[test]
    fn test_direction_codes_from_input() {
        let mut s = SnakeState::new();
        let res = Direction::try_from(2).map(|d| s.change_direction(d));
        assert!(res.is_ok());
        assert_eq!(s.direction_at(0), Ok(Direction::Up));

        let res = Direction::try_from(9).map(|d| s.change_direction(d));
        assert_eq!(res, Err(SnakeError::InvalidDirection(9)));
        assert_eq!(s.direction_at(0), Ok(Direction::Up));
    }
}
