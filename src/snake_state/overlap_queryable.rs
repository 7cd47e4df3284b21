use crate::types::OverlapQueryableGame;

use super::SnakeState;

impl OverlapQueryableGame for SnakeState {
    fn point_overlaps(&self, column: i8, level: i8) -> bool {
        self.body
            .iter()
            .map_while(|slot| slot.as_ref())
            .any(|s| s.cell.column == column && s.cell.level == level)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{COLUMNS_PER_ROW, LEVELS, ROWS};

    use super::*;

    #[test]
    fn test_point_overlaps() {
        let s = crate::state_fixture(include_str!("../../fixtures/three_segments.json"));
        assert!(s.point_overlaps(29, 2));
        assert!(s.point_overlaps(28, 2));
        assert!(s.point_overlaps(27, 2));
        assert!(!s.point_overlaps(30, 2));
        assert!(!s.point_overlaps(29, 1));
        assert!(!s.point_overlaps(-2, -2));
        assert!(!s.point_overlaps(-1, -1));
    }

    #[test]
    fn test_every_free_cell_is_free() {
        let s = SnakeState::new();
        let mut overlapping = 0;
        for level in 0..LEVELS {
            for column in 0..COLUMNS_PER_ROW * ROWS {
                if s.point_overlaps(column, level) {
                    overlapping += 1;
                    assert_eq!((column, level), (27, 2));
                }
            }
        }
        assert_eq!(overlapping, 1);
    }
}
