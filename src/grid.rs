//! Geometry of the cube.
//!
//! The cube is addressed with a flattened `column` and a `level`. A column packs a row and a
//! position within that row as `row * COLUMNS_PER_ROW + x`, so moving to the neighbouring row
//! keeps `x` and changes the column by [COLUMNS_PER_ROW]. Levels stack vertically.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Direction, Vector};

/// Positions in a single row
pub const COLUMNS_PER_ROW: i8 = 8;

/// Rows on a single level
pub const ROWS: i8 = 8;

/// Vertical layers of the cube
pub const LEVELS: i8 = 4;

/// Largest addressable flattened column
pub const MAX_COLUMN: i8 = COLUMNS_PER_ROW * ROWS - 1;

/// A cube coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// flattened row/position coordinate
    pub column: i8,
    /// vertical layer
    pub level: i8,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.level)
    }
}

impl Cell {
    /// a cell from its flattened column and level
    pub const fn new(column: i8, level: i8) -> Self {
        Cell { column, level }
    }

    /// the row this column sits in
    pub fn row(&self) -> i8 {
        self.column.div_euclid(COLUMNS_PER_ROW)
    }

    /// the position within the row
    pub fn x(&self) -> i8 {
        self.column.rem_euclid(COLUMNS_PER_ROW)
    }

    /// offsets this cell, saturating at the ends of the `i8` range
    pub fn add_vec(&self, v: Vector) -> Cell {
        Cell {
            column: self.column.saturating_add(v.column),
            level: self.level.saturating_add(v.level),
        }
    }

    /// Returns the Cell from moving once in the given direction. No bounds are applied, check
    /// [out_of_bounds] first.
    pub fn in_direction(&self, direction: Direction) -> Cell {
        self.add_vec(direction.to_vector())
    }

    /// whether this cell is inside the cube
    pub fn on_cube(&self) -> bool {
        (0..=MAX_COLUMN).contains(&self.column) && (0..LEVELS).contains(&self.level)
    }

    /// Whether a segment can ever be here. A single row change may carry a column one row past
    /// either end of the cube, levels never leave it.
    pub fn reachable(&self) -> bool {
        (-COLUMNS_PER_ROW..=MAX_COLUMN + COLUMNS_PER_ROW).contains(&self.column)
            && (0..LEVELS).contains(&self.level)
    }
}

/// Whether a segment at `cell` heading in `direction` is about to leave the cube.
///
/// Horizontal moves are refused from either edge of a row and from column 0, vertical moves
/// from the top and bottom level. Anything past the last column is always refused.
pub fn out_of_bounds(cell: Cell, direction: Direction) -> bool {
    let column = i16::from(cell.column);
    let level = i16::from(cell.level);
    let per_row = i16::from(COLUMNS_PER_ROW);

    if column > i16::from(MAX_COLUMN) {
        return true;
    }

    match direction {
        Direction::Up => (level + 1) % i16::from(LEVELS) == 0,
        Direction::Down => level - 1 < 0,
        _ => {
            let right_edge = (column + 1) % per_row == 0 && column != 0;
            let left_edge = column % per_row == 0 && column != 0;
            right_edge || left_edge || column - 1 < 0
        }
    }
}
