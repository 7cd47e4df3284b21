use crate::{grid::Cell, types::FoodSettableGame};

use super::SnakeState;

impl FoodSettableGame for SnakeState {
    fn set_food(&mut self, column: i8, level: i8) {
        self.food = Some(Cell::new(column, level));
    }

    fn clear_food(&mut self) {
        self.food = None;
    }

    fn get_food(&self) -> Option<Cell> {
        self.food
    }
}
