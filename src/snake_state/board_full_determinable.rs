use crate::types::BoardFullDeterminableGame;

use super::{SnakeState, CAPACITY};

impl BoardFullDeterminableGame for SnakeState {
    fn is_full(&self) -> bool {
        self.length as usize == CAPACITY
    }
}
