use crate::types::LengthGettableGame;

use super::SnakeState;

impl LengthGettableGame for SnakeState {
    fn get_length(&self) -> u8 {
        self.length
    }
}
