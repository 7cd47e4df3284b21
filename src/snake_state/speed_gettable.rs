use crate::types::SpeedGettableGame;

use super::SnakeState;

impl SpeedGettableGame for SnakeState {
    fn get_speed(&self) -> u16 {
        self.speed
    }
}
