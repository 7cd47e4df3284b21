//! Tick interval configuration
use serde::{Deserialize, Serialize};

use crate::error::SnakeError;

/// How the tick interval evolves as the snake eats.
///
/// Defaults match the cube firmware: start at 800 time units, 160 faster per meal. The floor
/// keeps the interval from reaching zero before the body fills up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedProfile {
    /// interval for a freshly reset snake
    pub initial: u16,
    /// how much faster each meal makes the snake
    pub decrement: u16,
    /// the interval never drops below this
    pub floor: u16,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        SpeedProfile {
            initial: 800,
            decrement: 160,
            floor: 80,
        }
    }
}

impl SpeedProfile {
    /// the interval after one more meal, never longer than `speed`
    pub fn next(&self, speed: u16) -> u16 {
        speed.saturating_sub(self.decrement).max(self.floor).min(speed)
    }

    /// Refuses profiles that start below their own floor
    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.initial < self.floor {
            return Err(SnakeError::InvalidSpeedProfile(
                "initial interval is below the floor",
            ));
        }
        Ok(())
    }
}
