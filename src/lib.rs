#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for playing snake on an 8x8x4 LED cube.
//!
//! The whole game lives in [SnakeState](snake_state::SnakeState): a fixed capacity body, the
//! tick interval and the food point. An outer loop owns one state and drives it:
//!
//! ```
//! use cube_snake_types::snake_state::SnakeState;
//! use cube_snake_types::types::{
//!     DirectionSettableGame, Direction, FoodSettableGame, OverlapQueryableGame, ShiftOutcome,
//!     SpeedGettableGame,
//! };
//!
//! let mut snake = SnakeState::new();
//! if !snake.point_overlaps(28, 2) {
//!     snake.set_food(28, 2);
//! }
//! assert_eq!(snake.shift(), Ok(ShiftOutcome::Ate));
//! assert_eq!(snake.get_speed(), 640);
//!
//! snake.change_direction(Direction::Up);
//! assert_eq!(snake.shift(), Ok(ShiftOutcome::Moved));
//! snake.shift().expect_err("the head is on the top level");
//! snake.reset();
//! ```
//!
//! Rendering, input and choosing where food goes all stay with the caller.

use frame_representation::Frame;
use snake_state::SnakeState;

pub mod error;
pub mod frame_representation;
pub mod grid;
pub mod snake_state;
pub mod speed;
pub mod types;

/// Loads a snake from a json frame literal using the default speed profile
pub fn state_fixture(state_fixture: &str) -> SnakeState {
    let f: Result<Frame, _> = serde_json::from_str(state_fixture);
    let f = f.expect("the json literal is valid");
    f.as_snake_state().expect("the frame describes a valid snake")
}
