//! Input state polling
//!
//! Maps actions to keys and samples the keyboard into a per-tick snapshot.

use super::Action;
use macroquad::prelude::*;

/// Per-tick input snapshot consumed by the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// Edge-triggered: true only on the tick the jump key went down
    pub jump_pressed: bool,
}

/// Sample the keyboard into a tick snapshot. Call once per tick.
pub fn poll() -> TickInput {
    TickInput {
        left: action_down(Action::MoveLeft),
        right: action_down(Action::MoveRight),
        jump_held: action_down(Action::Jump),
        jump_pressed: action_pressed(Action::Jump),
    }
}

fn binding(action: Action) -> KeyCode {
    match action {
        Action::MoveLeft => KeyCode::A,
        Action::MoveRight => KeyCode::D,
        Action::Jump => KeyCode::W,
    }
}

/// Is the action's key currently held?
pub fn action_down(action: Action) -> bool {
    is_key_down(binding(action))
}

/// Did the action's key go down this frame?
pub fn action_pressed(action: Action) -> bool {
    is_key_pressed(binding(action))
}
