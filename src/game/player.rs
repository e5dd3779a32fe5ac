//! Player state
//!
//! Plain data; behavior lives in the runtime and collision systems.

use crate::math::Vec2;
use serde::{Deserialize, Serialize};

/// Number of frames in the run cycle
pub const NUM_RUNNING_FRAMES: u8 = 3;
/// The run cycle advances once every this many simulation ticks
pub const RUN_FRAME_TICKS: u64 = 5;

/// Horizontal facing, used for sprite flipping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// The controllable character.
///
/// `position` is the top-left corner of the bounding box in pixel space,
/// `velocity` is in pixels/second. Constructed once at startup and mutated
/// every tick by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Bounding box width in pixels
    pub width: i32,
    /// Bounding box height in pixels
    pub height: i32,
    pub facing: Facing,
    /// Run-cycle frame index, always below [`NUM_RUNNING_FRAMES`]
    pub frame: u8,
    /// Resting on solid ground this tick
    pub grounded: bool,
}

impl Player {
    /// Spawn at rest. The bounding box is 13 pixels wide and one tile
    /// tall, slightly narrower than the 16px sprite cell.
    pub fn spawn(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            width: 13,
            height: 16,
            facing: Facing::Right,
            frame: 0,
            grounded: false,
        }
    }

    /// Pick the sprite for the current state. Airborne wins over running;
    /// standing requires full rest on both axes.
    pub fn sprite(&self) -> PlayerSprite {
        if self.velocity.y != 0.0 {
            PlayerSprite::Jumping
        } else if self.velocity.x == 0.0 {
            PlayerSprite::Standing
        } else {
            PlayerSprite::Running(self.frame)
        }
    }
}

/// Sprite selection derived from player state, queried by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSprite {
    Standing,
    Running(u8),
    Jumping,
}

impl PlayerSprite {
    /// Column of this sprite in the 16px-wide character sheet strip.
    ///
    /// The sheet also carries a turning frame (column 4) and a crouching
    /// frame (column 6) that no state selects yet.
    pub fn sheet_column(self) -> u32 {
        match self {
            PlayerSprite::Standing => 0,
            PlayerSprite::Running(frame) => 1 + frame as u32,
            PlayerSprite::Jumping => 5,
        }
    }
}
