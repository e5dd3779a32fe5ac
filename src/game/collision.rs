//! Collision resolution
//!
//! Axis-separated collision of the player's bounding box against the tile
//! grid. Horizontal is resolved before vertical; the order decides what
//! happens when a moving box meets a tile corner. A blocked edge snaps
//! flush to the tile face and zeroes that velocity component.

use super::player::Player;
use crate::math::Vec2;
use crate::world::{TileGrid, RENDER_W, TILE_SIZE};

/// Result of one resolved movement step
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Corrected position after collision
    pub position: Vec2,
    /// Velocity with blocked components zeroed
    pub velocity: Vec2,
    /// Is the character resting on solid ground?
    pub grounded: bool,
}

/// Tile span of a pixel-space box: the inclusive range of tile columns and
/// rows the box touches.
#[derive(Debug, Clone, Copy)]
struct TileSpan {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl TileSpan {
    fn of_box(position: Vec2, width: i32, height: i32) -> Self {
        Self {
            left: (position.x / TILE_SIZE as f32) as i32,
            top: (position.y / TILE_SIZE as f32) as i32,
            right: ((position.x + width as f32) / TILE_SIZE as f32) as i32,
            bottom: ((position.y + height as f32) / TILE_SIZE as f32) as i32,
        }
    }
}

/// Any solid tile in rows `top..=bottom` of `col`?
fn column_blocked(grid: &TileGrid, col: i32, top: i32, bottom: i32) -> bool {
    (top..=bottom).any(|row| grid.solid_at(col, row))
}

/// Any solid tile in columns `left..=right` of `row`?
fn row_blocked(grid: &TileGrid, row: i32, left: i32, right: i32) -> bool {
    (left..=right).any(|col| grid.solid_at(col, row))
}

/// Resolve one movement step of a box against the grid.
///
/// The box tentatively moves by `velocity * dt`, then each axis is checked
/// against the tile column/row its leading edge lands in. The perpendicular
/// span for each check comes from the *pre-move* position: the rows checked
/// for a horizontal hit ignore this tick's vertical displacement, and vice
/// versa. A box covering large distance on both axes in one tick can
/// therefore clip through a tile corner - a known limitation of the scheme,
/// kept because it decides corner feel.
///
/// Landing on a tile sets `grounded`; a tick with no vertical contact
/// clears it. After both axes, the position wraps around the level's
/// horizontal edges (the world is a cylinder; there is no vertical wrap).
pub fn resolve_move(
    grid: &TileGrid,
    position: Vec2,
    velocity: Vec2,
    width: i32,
    height: i32,
    grounded: bool,
    dt: f32,
) -> CollisionResult {
    let mut new_pos = position + velocity * dt;
    let mut new_vel = velocity;
    let mut grounded = grounded;

    let tentative = TileSpan::of_box(new_pos, width, height);

    // Horizontal axis, checked over the pre-move row extent
    let top_row = (position.y / TILE_SIZE as f32) as i32;
    let bottom_row = ((position.y + (height - 1) as f32) / TILE_SIZE as f32) as i32;

    if velocity.x < 0.0 && column_blocked(grid, tentative.left, top_row, bottom_row) {
        // Clip to the right face of the blocking column
        new_pos.x = ((tentative.left + 1) * TILE_SIZE) as f32;
        new_vel.x = 0.0;
    } else if velocity.x > 0.0 && column_blocked(grid, tentative.right, top_row, bottom_row) {
        new_pos.x = (tentative.right * TILE_SIZE - width) as f32;
        new_vel.x = 0.0;
    }

    // Vertical axis, checked over the pre-move column extent
    let left_col = (position.x / TILE_SIZE as f32) as i32;
    let right_col = ((position.x + (width - 1) as f32) / TILE_SIZE as f32) as i32;

    if velocity.y < 0.0 && row_blocked(grid, tentative.top, left_col, right_col) {
        new_pos.y = ((tentative.top + 1) * TILE_SIZE) as f32;
        new_vel.y = 0.0;
    } else if velocity.y > 0.0 && row_blocked(grid, tentative.bottom, left_col, right_col) {
        new_pos.y = (tentative.bottom * TILE_SIZE - height) as f32;
        new_vel.y = 0.0;
        grounded = true;
    } else {
        grounded = false;
    }

    // Horizontal wraparound
    if new_pos.x > RENDER_W as f32 {
        new_pos.x = 0.0;
    } else if new_pos.x < 0.0 {
        new_pos.x = (RENDER_W - 1) as f32;
    }

    CollisionResult {
        position: new_pos,
        velocity: new_vel,
        grounded,
    }
}

/// Resolve movement for the player and write the result back.
pub fn move_and_collide(grid: &TileGrid, player: &mut Player, dt: f32) {
    let result = resolve_move(
        grid,
        player.position,
        player.velocity,
        player.width,
        player.height,
        player.grounded,
        dt,
    );

    player.position = result.position;
    player.velocity = result.velocity;
    player.grounded = result.grounded;
}
