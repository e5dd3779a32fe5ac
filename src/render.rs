//! Rendering
//!
//! Thin macroquad glue: draws the tile grid and the player sprite at a
//! fixed integer scale from the 256x240 logical surface. Reads simulation
//! state, never mutates it.
//!
//! Art is generated at startup as flat-colored stand-in sheets laid out
//! as 16px-cell strips, so real spritesheet textures can be dropped in
//! without touching the draw code.

use macroquad::prelude::*;

use crate::game::{Facing, GameState};
use crate::world::{Tile, TileGrid, LEVEL_H, LEVEL_W, TILE_SIZE};

/// Integer scale from the logical surface to the window
pub const WINDOW_SCALE: i32 = 3;

/// Width of one character sprite cell in the sheet, in pixels
const SPRITE_TILE_W: i32 = 16;
/// Character sheet columns: standing, three running frames, turning,
/// jumping, crouching
const SHEET_COLUMNS: i32 = 7;

/// Generated stand-in sheets; real art with the same layout can replace
/// them without code changes
pub struct Assets {
    pub player_sheet: Texture2D,
    pub tile_sheet: Texture2D,
}

impl Assets {
    pub fn generate() -> Self {
        let player_sheet = Texture2D::from_image(&generate_player_sheet());
        player_sheet.set_filter(FilterMode::Nearest);

        let tile_sheet = Texture2D::from_image(&generate_tile_sheet());
        tile_sheet.set_filter(FilterMode::Nearest);

        Self {
            player_sheet,
            tile_sheet,
        }
    }
}

/// One 16px column per sprite. Every column gets the same blocky body;
/// an accent stripe shifts with the column so the run cycle visibly
/// animates even with stand-in art.
fn generate_player_sheet() -> Image {
    let mut image = Image::gen_image_color(
        (SHEET_COLUMNS * SPRITE_TILE_W) as u16,
        SPRITE_TILE_W as u16,
        BLANK,
    );

    let body = Color::from_rgba(216, 40, 0, 255);
    let skin = Color::from_rgba(252, 188, 176, 255);
    let accent = Color::from_rgba(136, 112, 0, 255);

    for column in 0..SHEET_COLUMNS {
        let x0 = (column * SPRITE_TILE_W) as u32;
        // 13px-wide body inside the 16px cell, one pixel in from the left
        for y in 0..16u32 {
            for x in 1..14u32 {
                let color = if y < 5 { skin } else { body };
                image.set_pixel(x0 + x, y, color);
            }
        }
        // Stripe marks the frame; wraps within the body width
        let stripe = 1 + (column as u32 * 3) % 13;
        for y in 8..16u32 {
            image.set_pixel(x0 + stripe, y, accent);
        }
    }

    image
}

/// Two 16px tiles: ground, then block
fn generate_tile_sheet() -> Image {
    let mut image = Image::gen_image_color((2 * TILE_SIZE) as u16, TILE_SIZE as u16, BLANK);

    let ground = Color::from_rgba(0, 168, 0, 255);
    let ground_dark = Color::from_rgba(0, 104, 0, 255);
    let block = Color::from_rgba(200, 76, 12, 255);
    let block_dark = Color::from_rgba(124, 40, 0, 255);

    for (tile, fill, border) in [(0u32, ground, ground_dark), (1u32, block, block_dark)] {
        let x0 = tile * TILE_SIZE as u32;
        for y in 0..TILE_SIZE as u32 {
            for x in 0..TILE_SIZE as u32 {
                let edge = x == 0 || y == 0 || x == TILE_SIZE as u32 - 1 || y == TILE_SIZE as u32 - 1;
                image.set_pixel(x0 + x, y, if edge { border } else { fill });
            }
        }
    }

    image
}

/// Clear to sky and draw the whole frame.
pub fn draw_frame(state: &GameState, grid: &TileGrid, assets: &Assets) {
    clear_background(Color::from_rgba(159, 158, 255, 255)); // sky
    draw_level(grid, assets);
    draw_player(state, assets);
}

/// Draw every solid tile of the level.
fn draw_level(grid: &TileGrid, assets: &Assets) {
    let scaled_tile = (TILE_SIZE * WINDOW_SCALE) as f32;

    for row in 0..LEVEL_H {
        for col in 0..LEVEL_W {
            let sheet_column = match grid.tile(col, row) {
                Tile::Empty => continue,
                Tile::Ground => 0,
                Tile::Block => 1,
            };

            draw_texture_ex(
                &assets.tile_sheet,
                col as f32 * scaled_tile,
                row as f32 * scaled_tile,
                WHITE,
                DrawTextureParams {
                    source: Some(Rect::new(
                        (sheet_column * TILE_SIZE) as f32,
                        0.0,
                        TILE_SIZE as f32,
                        TILE_SIZE as f32,
                    )),
                    dest_size: Some(vec2(scaled_tile, scaled_tile)),
                    ..Default::default()
                },
            );
        }
    }
}

/// Draw the player sprite for the current state.
///
/// The 13px physics box sits inside a 16px sprite cell; the sprite is
/// drawn one pixel left of the box, and faces right on the sheet.
fn draw_player(state: &GameState, assets: &Assets) {
    let player = &state.player;
    let column = player.sprite().sheet_column() as i32;

    draw_texture_ex(
        &assets.player_sheet,
        (player.position.x - 1.0) * WINDOW_SCALE as f32,
        player.position.y * WINDOW_SCALE as f32,
        WHITE,
        DrawTextureParams {
            source: Some(Rect::new(
                (column * SPRITE_TILE_W) as f32,
                0.0,
                SPRITE_TILE_W as f32,
                player.height as f32,
            )),
            dest_size: Some(vec2(
                (SPRITE_TILE_W * WINDOW_SCALE) as f32,
                (player.height * WINDOW_SCALE) as f32,
            )),
            flip_x: player.facing == Facing::Left,
            ..Default::default()
        },
    );
}
