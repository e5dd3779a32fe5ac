//! Bundled level layouts
//!
//! Levels are rectangular character tables compiled into the binary and
//! parsed by [`TileGrid::parse`](super::TileGrid::parse) at startup.

use super::grid::LEVEL_H;

/// The overworld: a floor, scattered brick formations, and a few towers to
/// climb. `#` is ground, `O` is a block, `.` is sky.
pub const OVERWORLD: [&str; LEVEL_H] = [
    "................",
    "................",
    ".....OOOOO......",
    "OO.......O....OO",
    ".........O......",
    "........OO......",
    "...O.....O......",
    "...O............",
    ".OOO............",
    "OO......OO.....O",
    "O...OO.OOO....OO",
    "O....O.OO....OOO",
    "O....O......OOOO",
    "################",
    "################",
];
