//! Tile grid - the static level geometry
//!
//! A fixed-size 2D grid of cell kinds parsed from a character layout at
//! startup and read-only afterwards. Physics treats every non-empty cell
//! as solid; the ground/block distinction only matters to the renderer.

use serde::{Deserialize, Serialize};

/// Width and height of one square tile, in pixels
pub const TILE_SIZE: i32 = 16;
/// Level width, in tiles
pub const LEVEL_W: usize = 16;
/// Level height, in tiles
pub const LEVEL_H: usize = 15;
/// Logical render surface width, in pixels
pub const RENDER_W: i32 = TILE_SIZE * LEVEL_W as i32;
/// Logical render surface height, in pixels
pub const RENDER_H: i32 = TILE_SIZE * LEVEL_H as i32;

/// Layout symbol for a ground cell
pub const GROUND_SYMBOL: char = '#';
/// Layout symbol for a block cell
pub const BLOCK_SYMBOL: char = 'O';
/// Layout symbol for an empty cell
pub const EMPTY_SYMBOL: char = '.';

/// One cell of the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Passable sky/air
    Empty,
    /// Solid ground tile
    Ground,
    /// Solid brick/block tile
    Block,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        !matches!(self, Tile::Empty)
    }
}

/// Error type for level layout parsing
#[derive(Debug)]
pub enum LevelError {
    WrongRowCount { expected: usize, found: usize },
    InconsistentRowWidth { row: usize, expected: usize, found: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::WrongRowCount { expected, found } => {
                write!(f, "layout has {} rows, expected {}", found, expected)
            }
            LevelError::InconsistentRowWidth { row, expected, found } => {
                write!(f, "row {} is {} cells wide, expected {}", row, found, expected)
            }
            LevelError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown symbol {:?} at row {}, col {}", symbol, row, col)
            }
        }
    }
}

/// The static level: a fixed-size grid of tiles.
pub struct TileGrid {
    cells: [[Tile; LEVEL_W]; LEVEL_H],
}

impl TileGrid {
    /// Parse a rectangular character layout into a grid.
    ///
    /// Malformed layouts (wrong shape, unknown symbols) are a fatal
    /// configuration error at startup, not a per-tick concern.
    pub fn parse(layout: &[&str]) -> Result<Self, LevelError> {
        if layout.len() != LEVEL_H {
            return Err(LevelError::WrongRowCount {
                expected: LEVEL_H,
                found: layout.len(),
            });
        }

        let mut cells = [[Tile::Empty; LEVEL_W]; LEVEL_H];
        for (row, line) in layout.iter().enumerate() {
            if line.chars().count() != LEVEL_W {
                return Err(LevelError::InconsistentRowWidth {
                    row,
                    expected: LEVEL_W,
                    found: line.chars().count(),
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                cells[row][col] = match symbol {
                    GROUND_SYMBOL => Tile::Ground,
                    BLOCK_SYMBOL => Tile::Block,
                    EMPTY_SYMBOL => Tile::Empty,
                    _ => return Err(LevelError::UnknownSymbol { row, col, symbol }),
                };
            }
        }

        Ok(Self { cells })
    }

    /// Cell kind at tile coordinates.
    ///
    /// Panics if out of range - callers are expected to only query
    /// in-range spans.
    pub fn tile(&self, col: usize, row: usize) -> Tile {
        self.cells[row][col]
    }

    /// True if the cell at (col, row) blocks movement.
    pub fn is_solid(&self, col: usize, row: usize) -> bool {
        self.tile(col, row).is_solid()
    }

    /// Solidity query tolerant of spans that straddle the level edge.
    ///
    /// The world wraps horizontally, so columns are taken modulo the level
    /// width; rows above or below the level are open air. Collision spans
    /// can legitimately touch column [`LEVEL_W`] for the one tick before
    /// wraparound relocates the character.
    pub fn solid_at(&self, col: i32, row: i32) -> bool {
        if row < 0 || row >= LEVEL_H as i32 {
            return false;
        }
        let col = col.rem_euclid(LEVEL_W as i32) as usize;
        self.is_solid(col, row as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::levels::OVERWORLD;

    #[test]
    fn test_parse_overworld() {
        let grid = TileGrid::parse(&OVERWORLD).unwrap();
        // Bottom two rows are ground all the way across
        for col in 0..LEVEL_W {
            assert_eq!(grid.tile(col, 13), Tile::Ground);
            assert_eq!(grid.tile(col, 14), Tile::Ground);
        }
        // The floating block row near the top
        assert_eq!(grid.tile(5, 2), Tile::Block);
        assert_eq!(grid.tile(4, 2), Tile::Empty);
    }

    #[test]
    fn test_solid_iff_not_empty() {
        let grid = TileGrid::parse(&OVERWORLD).unwrap();
        for row in 0..LEVEL_H {
            for col in 0..LEVEL_W {
                assert_eq!(grid.is_solid(col, row), grid.tile(col, row) != Tile::Empty);
            }
        }
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let layout = ["................"; 3];
        assert!(matches!(
            TileGrid::parse(&layout),
            Err(LevelError::WrongRowCount { found: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_inconsistent_row_width() {
        let mut layout = OVERWORLD;
        layout[4] = "........";
        assert!(matches!(
            TileGrid::parse(&layout),
            Err(LevelError::InconsistentRowWidth { row: 4, found: 8, .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        let mut layout = OVERWORLD;
        layout[0] = ".......X........";
        assert!(matches!(
            TileGrid::parse(&layout),
            Err(LevelError::UnknownSymbol { row: 0, col: 7, symbol: 'X' })
        ));
    }

    #[test]
    fn test_solid_at_wraps_columns() {
        let grid = TileGrid::parse(&OVERWORLD).unwrap();
        // Column 16 is column 0 again, column -1 is column 15
        assert_eq!(grid.solid_at(16, 13), grid.is_solid(0, 13));
        assert_eq!(grid.solid_at(-1, 3), grid.is_solid(15, 3));
    }

    #[test]
    fn test_solid_at_open_above_and_below() {
        let grid = TileGrid::parse(&OVERWORLD).unwrap();
        assert!(!grid.solid_at(0, -1));
        assert!(!grid.solid_at(0, LEVEL_H as i32));
    }
}
