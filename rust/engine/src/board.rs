use crate::tiles::{Tile, TileColor};
use serde::{Deserialize, Serialize};

/// Side length of the wall and the staging triangle.
pub const BOARD_SIZE: usize = 5;

/// Maximum number of tiles the floor line holds; further overflow is dropped.
pub const FLOOR_LINE_CAPACITY: usize = 7;

/// Per-position penalty for tiles on the floor line.
pub const FLOOR_LINE_PENALTIES: [i32; FLOOR_LINE_CAPACITY] = [1, 1, 2, 2, 2, 3, 3];

/// The 5x5 scoring wall. `None` marks an empty cell.
pub type Wall = [[Option<TileColor>; BOARD_SIZE]; BOARD_SIZE];

/// Represents one player's side of the table: the scoring wall, the staging
/// triangle, the floor line, and the running score.
///
/// The staging triangle is a 5x5 grid where only cells with row index >=
/// column index are usable; row `r` therefore holds at most `r + 1` tiles.
/// Staging rows fill left to right and are never partially cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBoard {
    name: String,
    score: i32,
    wall: Wall,
    staging: [[Option<TileColor>; BOARD_SIZE]; BOARD_SIZE],
    floor_line: Vec<Tile>,
}

impl PlayerBoard {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: 0,
            wall: [[None; BOARD_SIZE]; BOARD_SIZE],
            staging: [[None; BOARD_SIZE]; BOARD_SIZE],
            floor_line: Vec::with_capacity(FLOOR_LINE_CAPACITY),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn score(&self) -> i32 {
        self.score
    }
    pub fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Whether a staging cell is part of the usable triangle.
    pub fn is_usable(row: usize, col: usize) -> bool {
        row >= col
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    /// Mutable wall access, used by scoring to clear completed lines and by
    /// callers that set up wall positions directly.
    pub fn wall_mut(&mut self) -> &mut Wall {
        &mut self.wall
    }

    /// True when any cell of wall row `row` already holds `color`.
    pub fn wall_row_contains(&self, row: usize, color: TileColor) -> bool {
        self.wall[row].iter().any(|cell| *cell == Some(color))
    }

    pub fn staging_cell(&self, row: usize, col: usize) -> Option<TileColor> {
        self.staging[row][col]
    }

    pub fn staging_row(&self, row: usize) -> &[Option<TileColor>] {
        &self.staging[row]
    }

    /// Place one tile of `color` into the first empty usable cell of staging
    /// row `row`, filling left to right. Returns `false` when the row has no
    /// usable cell left; the caller routes that tile to the floor line.
    pub fn place_in_staging(&mut self, row: usize, color: TileColor) -> bool {
        for col in 0..BOARD_SIZE {
            if Self::is_usable(row, col) && self.staging[row][col].is_none() {
                self.staging[row][col] = Some(color);
                return true;
            }
        }
        false
    }

    pub fn floor_line(&self) -> &[Tile] {
        &self.floor_line
    }

    pub fn floor_line_len(&self) -> usize {
        self.floor_line.len()
    }

    /// Append a tile to the floor line. Returns `false` when the line is
    /// already full and the tile is dropped.
    pub fn push_floor(&mut self, tile: Tile) -> bool {
        if self.floor_line.len() < FLOOR_LINE_CAPACITY {
            self.floor_line.push(tile);
            true
        } else {
            false
        }
    }

    /// Total penalty for the tiles currently on the floor line.
    pub fn floor_penalty(&self) -> i32 {
        FLOOR_LINE_PENALTIES[..self.floor_line.len()].iter().sum()
    }
}
