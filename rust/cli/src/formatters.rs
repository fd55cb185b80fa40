//! Tile and board formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements (tiles,
//! factories, player boards) for terminal output. Tile names are wrapped in
//! ANSI color codes when the terminal supports them.
//!
//! ## ANSI vs plain fallback
//!
//! Color support is detected from the environment: setting `NO_COLOR`, or
//! `TERM=dumb`, disables escape codes and leaves the plain uppercase color
//! names.
//!
//! ## Example
//!
//! ```rust
//! use azulejo_engine::tiles::TileColor;
//! use azulejo_cli::formatters::format_tile_color;
//!
//! let red = format_tile_color(TileColor::Red);
//! assert!(red.contains("RED"));
//! ```

use azulejo_engine::board::{PlayerBoard, BOARD_SIZE};
use azulejo_engine::tiles::{Tile, TileColor};

const ANSI_RESET: &str = "\x1b[0m";

/// Check whether the terminal should receive ANSI color escapes.
///
/// Honors the `NO_COLOR` convention and falls back to plain text for
/// `TERM=dumb`.
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => true,
    }
}

fn ansi_code(color: TileColor) -> &'static str {
    match color {
        TileColor::Red => "\x1b[31m",
        TileColor::Yellow => "\x1b[33m",
        TileColor::Blue => "\x1b[34m",
        TileColor::Green => "\x1b[32m",
        TileColor::Purple => "\x1b[35m",
    }
}

/// Format one tile color as its uppercase name, colorized when supported.
pub fn format_tile_color(color: TileColor) -> String {
    if supports_color() {
        format!("{}{}{}", ansi_code(color), color.name(), ANSI_RESET)
    } else {
        color.name().to_string()
    }
}

/// Format a run of tiles as space-separated color names.
pub fn format_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|t| format_tile_color(t.color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a player's board: the staging triangle on the left, a tab, then
/// the wall row. Empty cells render as `.`; cells outside the usable
/// triangle render as blank space so the triangle shape stays visible.
///
/// # Example
///
/// ```rust
/// use azulejo_engine::board::PlayerBoard;
/// use azulejo_cli::formatters::format_board;
///
/// let board = PlayerBoard::new("p1");
/// let rendered = format_board(&board);
/// assert_eq!(rendered.lines().count(), 5);
/// assert!(rendered.starts_with(". "));
/// ```
pub fn format_board(board: &PlayerBoard) -> String {
    let mut text = String::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if PlayerBoard::is_usable(row, col) {
                match board.staging_cell(row, col) {
                    Some(color) => text.push_str(&format_tile_color(color)),
                    None => text.push('.'),
                }
                text.push(' ');
            } else {
                text.push_str("  ");
            }
        }
        text.push('\t');
        for col in 0..BOARD_SIZE {
            match board.wall()[row][col] {
                Some(color) => text.push_str(&format_tile_color(color)),
                None => text.push('.'),
            }
            text.push(' ');
        }
        text.push('\n');
    }
    text
}

/// Format a player's floor line as space-separated color names.
pub fn format_floor_line(board: &PlayerBoard) -> String {
    format_tiles(board.floor_line())
}
