use crate::board::PlayerBoard;
use crate::factory::{Factory, MiddleArea};
use crate::tiles::TileColor;
use serde::{Deserialize, Serialize};

/// How a factory pick resolved. Every count refers to tiles from the chosen
/// factory; the factory itself is always empty afterwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PickOutcome {
    /// Tiles of the chosen color placed into the staging row.
    pub placed: usize,
    /// Matching tiles that overflowed into the floor line.
    pub to_floor: usize,
    /// Matching tiles dropped because the floor line was full.
    pub discarded: usize,
    /// Tiles moved to the middle area (non-matching, or all of them on a
    /// row conflict).
    pub to_middle: usize,
    /// The pick was rejected because the wall row already held the color.
    pub row_conflict: bool,
}

/// Resolves a validated pick: `color` from `factory` into staging row `row`
/// of `board`.
///
/// If the wall row already contains the chosen color the whole factory is
/// forfeited to the middle area and nothing reaches the board. Otherwise
/// matching tiles fill the staging row left to right, overflowing onto the
/// floor line once the row is full; non-matching tiles go to the middle
/// area. The factory is emptied unconditionally.
///
/// A row conflict is valid game behavior, not an error; index validation
/// happens before this call.
pub fn resolve_pick(
    board: &mut PlayerBoard,
    factory: &mut Factory,
    middle: &mut MiddleArea,
    color: TileColor,
    row: usize,
) -> PickOutcome {
    let mut outcome = PickOutcome {
        placed: 0,
        to_floor: 0,
        discarded: 0,
        to_middle: 0,
        row_conflict: false,
    };

    let tiles = factory.take_all();

    if board.wall_row_contains(row, color) {
        outcome.row_conflict = true;
        for tile in tiles {
            middle.push(tile);
            outcome.to_middle += 1;
        }
        return outcome;
    }

    for tile in tiles {
        if tile.color == color {
            if board.place_in_staging(row, color) {
                outcome.placed += 1;
            } else if board.push_floor(tile) {
                outcome.to_floor += 1;
            } else {
                outcome.discarded += 1;
            }
        } else {
            middle.push(tile);
            outcome.to_middle += 1;
        }
    }

    outcome
}
