use crate::board::{PlayerBoard, Wall, BOARD_SIZE};
use crate::tiles::TileColor;
use serde::{Deserialize, Serialize};

/// Points awarded for each completed wall line.
pub const LINE_SCORE: i32 = BOARD_SIZE as i32;

/// Breakdown of one player's end-of-game scoring pass.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub completed_rows: usize,
    pub completed_cols: usize,
    pub floor_penalty: i32,
    /// Net change applied to the player's cumulative score.
    pub delta: i32,
}

/// Returns the color filling the line when all five cells hold the same real
/// color. Empty cells never satisfy the check, so a cleared or partially
/// filled line cannot score.
fn uniform_line<I>(mut cells: I) -> Option<TileColor>
where
    I: Iterator<Item = Option<TileColor>>,
{
    let first = cells.next()??;
    for cell in cells {
        if cell != Some(first) {
            return None;
        }
    }
    Some(first)
}

fn clear_row(wall: &mut Wall, row: usize) {
    for cell in wall[row].iter_mut() {
        *cell = None;
    }
}

fn clear_col(wall: &mut Wall, col: usize) {
    for row in wall.iter_mut() {
        row[col] = None;
    }
}

/// Scores one player at the end of the game and applies the delta to their
/// cumulative score.
///
/// Each wall row uniformly filled with a single color scores +5 and is
/// cleared; columns are then scanned the same way. Clearing makes the pass
/// idempotent: a second invocation finds only empty lines and scores
/// nothing. Finally the floor-line penalty is subtracted, one slot per tile
/// present. The floor line itself is left untouched.
pub fn score_board(board: &mut PlayerBoard) -> FinalScore {
    let mut completed_rows = 0;
    let mut completed_cols = 0;

    for row in 0..BOARD_SIZE {
        if uniform_line(board.wall()[row].iter().copied()).is_some() {
            completed_rows += 1;
            clear_row(board.wall_mut(), row);
        }
    }

    for col in 0..BOARD_SIZE {
        if uniform_line(board.wall().iter().map(|row| row[col])).is_some() {
            completed_cols += 1;
            clear_col(board.wall_mut(), col);
        }
    }

    let floor_penalty = board.floor_penalty();
    let delta = (completed_rows + completed_cols) as i32 * LINE_SCORE - floor_penalty;
    board.add_score(delta);

    FinalScore {
        completed_rows,
        completed_cols,
        floor_penalty,
        delta,
    }
}

/// Index of the winning player, or `None` on a tie.
pub fn decide_winner(scores: [i32; 2]) -> Option<usize> {
    match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    }
}
