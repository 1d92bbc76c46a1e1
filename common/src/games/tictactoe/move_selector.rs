//! Exhaustive minimax for the computer's move.
//!
//! Scores are from the computer's point of view: `+1` computer win, `-1`
//! player win, `0` draw. No depth discount and no pruning; the 3x3 state
//! space is small enough to walk completely.

use super::board::Board;
use super::types::{Mark, Position, Side};

pub const COMPUTER_WIN_SCORE: i32 = 1;
pub const PLAYER_WIN_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

pub fn calculate_move(board: &Board) -> Option<Position> {
    best_move(board).map(|scored| scored.position)
}

/// Tries every empty cell for the computer and keeps the highest score.
/// Ties keep the first cell found in row-major order. `None` on a full board.
pub fn best_move(board: &Board) -> Option<ScoredMove> {
    let mut board = *board;
    let mut best: Option<ScoredMove> = None;

    for pos in board.available_moves() {
        board.set(pos, Mark::Computer);
        let score = minimax(&mut board, false);
        board.set(pos, Mark::Empty);

        if best.is_none_or(|current| score > current.score) {
            best = Some(ScoredMove { position: pos, score });
        }
    }

    best
}

/// Value of `board` with the computer to move when `is_maximizing`, the
/// player otherwise. The board is restored before returning.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    let side = if is_maximizing { Side::Computer } else { Side::Player };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in board.available_moves() {
        board.set(pos, side.mark());
        let eval = minimax(board, !is_maximizing);
        board.set(pos, Mark::Empty);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}

/// The computer's line is checked first, so a board where both sides hold
/// three in a row scores as a computer win.
fn terminal_score(board: &Board) -> Option<i32> {
    if board.check_winner(Side::Computer) {
        return Some(COMPUTER_WIN_SCORE);
    }
    if board.check_winner(Side::Player) {
        return Some(PLAYER_WIN_SCORE);
    }
    if board.is_board_full() {
        return Some(DRAW_SCORE);
    }
    None
}
