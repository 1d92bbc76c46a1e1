use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Position, Side, WinningLine};

const WIN_COUNT: usize = BOARD_SIZE;

// (d_row, d_col): right, down, down-right, down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn check_win(board: &Board) -> Option<Side> {
    check_win_with_line(board).map(|line| line.side)
}

pub fn has_winning_line(board: &Board, side: Side) -> bool {
    find_line(board, side.mark()).is_some()
}

/// First completed line, scanning start cells row-major. When both sides
/// somehow own a line the player's is reported first.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Side::Player, Side::Computer]
        .into_iter()
        .find_map(|side| find_line(board, side.mark()).map(|(start, end)| WinningLine::new(side, start, end)))
}

fn find_line(board: &Board, mark: Mark) -> Option<(Position, Position)> {
    for start in Position::all() {
        if board.get(start) != mark {
            continue;
        }
        for (d_row, d_col) in DIRECTIONS {
            if let Some(end) = line_end(board, start, d_row, d_col, mark) {
                return Some((start, end));
            }
        }
    }
    None
}

fn line_end(board: &Board, start: Position, d_row: isize, d_col: isize, mark: Mark) -> Option<Position> {
    let mut end = start;
    for i in 1..WIN_COUNT as isize {
        let row = start.row as isize + d_row * i;
        let col = start.col as isize + d_col * i;
        if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
            return None;
        }
        let pos = Position::new(row as usize, col as usize);
        if board.get(pos) != mark {
            return None;
        }
        end = pos;
    }
    Some(end)
}
