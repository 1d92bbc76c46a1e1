use std::fmt;

use super::types::{BOARD_SIZE, Mark, Outcome, Position, Side, WinningLine};
use super::win_detector::{check_win, check_win_with_line, has_winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses three rows of `X`, `O` and `.`.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!(
                    "Row {} must have {} cells, got {}",
                    row,
                    BOARD_SIZE,
                    symbols.len()
                ));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let mark = Mark::from_symbol(symbol)
                    .ok_or_else(|| format!("Unknown cell symbol '{}' at row {}", symbol, row))?;
                board.cells[row][col] = mark;
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    /// Raw write used for placing and undoing marks. No validation.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_on_board() && self.get(pos) == Mark::Empty
    }

    pub fn available_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos) == Mark::Empty).collect()
    }

    pub fn is_board_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn check_winner(&self, side: Side) -> bool {
        has_winning_line(self, side)
    }

    pub fn winner(&self) -> Option<Side> {
        check_win(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(side) = self.winner() {
            return Outcome::win_for(side);
        }
        if self.is_board_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
