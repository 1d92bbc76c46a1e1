use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | ' ' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' => Some(Mark::Computer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Computer => Mark::Computer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// All nine cells, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Line printed to the terminal when the game ends.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::PlayerWins => Some("Player Wins!"),
            Outcome::ComputerWins => Some("AI Wins!"),
            Outcome::Draw => Some("It's a Draw!"),
        }
    }

    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWins,
            Side::Computer => Outcome::ComputerWins,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(side: Side, start: Position, end: Position) -> Self {
        Self { side, start, end }
    }
}
