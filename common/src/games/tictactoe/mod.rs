mod board;
mod game_state;
mod move_selector;
mod types;
mod win_detector;

pub use board::Board;
pub use game_state::TicTacToeGameState;
pub use move_selector::{
    COMPUTER_WIN_SCORE, DRAW_SCORE, PLAYER_WIN_SCORE, ScoredMove, best_move, calculate_move, minimax,
};
pub use types::{BOARD_SIZE, Mark, Outcome, Position, Side, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
