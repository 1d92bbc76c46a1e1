mod tictactoe_runner;

pub use tictactoe_runner::{FrameAction, TicTacToeRunner};
