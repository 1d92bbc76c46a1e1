mod board_view;
mod game_app;

pub use game_app::TicTacToeApp;
