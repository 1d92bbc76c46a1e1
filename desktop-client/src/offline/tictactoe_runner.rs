use common::games::tictactoe::{Position, Side, TicTacToeGameState};
use common::{debug_log, log};
use std::time::{Duration, Instant};

use crate::config::GameConfig;

/// What the window should do after a frame has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameAction {
    Idle,
    Repaint,
    RepaintAfter(Duration),
    Exit(&'static str),
}

/// Drives one game: player clicks, computer replies, then a pause on the
/// final board before the window closes.
pub struct TicTacToeRunner {
    game: TicTacToeGameState,
    game_over_delay: Duration,
    finished_at: Option<Instant>,
}

impl TicTacToeRunner {
    pub fn new(config: &GameConfig) -> Self {
        log!("New game, {} moves first", config.first_player);
        Self {
            game: TicTacToeGameState::new(config.first_player),
            game_over_delay: config.game_over_delay(),
            finished_at: None,
        }
    }

    pub fn game(&self) -> &TicTacToeGameState {
        &self.game
    }

    pub fn accepts_clicks(&self) -> bool {
        !self.game.is_over() && self.game.turn() == Side::Player
    }

    /// Occupied cells and clicks outside the player's turn are ignored.
    pub fn handle_click(&mut self, pos: Position, now: Instant) {
        match self.game.place_player_mark(pos) {
            Ok(()) => {
                log!("Player placed X at {}", pos);
                self.note_if_finished(now);
            }
            Err(e) => debug_log!("Ignored click at {}: {}", pos, e),
        }
    }

    /// Runs the computer's move if it is due and reports what the frame
    /// loop should do next.
    pub fn advance(&mut self, now: Instant) -> FrameAction {
        if !self.game.is_over() && self.game.turn() == Side::Computer {
            match self.game.play_computer_move() {
                Ok(scored) => {
                    log!("Computer placed O at {}", scored.position);
                    debug_log!("Minimax score {} for board\n{}", scored.score, self.game.board());
                    self.note_if_finished(now);
                }
                Err(e) => log!("Computer could not move: {}", e),
            }
            return FrameAction::Repaint;
        }

        let Some(finished_at) = self.finished_at else {
            return FrameAction::Idle;
        };

        let elapsed = now.saturating_duration_since(finished_at);
        if elapsed >= self.game_over_delay {
            let message = self.game.status().message().unwrap_or_default();
            FrameAction::Exit(message)
        } else {
            FrameAction::RepaintAfter(self.game_over_delay - elapsed)
        }
    }

    fn note_if_finished(&mut self, now: Instant) {
        if self.finished_at.is_some() || !self.game.is_over() {
            return;
        }
        self.finished_at = Some(now);
        log!(
            "Game over after {} moves: {}",
            self.game.move_count(),
            self.game.status().message().unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Outcome;

    fn config(first_player: Side, delay_ms: u64) -> GameConfig {
        GameConfig {
            first_player,
            game_over_delay_ms: delay_ms,
        }
    }

    #[test]
    fn test_player_click_then_computer_reply() {
        let mut runner = TicTacToeRunner::new(&config(Side::Player, 0));
        let now = Instant::now();
        assert!(runner.accepts_clicks());
        assert_eq!(runner.advance(now), FrameAction::Idle);

        runner.handle_click(Position::new(0, 0), now);
        assert!(!runner.accepts_clicks());
        assert_eq!(runner.advance(now), FrameAction::Repaint);
        assert_eq!(runner.game().last_move(), Some(Position::new(1, 1)));
        assert!(runner.accepts_clicks());
    }

    #[test]
    fn test_click_on_occupied_cell_is_ignored() {
        let mut runner = TicTacToeRunner::new(&config(Side::Player, 0));
        let now = Instant::now();
        runner.handle_click(Position::new(2, 2), now);
        runner.advance(now);

        let before = *runner.game().board();
        runner.handle_click(Position::new(2, 2), now);
        runner.handle_click(Position::new(1, 1), now);
        assert_eq!(*runner.game().board(), before);
        assert!(runner.accepts_clicks());
    }

    #[test]
    fn test_computer_opens_when_configured() {
        let mut runner = TicTacToeRunner::new(&config(Side::Computer, 0));
        assert!(!runner.accepts_clicks());
        assert_eq!(runner.advance(Instant::now()), FrameAction::Repaint);
        assert_eq!(runner.game().move_count(), 1);
        assert!(runner.accepts_clicks());
    }

    #[test]
    fn test_exits_with_message_after_delay() {
        let mut runner = TicTacToeRunner::new(&config(Side::Player, 2000));
        let start = Instant::now();

        while !runner.game().is_over() {
            if runner.accepts_clicks() {
                let pos = runner.game().board().available_moves()[0];
                runner.handle_click(pos, start);
            }
            runner.advance(start);
        }

        assert_eq!(runner.game().status(), Outcome::ComputerWins);
        assert_eq!(
            runner.advance(start + Duration::from_millis(500)),
            FrameAction::RepaintAfter(Duration::from_millis(1500))
        );
        assert_eq!(
            runner.advance(start + Duration::from_millis(2000)),
            FrameAction::Exit("AI Wins!")
        );
    }
}
