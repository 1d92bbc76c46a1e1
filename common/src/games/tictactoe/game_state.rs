use super::board::Board;
use super::move_selector::{ScoredMove, best_move};
use super::types::{Mark, Outcome, Position, Side, WinningLine};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: Outcome,
    turn: Side,
    last_move: Option<Position>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            status: Outcome::InProgress,
            turn: first,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn place_player_mark(&mut self, pos: Position) -> Result<(), String> {
        self.place_mark(Side::Player, pos)
    }

    pub fn play_computer_move(&mut self) -> Result<ScoredMove, String> {
        self.ensure_can_move(Side::Computer)?;
        let scored = best_move(&self.board).ok_or_else(|| "No empty cell left".to_string())?;
        self.place_mark(Side::Computer, scored.position)?;
        Ok(scored)
    }

    fn place_mark(&mut self, side: Side, pos: Position) -> Result<(), String> {
        self.ensure_can_move(side)?;

        if !pos.is_on_board() {
            return Err("Position out of bounds".to_string());
        }

        if self.board.get(pos) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(pos, side.mark());
        self.last_move = Some(pos);
        self.move_count += 1;

        self.status = self.board.outcome();

        if self.status == Outcome::InProgress {
            self.turn = side.opponent();
        }

        Ok(())
    }

    fn ensure_can_move(&self, side: Side) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }
        if self.turn != side {
            return Err(format!("Not the {}'s turn", side));
        }
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            Outcome::PlayerWins | Outcome::ComputerWins => self.board.winning_line(),
            _ => None,
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Side::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Player always takes the first empty cell in row-major order.
    fn play_out_first_available(state: &mut TicTacToeGameState) {
        while !state.is_over() {
            match state.turn() {
                Side::Player => {
                    let pos = state.board().available_moves()[0];
                    state.place_player_mark(pos).unwrap();
                }
                Side::Computer => {
                    state.play_computer_move().unwrap();
                }
            }
        }
    }

    #[test]
    fn test_new_game_waits_for_first_side() {
        let state = TicTacToeGameState::default();
        assert_eq!(state.turn(), Side::Player);
        assert_eq!(state.status(), Outcome::InProgress);
        assert_eq!(state.move_count(), 0);

        let state = TicTacToeGameState::new(Side::Computer);
        assert_eq!(state.turn(), Side::Computer);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::default();
        state.place_player_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.turn(), Side::Computer);
        assert!(state.place_player_mark(Position::new(0, 1)).is_err());

        let scored = state.play_computer_move().unwrap();
        assert_eq!(scored.position, Position::new(1, 1));
        assert_eq!(state.turn(), Side::Player);
        assert_eq!(state.last_move(), Some(Position::new(1, 1)));
        assert!(state.play_computer_move().is_err());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = TicTacToeGameState::default();
        state.place_player_mark(Position::new(2, 2)).unwrap();
        state.play_computer_move().unwrap();

        let before = *state.board();
        let occupied = Position::new(2, 2);
        assert!(state.place_player_mark(occupied).is_err());
        assert_eq!(*state.board(), before);
        assert_eq!(state.turn(), Side::Player);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = TicTacToeGameState::default();
        assert!(state.place_player_mark(Position::new(0, 3)).is_err());
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_computer_punishes_naive_player() {
        let mut state = TicTacToeGameState::default();
        play_out_first_available(&mut state);
        assert_eq!(state.status(), Outcome::ComputerWins);
        let line = state.winning_line().unwrap();
        assert_eq!(line.side, Side::Computer);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_naive_player_against_computer_opening() {
        let mut state = TicTacToeGameState::new(Side::Computer);
        play_out_first_available(&mut state);
        assert!(state.is_over());
        assert_ne!(state.status(), Outcome::PlayerWins);
        assert_eq!(state.board().available_moves().len(), 9 - state.move_count());
    }

    #[test]
    fn test_terminal_state_is_absorbing() {
        let mut state = TicTacToeGameState::default();
        play_out_first_available(&mut state);
        assert!(state.is_over());
        let count = state.move_count();
        for pos in state.board().available_moves() {
            assert!(state.place_player_mark(pos).is_err());
        }
        assert!(state.play_computer_move().is_err());
        assert_eq!(state.move_count(), count);
    }

    #[test]
    fn test_winning_line_only_after_a_win() {
        let state = TicTacToeGameState::default();
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_random_players_never_beat_the_computer() {
        let mut rng = StdRng::seed_from_u64(7);
        for game in 0..20 {
            let first = if game % 2 == 0 { Side::Player } else { Side::Computer };
            let mut state = TicTacToeGameState::new(first);
            while !state.is_over() {
                match state.turn() {
                    Side::Player => {
                        let moves = state.board().available_moves();
                        let pos = *moves.choose(&mut rng).unwrap();
                        state.place_player_mark(pos).unwrap();
                    }
                    Side::Computer => {
                        state.play_computer_move().unwrap();
                    }
                }
            }
            assert_ne!(state.status(), Outcome::PlayerWins, "lost game {}:\n{}", game, state.board());
            if state.status() == Outcome::ComputerWins {
                let line = state.winning_line().unwrap();
                assert_eq!(line.side, Side::Computer);
            }
        }
    }

    /// Every player strategy, both move orders: the computer never loses.
    #[test]
    fn test_computer_is_never_defeated_exhaustive() {
        fn explore(state: &TicTacToeGameState, games: &mut usize) {
            if state.is_over() {
                assert_ne!(state.status(), Outcome::PlayerWins, "lost:\n{}", state.board());
                *games += 1;
                return;
            }
            match state.turn() {
                Side::Computer => {
                    let mut next = state.clone();
                    next.play_computer_move().unwrap();
                    explore(&next, games);
                }
                Side::Player => {
                    for pos in state.board().available_moves() {
                        let mut next = state.clone();
                        next.place_player_mark(pos).unwrap();
                        explore(&next, games);
                    }
                }
            }
        }

        let mut games = 0;
        explore(&TicTacToeGameState::new(Side::Player), &mut games);
        explore(&TicTacToeGameState::new(Side::Computer), &mut games);
        assert!(games > 0);
    }
}
