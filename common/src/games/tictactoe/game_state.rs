use std::error::Error;
use std::fmt;

use crate::debug_log;
use super::board::Board;
use super::types::{GameMode, GameStatus, Player, Position, WinningLine};
use super::win_detector::{check_win, winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceMarkError {
    GameOver,
    OutOfBounds { row: usize, col: usize },
    CellOccupied(Position),
}

impl fmt::Display for PlaceMarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceMarkError::GameOver => write!(f, "Game is already over"),
            PlaceMarkError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row + 1, col + 1)
            }
            PlaceMarkError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl Error for PlaceMarkError {}

/// Authoritative state of one game, owned by the UI.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    /// Side played by the computer. Only meaningful in `GameMode::VsComputer`.
    pub computer_player: Player,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, computer_player: Player) -> Self {
        Self {
            board: Board::new(),
            mode,
            computer_player,
            current_player: Player::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places the current player's mark and advances the game.
    pub fn place_mark(&mut self, pos: Position) -> Result<GameStatus, PlaceMarkError> {
        if self.status.is_over() {
            return Err(PlaceMarkError::GameOver);
        }

        if !pos.is_on_board() {
            return Err(PlaceMarkError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }

        if !self.board.is_empty_at(pos) {
            return Err(PlaceMarkError::CellOccupied(pos));
        }

        self.board.place(pos, self.current_player);
        self.last_move = Some(pos);
        debug_log!("{} played {}", self.current_player, pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        } else {
            debug_log!("Game finished: {:?}", self.status);
        }

        Ok(self.status)
    }

    /// Clears the board for a new game with the same mode and sides.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && self.status == GameStatus::InProgress
            && self.current_player == self.computer_player
    }

    pub fn get_winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.get_winner()
            .and_then(|winner| winning_line(&self.board, winner))
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = GameStatus::Won(winner);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> GameStatus {
        let mut status = state.status;
        for &(row, col) in moves {
            status = state.place_mark(Position::new(row, col)).unwrap();
        }
        status
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        play(&mut state, &[(0, 0)]);
        assert_eq!(state.current_player, Player::O);
        play(&mut state, &[(1, 1)]);
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_row_win_ends_game() {
        let mut state = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        let status = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(state.get_winner(), Some(Player::X));
        // The winner stays the current player.
        assert_eq!(state.current_player, Player::X);
        let line = state.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        let status = play(
            &mut state,
            &[
                (0, 0), (0, 1), (0, 2),
                (1, 1), (1, 0), (1, 2),
                (2, 1), (2, 0), (2, 2),
            ],
        );
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(state.get_winner(), None);
        assert!(state.winning_line().is_none());
    }

    #[test]
    fn test_rejects_moves_after_game_over() {
        let mut state = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(
            state.place_mark(Position::new(2, 2)),
            Err(PlaceMarkError::GameOver)
        );
    }

    #[test]
    fn test_rejects_occupied_and_out_of_bounds() {
        let mut state = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        play(&mut state, &[(1, 1)]);
        let before = state.board;

        assert_eq!(
            state.place_mark(Position::new(1, 1)),
            Err(PlaceMarkError::CellOccupied(Position::new(1, 1)))
        );
        assert_eq!(
            state.place_mark(Position::new(3, 0)),
            Err(PlaceMarkError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(state.board, before);
        assert_eq!(state.current_player, Player::O);
    }

    #[test]
    fn test_reset_returns_to_empty_board() {
        let mut state = TicTacToeGameState::new(GameMode::VsComputer, Player::X);
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        state.reset();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.mode, GameMode::VsComputer);
        assert_eq!(state.computer_player, Player::X);
    }

    #[test]
    fn test_computer_turn_detection() {
        let mut state = TicTacToeGameState::new(GameMode::VsComputer, Player::O);
        assert!(!state.is_computer_turn());
        play(&mut state, &[(0, 0)]);
        assert!(state.is_computer_turn());

        let mut friends = TicTacToeGameState::new(GameMode::VsHuman, Player::O);
        play(&mut friends, &[(0, 0)]);
        assert!(!friends.is_computer_turn());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PlaceMarkError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            PlaceMarkError::CellOccupied(Position::new(0, 2)).to_string(),
            "Cell (1, 3) is already marked"
        );
    }
}
