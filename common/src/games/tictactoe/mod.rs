mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{MoveScore, calculate_move, find_best_move, minimax, score_moves};
pub use game_state::{PlaceMarkError, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, FirstPlayerMode, GameMode, GameStatus, Mark, Player, Position, WinningLine,
};
pub use win_detector::{check_win, has_won, winning_line};
