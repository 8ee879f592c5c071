use super::board::Board;
use super::types::{BOARD_SIZE, Player, Position, WinningLine};

pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First line fully owned by `player`: rows, then columns, then the two diagonals.
pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    for i in 0..BOARD_SIZE {
        if check_horizontal(board, i, player) {
            return Some(WinningLine::new(
                player,
                Position::new(i, 0),
                Position::new(i, BOARD_SIZE - 1),
            ));
        }
        if check_vertical(board, i, player) {
            return Some(WinningLine::new(
                player,
                Position::new(0, i),
                Position::new(BOARD_SIZE - 1, i),
            ));
        }
    }

    if check_diagonal_down_right(board, player) {
        return Some(WinningLine::new(
            player,
            Position::new(0, 0),
            Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
        ));
    }
    if check_diagonal_down_left(board, player) {
        return Some(WinningLine::new(
            player,
            Position::new(0, BOARD_SIZE - 1),
            Position::new(BOARD_SIZE - 1, 0),
        ));
    }

    None
}

/// Winner of the board, if any. X is checked first.
pub fn check_win(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}

fn check_horizontal(board: &Board, row: usize, player: Player) -> bool {
    (0..BOARD_SIZE).all(|col| board.get(Position::new(row, col)) == player.mark())
}

fn check_vertical(board: &Board, col: usize, player: Player) -> bool {
    (0..BOARD_SIZE).all(|row| board.get(Position::new(row, col)) == player.mark())
}

fn check_diagonal_down_right(board: &Board, player: Player) -> bool {
    (0..BOARD_SIZE).all(|i| board.get(Position::new(i, i)) == player.mark())
}

fn check_diagonal_down_left(board: &Board, player: Player) -> bool {
    (0..BOARD_SIZE).all(|i| board.get(Position::new(i, BOARD_SIZE - 1 - i)) == player.mark())
}
