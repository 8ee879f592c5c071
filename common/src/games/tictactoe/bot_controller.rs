use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::{Player, Position};
use super::win_detector::has_won;

const WIN_SCORE: i32 = 1;
const DRAW_SCORE: i32 = 0;
const LOSS_SCORE: i32 = -1;

/// Minimax value of playing `position` now, from the computer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub position: Position,
    pub score: i32,
}

/// Picks the move for the side to move in `state`.
pub fn calculate_move(state: &TicTacToeGameState) -> Option<Position> {
    if state.status.is_over() {
        return None;
    }
    let computer = state.current_player;
    find_best_move(&state.board, computer, computer.opponent())
}

/// Best move for `computer`, or `None` when the board has no empty cell.
///
/// An immediate win is taken first, then an immediate block. Otherwise every
/// empty cell is scored with `minimax` and the first cell with the highest
/// score wins. Both shortcuts return a move with the maximal minimax value, so
/// they only decide between equally scored moves.
pub fn find_best_move(board: &Board, computer: Player, human: Player) -> Option<Position> {
    let mut board = *board;
    let available_moves = board.empty_cells();

    if available_moves.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(&mut board, computer, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(&mut board, human, &available_moves) {
        return Some(pos);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for MoveScore { position, score } in score_moves(&board, computer, human) {
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Minimax score of every empty cell in row-major order.
pub fn score_moves(board: &Board, computer: Player, human: Player) -> Vec<MoveScore> {
    let mut board = *board;
    let available_moves = board.empty_cells();
    let mut scores = Vec::with_capacity(available_moves.len());

    for position in available_moves {
        board.place(position, computer);
        let score = minimax(&mut board, 0, false, computer, human);
        board.clear(position);

        scores.push(MoveScore { position, score });
    }

    scores
}

/// Exhaustive minimax over `board`. Returns +1 if `computer` wins with best
/// play, -1 if `human` does and 0 for a draw. `depth` does not affect the score.
///
/// The board is mutated during the search and restored before returning.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    computer: Player,
    human: Player,
) -> i32 {
    if has_won(board, computer) {
        return WIN_SCORE;
    }
    if has_won(board, human) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let moves = board.empty_cells();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            board.place(pos, computer);
            let eval = minimax(board, depth + 1, false, computer, human);
            board.clear(pos);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            board.place(pos, human);
            let eval = minimax(board, depth + 1, true, computer, human);
            board.clear(pos);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

fn find_winning_move(board: &mut Board, player: Player, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.place(pos, player);
        let won = has_won(board, player);
        board.clear(pos);

        if won {
            return Some(pos);
        }
    }
    None
}
