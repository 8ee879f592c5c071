//! Exhaustive checks that the minimax bot plays tic-tac-toe perfectly.
//!
//! - Bot against bot always ends in a draw
//! - Bot never loses, whatever the human plays
//! - Bot converts every winning chance it is given

use common::games::tictactoe::{
    Board, GameMode, GameStatus, Player, Position, TicTacToeGameState, calculate_move,
    check_win, find_best_move, minimax,
};

fn outcome(board: &Board) -> Option<GameStatus> {
    if let Some(winner) = check_win(board) {
        return Some(GameStatus::Won(winner));
    }
    if board.is_full() {
        return Some(GameStatus::Draw);
    }
    None
}

/// Both sides use `find_best_move` starting from `board` with `to_move` on move.
fn self_play(mut board: Board, mut to_move: Player) -> GameStatus {
    loop {
        if let Some(status) = outcome(&board) {
            return status;
        }
        let pos = find_best_move(&board, to_move, to_move.opponent())
            .expect("unfinished board has an empty cell");
        board.place(pos, to_move);
        to_move = to_move.opponent();
    }
}

/// Walks every human reply; returns the number of finished games and fails on a bot loss.
fn explore_all_human_moves(board: Board, to_move: Player, bot: Player) -> usize {
    if let Some(status) = outcome(&board) {
        assert_ne!(
            status,
            GameStatus::Won(bot.opponent()),
            "bot ({}) lost:\n{}",
            bot,
            board
        );
        return 1;
    }

    if to_move == bot {
        let pos = find_best_move(&board, bot, bot.opponent()).expect("bot has a move");
        let mut next = board;
        next.place(pos, bot);
        return explore_all_human_moves(next, to_move.opponent(), bot);
    }

    board
        .empty_cells()
        .into_iter()
        .map(|pos| {
            let mut next = board;
            next.place(pos, to_move);
            explore_all_human_moves(next, to_move.opponent(), bot)
        })
        .sum()
}

#[test]
fn test_self_play_from_empty_board_is_a_draw() {
    assert_eq!(self_play(Board::new(), Player::X), GameStatus::Draw);
}

#[test]
fn test_every_opening_move_is_a_draw_with_best_play() {
    for number in 1..=9 {
        let opening = Position::from_cell_number(number).unwrap();
        let mut board = Board::new();
        board.place(opening, Player::X);

        assert_eq!(
            self_play(board, Player::O),
            GameStatus::Draw,
            "opening {}",
            opening
        );
        let mut probe = board;
        assert_eq!(
            minimax(&mut probe, 0, true, Player::O, Player::X),
            0,
            "opening {}",
            opening
        );
    }
}

#[test]
fn test_bot_never_loses_as_o() {
    let games = explore_all_human_moves(Board::new(), Player::X, Player::O);
    assert!(games > 0);
}

#[test]
fn test_bot_never_loses_as_x() {
    let games = explore_all_human_moves(Board::new(), Player::X, Player::X);
    assert!(games > 0);
}

#[test]
fn test_bot_punishes_edge_reply_to_centre() {
    let mut board = Board::new();
    board.place(Position::new(1, 1), Player::X);
    board.place(Position::new(0, 1), Player::O);

    assert_eq!(minimax(&mut board, 0, true, Player::X, Player::O), 1);
    assert_eq!(self_play(board, Player::X), GameStatus::Won(Player::X));
}

#[test]
fn test_full_game_through_game_state() {
    let mut state = TicTacToeGameState::new(GameMode::VsComputer, Player::O);
    let human_moves = [
        Position::new(0, 0),
        Position::new(2, 2),
        Position::new(0, 2),
        Position::new(2, 0),
        Position::new(1, 0),
    ];
    let mut human_moves = human_moves.into_iter();

    while !state.status.is_over() {
        let pos = if state.is_computer_turn() {
            calculate_move(&state).expect("computer has a move")
        } else {
            match human_moves.find(|&pos| state.board.is_empty_at(pos)) {
                Some(pos) => pos,
                None => state.board.empty_cells()[0],
            }
        };
        state.place_mark(pos).unwrap();
    }

    assert_ne!(state.status, GameStatus::Won(Player::X), "\n{}", state.board);
}
