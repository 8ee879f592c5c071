use common::games::tictactoe::{
    BOARD_SIZE, Board, GameStatus, MoveScore, Player, TicTacToeGameState, WinningLine,
};

pub fn render_board(board: &Board, show_coordinates: bool) -> String {
    if !show_coordinates {
        return board.to_string();
    }

    let mut out = String::new();
    let header: Vec<String> = (1..=BOARD_SIZE).map(|col| format!(" {} ", col)).collect();
    out.push_str(&format!("   {}\n", header.join(" ")));

    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        let line: Vec<String> = cells
            .iter()
            .map(|cell| format!(" {} ", cell.symbol()))
            .collect();
        out.push_str(&format!("{}  {}\n", row + 1, line.join("|")));
    }
    out
}

pub fn turn_message(player: Player) -> String {
    format!("{}'s turn", player)
}

pub fn result_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("{} wins!", player)),
        GameStatus::Draw => Some("It's a draw!".to_string()),
    }
}

pub fn game_over_message(status: GameStatus) -> Option<String> {
    result_message(status).map(|message| format!("Game Over! {}", message))
}

pub fn status_line(state: &TicTacToeGameState) -> String {
    match result_message(state.status) {
        Some(message) => message,
        None => turn_message(state.current_player),
    }
}

pub fn winning_line_message(line: &WinningLine) -> String {
    format!("{} completed the line {} - {}", line.player, line.start, line.end)
}

pub fn hint_message(player: Player, scores: &[MoveScore]) -> String {
    let mut out = format!("Move values for {}:\n", player);
    for MoveScore { position, score } in scores {
        let verdict = match score.signum() {
            1 => "wins",
            0 => "draws",
            _ => "loses",
        };
        out.push_str(&format!("  {} {}\n", position, verdict));
    }
    out
}

pub const HELP_TEXT: &str = "\
Enter a move as `row col` (e.g. `2 3`) or a cell number 1-9:
   1 | 2 | 3
   4 | 5 | 6
   7 | 8 | 9
Commands: hint, restart, menu, help, quit";

pub const MENU_TEXT: &str = "\
Tic-Tac-Toe
  1) Play against the computer
  2) Play with a friend
  q) Quit";
