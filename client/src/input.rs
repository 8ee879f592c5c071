use common::games::tictactoe::{BOARD_SIZE, GameMode, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Hint,
    Restart,
    Menu,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameMode),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAgainChoice {
    Yes,
    Menu,
    Quit,
}

/// Parses one line typed during a game.
///
/// A move is either a cell number `1`-`9` counted row by row, or a 1-based
/// `row col` pair separated by spaces or a comma.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim().to_lowercase();

    match line.as_str() {
        "" => return Err("Enter a move, e.g. `2 3` or `5`".to_string()),
        "hint" | "h" => return Ok(Command::Hint),
        "restart" | "r" => return Ok(Command::Restart),
        "menu" | "m" => return Ok(Command::Menu),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number = cell
                .parse::<usize>()
                .map_err(|_| format!("Unknown command: {}", line))?;
            Position::from_cell_number(number)
                .map(Command::Place)
                .ok_or_else(|| {
                    format!("Cell number must be between 1 and {}", BOARD_SIZE * BOARD_SIZE)
                })
        }
        [row, col] => {
            let row = parse_number(row)?;
            let col = parse_number(col)?;
            if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
                return Err(format!("Row and column must be between 1 and {}", BOARD_SIZE));
            }
            Ok(Command::Place(Position::new(row - 1, col - 1)))
        }
        _ => Err(format!("Unknown command: {}", line)),
    }
}

pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().to_lowercase().as_str() {
        "1" | "bot" | "computer" => Some(MenuChoice::Play(GameMode::VsComputer)),
        "2" | "friend" | "human" => Some(MenuChoice::Play(GameMode::VsHuman)),
        "q" | "quit" | "exit" => Some(MenuChoice::Quit),
        _ => None,
    }
}

pub fn parse_play_again(line: &str) -> Option<PlayAgainChoice> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" | "" => Some(PlayAgainChoice::Yes),
        "m" | "menu" => Some(PlayAgainChoice::Menu),
        "n" | "no" | "q" | "quit" => Some(PlayAgainChoice::Quit),
        _ => None,
    }
}

fn parse_number(text: &str) -> Result<usize, String> {
    text.parse::<usize>()
        .map_err(|_| format!("Not a number: {}", text))
}
