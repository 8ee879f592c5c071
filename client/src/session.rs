use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use common::games::tictactoe::{
    FirstPlayerMode, GameMode, Player, TicTacToeGameState, calculate_move, score_moves,
};
use common::{debug_log, log};

use crate::config::Config;
use crate::input::{
    Command, MenuChoice, PlayAgainChoice, parse_command, parse_menu_choice, parse_play_again,
};
use crate::render::{
    HELP_TEXT, MENU_TEXT, game_over_message, hint_message, render_board, status_line,
    winning_line_message,
};

enum GameExit {
    Menu,
    Quit,
}

/// Drives games over a line-based terminal. Owns the authoritative game state.
pub struct TerminalSession<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let mut preselected = self.config.game.mode;

        loop {
            let mode = match preselected.take() {
                Some(mode) => mode,
                None => match self.prompt_menu()? {
                    MenuChoice::Play(mode) => mode,
                    MenuChoice::Quit => break,
                },
            };

            match self.play(mode)? {
                GameExit::Menu => continue,
                GameExit::Quit => break,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn prompt_menu(&mut self) -> io::Result<MenuChoice> {
        loop {
            writeln!(self.output, "{}", MENU_TEXT)?;
            let Some(line) = self.read_line("> ")? else {
                return Ok(MenuChoice::Quit);
            };
            match parse_menu_choice(&line) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.output, "Please choose 1, 2 or q.")?,
            }
        }
    }

    fn play(&mut self, mode: GameMode) -> io::Result<GameExit> {
        let computer = resolve_computer_player(self.config.game.first_player);
        let mut state = TicTacToeGameState::new(mode, computer);

        log!("New game: {:?}", mode);
        if mode == GameMode::VsComputer {
            writeln!(self.output, "You play {}, the computer plays {}.", computer.opponent(), computer)?;
        }
        self.show(&state)?;

        loop {
            if state.is_computer_turn() {
                self.play_computer_move(&mut state)?;
            }

            if state.status.is_over() {
                match self.finish_game(&state)? {
                    PlayAgainChoice::Yes => {
                        state.reset();
                        self.show(&state)?;
                        continue;
                    }
                    PlayAgainChoice::Menu => return Ok(GameExit::Menu),
                    PlayAgainChoice::Quit => return Ok(GameExit::Quit),
                }
            }

            let Some(line) = self.read_line("> ")? else {
                return Ok(GameExit::Quit);
            };

            match parse_command(&line) {
                Ok(Command::Place(pos)) => match state.place_mark(pos) {
                    Ok(_) => self.show(&state)?,
                    Err(err) => writeln!(self.output, "{}", err)?,
                },
                Ok(Command::Hint) => {
                    let player = state.current_player;
                    let scores = score_moves(&state.board, player, player.opponent());
                    debug_log!("Hint for {}: {:?}", player, scores);
                    write!(self.output, "{}", hint_message(player, &scores))?;
                }
                Ok(Command::Restart) => {
                    state.reset();
                    self.show(&state)?;
                }
                Ok(Command::Menu) => return Ok(GameExit::Menu),
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(Command::Quit) => return Ok(GameExit::Quit),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn play_computer_move(&mut self, state: &mut TicTacToeGameState) -> io::Result<()> {
        let delay = self.config.game.bot_delay_ms;
        if delay > 0 {
            writeln!(self.output, "Computer is thinking...")?;
            self.output.flush()?;
            thread::sleep(Duration::from_millis(u64::from(delay)));
        }

        let Some(pos) = calculate_move(state) else {
            return Ok(());
        };

        debug_log!("Computer ({}) chose {}", state.current_player, pos);
        match state.place_mark(pos) {
            Ok(_) => {
                writeln!(self.output, "Computer plays {}", pos)?;
                self.show(state)
            }
            Err(err) => {
                log!("Computer move {} rejected: {}", pos, err);
                Ok(())
            }
        }
    }

    fn finish_game(&mut self, state: &TicTacToeGameState) -> io::Result<PlayAgainChoice> {
        if let Some(line) = state.winning_line() {
            writeln!(self.output, "{}", winning_line_message(&line))?;
        }
        if let Some(message) = game_over_message(state.status) {
            writeln!(self.output, "{}", message)?;
            log!("{}", message);
        }

        loop {
            let Some(line) = self.read_line("Play again? [y]es / [n]o / [m]enu: ")? else {
                return Ok(PlayAgainChoice::Quit);
            };
            match parse_play_again(&line) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.output, "Please answer y, n or m.")?,
            }
        }
    }

    fn show(&mut self, state: &TicTacToeGameState) -> io::Result<()> {
        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            render_board(&state.board, self.config.display.show_coordinates)
        )?;
        writeln!(self.output, "{}", status_line(state))
    }

    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn resolve_computer_player(first_player: FirstPlayerMode) -> Player {
    match first_player {
        FirstPlayerMode::Human => Player::O,
        FirstPlayerMode::Computer => Player::X,
        FirstPlayerMode::Random => {
            if rand::random::<bool>() {
                Player::X
            } else {
                Player::O
            }
        }
    }
}
