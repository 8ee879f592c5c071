mod config;
mod input;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, GameMode};
use common::logger::{self, LogLevel};
use common::log;

use config::{Config, get_config_manager, get_config_path};
use session::TerminalSession;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Play against the minimax bot
    Bot,
    /// Two players on one terminal
    Friend,
}

impl From<ModeArg> for GameMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Bot => GameMode::VsComputer,
            ModeArg::Friend => GameMode::VsHuman,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Human,
    Computer,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(value: FirstArg) -> Self {
        match value {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Computer => FirstPlayerMode::Computer,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a friend or a minimax bot")]
struct Args {
    /// Config file, defaults to ./tictactoe_config.yaml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the start menu
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Who plays X and moves first against the computer
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Pause before the computer's move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u32>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.game.mode = Some(mode.into());
        }
        if let Some(first) = self.first {
            config.game.first_player = first.into();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.game.bot_delay_ms = delay_ms;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    let config_path = get_config_path(args.config.as_deref());
    let config_manager = get_config_manager(Some(config_path.as_path()));
    let mut config = config_manager.get_config()?;
    args.apply(&mut config);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", config_path.display());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = TerminalSession::new(stdin.lock(), stdout.lock(), config);
    session.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let args = Args::parse_from([
            "tictactoe",
            "--mode",
            "bot",
            "--first",
            "computer",
            "--delay-ms",
            "0",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.game.mode, Some(GameMode::VsComputer));
        assert_eq!(config.game.first_player, FirstPlayerMode::Computer);
        assert_eq!(config.game.bot_delay_ms, 0);
    }

    #[test]
    fn test_no_args_keep_config() {
        let args = Args::parse_from(["tictactoe"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_delay_over_limit_fails_validation() {
        let args = Args::parse_from(["tictactoe", "--delay-ms", "9000"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert!(config.validate().is_err());
    }
}
