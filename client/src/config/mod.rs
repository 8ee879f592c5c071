mod config;
mod display_config;
mod game_config;

pub use config::{Config, get_config_manager, get_config_path};
pub use display_config::DisplayConfig;
pub use game_config::GameConfig;
