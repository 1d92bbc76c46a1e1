mod game_config;
mod main_config;
mod window_config;

pub use game_config::GameConfig;
pub use main_config::{Config, DEFAULT_CONFIG_FILE, load_config};
pub use window_config::WindowConfig;
