mod bot_config;
mod config;

pub use bot_config::BotConfig;
pub use config::{Config, get_config_manager};
