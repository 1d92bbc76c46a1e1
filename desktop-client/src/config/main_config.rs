use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::log;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{GameConfig, WindowConfig};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Reads the settings at `path`, falling back to defaults when the file is
/// unreadable or invalid. With `save`, writes the effective settings back,
/// but never over a file that failed to load.
pub fn load_config(path: &Path, save: bool) -> Config {
    let manager = get_config_manager(path);
    let (config, loaded) = match manager.get_config() {
        Ok(config) => (config, true),
        Err(e) => {
            log!("Using default settings: {}", e);
            (Config::default(), false)
        }
    };

    if save {
        if !loaded {
            log!(
                "Not saving settings: {} could not be loaded and is left untouched",
                path.display()
            );
        } else {
            match manager.set_config(&config) {
                Ok(()) => log!("Settings written to {}", path.display()),
                Err(e) => log!("Could not save settings: {}", e),
            }
        }
    }

    config
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub window: WindowConfig,
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.game.validate()?;
        Ok(())
    }
}
