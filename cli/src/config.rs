use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Cells are entered as `input_base..input_base + 8`; 1 gives the
    /// keypad-style 1-9 numbering, 0 the raw cell indices.
    pub input_base: u32,
    /// Bracket the winning line when a game ends.
    pub highlight_winner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_base: 1,
            highlight_winner: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.input_base > 1 {
            return Err("input_base must be 0 or 1".to_string());
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config(path: &Path, config: &Config) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))
}
