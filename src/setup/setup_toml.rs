// src/setup/setup_toml.rs
use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

pub const DEFAULT_CONFIG: &str = r#"[general]
# Delay between revealed characters of a command response (ms, 0 = instant)
typewriter_delay = 10
# Intro paragraph and ASCII art reveal delays (ms)
paragraph_delay = 1
art_delay = 1
input_max_length = 100
# Event loop tick: 16ms = 60 FPS, keep it at 16 or above
poll_rate = 16
log_level = "info"
prompt = 'C:\Users\Client > '

[theme]
output_text = "White"
output_bg = "Black"
input_text = "LightGreen"
link = "LightCyan"
accent = "LightGreen"
rain = "DarkGray"
info = "Gray"

[effects]
matrix_rain = true
# Rain frame interval (ms, minimum 10)
rain_interval = 35
icon_interval = 500
# Base delay of one loading bar frame (ms)
loading_base_delay = 20
# content_path = "content.toml"
"#;

/// Directory next to the executable that holds config and log.
pub fn app_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Validation("Cannot resolve executable directory".into()))?;
    Ok(base_dir.join(CONFIG_DIR))
}

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let config_dir = app_dir()?;
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config dir {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Created default config at {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
            paths.push(base_dir.join("config").join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::DEFAULT_PROMPT;

    #[tokio::test]
    async fn default_config_round_trips_through_loader() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, DEFAULT_CONFIG).await.expect("write");

        let config = Config::from_file(&path).await.expect("default config parses");
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.typewriter_delay, Duration::from_millis(10));
        assert!(config.effects.matrix_rain);
        assert!(config.effects.content_path.is_none());
    }

    #[test]
    fn search_paths_prefer_app_dir() {
        let paths = get_config_paths();
        let first = paths.first().expect("at least one path");
        assert!(first.ends_with(PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)));
    }
}
