// src/core/config.rs
use crate::core::constants::*;
use crate::core::prelude::*;
use crate::ui::color::AppColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    general: GeneralConfig,
    #[serde(default)]
    theme: Option<ThemeConfigToml>,
    #[serde(default)]
    effects: Option<EffectsConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    typewriter_delay: u64,
    #[serde(default = "default_paragraph_delay")]
    paragraph_delay: u64,
    #[serde(default = "default_art_delay")]
    art_delay: u64,
    input_max_length: usize,
    poll_rate: u64,
    log_level: String,
    #[serde(default = "default_prompt")]
    prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ThemeConfigToml {
    #[serde(default = "default_output_text")]
    output_text: String,
    #[serde(default = "default_bg")]
    output_bg: String,
    #[serde(default = "default_input_text")]
    input_text: String,
    #[serde(default = "default_link")]
    link: String,
    #[serde(default = "default_accent")]
    accent: String,
    #[serde(default = "default_rain")]
    rain: String,
    #[serde(default = "default_info")]
    info: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct EffectsConfigToml {
    #[serde(default = "default_matrix_rain")]
    matrix_rain: bool,
    #[serde(default = "default_rain_interval")]
    rain_interval: u64,
    #[serde(default = "default_icon_interval")]
    icon_interval: u64,
    #[serde(default = "default_loading_base_delay")]
    loading_base_delay: u64,
    #[serde(default)]
    content_path: Option<String>,
}

// Default Functions
fn default_paragraph_delay() -> u64 {
    DEFAULT_PARAGRAPH_DELAY
}
fn default_art_delay() -> u64 {
    DEFAULT_ART_DELAY
}
fn default_prompt() -> String {
    DEFAULT_PROMPT.into()
}
fn default_output_text() -> String {
    "White".into()
}
fn default_bg() -> String {
    "Black".into()
}
fn default_input_text() -> String {
    "LightGreen".into()
}
fn default_link() -> String {
    "LightCyan".into()
}
fn default_accent() -> String {
    "LightGreen".into()
}
fn default_rain() -> String {
    "DarkGray".into()
}
fn default_info() -> String {
    "Gray".into()
}
fn default_matrix_rain() -> bool {
    true
}
fn default_rain_interval() -> u64 {
    DEFAULT_RAIN_INTERVAL
}
fn default_icon_interval() -> u64 {
    DEFAULT_ICON_INTERVAL
}
fn default_loading_base_delay() -> u64 {
    DEFAULT_LOADING_BASE_DELAY
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub typewriter_delay: Duration,
    pub paragraph_delay: Duration,
    pub art_delay: Duration,
    pub input_max_length: usize,
    pub poll_rate: Duration,
    pub log_level: String,
    pub prompt: String,
    pub theme: Theme,
    pub effects: EffectsConfig,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub output_text: AppColor,
    pub output_bg: AppColor,
    pub input_text: AppColor,
    pub link: AppColor,
    pub accent: AppColor,
    pub rain: AppColor,
    pub info: AppColor,
}

#[derive(Debug, Clone)]
pub struct EffectsConfig {
    pub matrix_rain: bool,
    pub rain_interval: Duration,
    pub icon_interval: Duration,
    pub loading_base_delay: Duration,
    pub content_path: Option<PathBuf>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            output_text: AppColor::new(Color::White),
            output_bg: AppColor::new(Color::Black),
            input_text: AppColor::new(Color::LightGreen),
            link: AppColor::new(Color::LightCyan),
            accent: AppColor::new(Color::LightGreen),
            rain: AppColor::new(Color::DarkGray),
            info: AppColor::new(Color::Gray),
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            matrix_rain: true,
            rain_interval: Duration::from_millis(DEFAULT_RAIN_INTERVAL),
            icon_interval: Duration::from_millis(DEFAULT_ICON_INTERVAL),
            loading_base_delay: Duration::from_millis(DEFAULT_LOADING_BASE_DELAY),
            content_path: None,
        }
    }
}

impl Config {
    pub async fn load() -> Result<Self> {
        Self::load_with_messages(true).await
    }

    pub async fn load_with_messages(show_messages: bool) -> Result<Self> {
        // Try existing configs
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        if show_messages {
                            Self::log_startup(&config);
                        }
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        // Create new config
        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        let config = Self::from_file(&path).await?;

        if show_messages {
            log::info!("New config: {}", path.display());
            Self::log_startup(&config);
        }
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let poll_rate = Self::clamp(
            file.general.poll_rate,
            MIN_POLL_RATE,
            MAX_POLL_RATE,
            DEFAULT_POLL_RATE,
        );
        let typewriter = Self::clamp(
            file.general.typewriter_delay,
            0,
            MAX_TYPEWRITER_DELAY,
            DEFAULT_TYPEWRITER_DELAY,
        );
        let paragraph = Self::clamp(
            file.general.paragraph_delay,
            0,
            MAX_TYPEWRITER_DELAY,
            DEFAULT_PARAGRAPH_DELAY,
        );
        let art = Self::clamp(
            file.general.art_delay,
            0,
            MAX_TYPEWRITER_DELAY,
            DEFAULT_ART_DELAY,
        );

        let theme = match &file.theme {
            Some(def) => Theme::from_config(def).unwrap_or_else(|e| {
                log::warn!("Invalid theme, using defaults: {}", e);
                Theme::default()
            }),
            None => Theme::default(),
        };

        let effects = file
            .effects
            .as_ref()
            .map_or_else(EffectsConfig::default, |e| EffectsConfig {
                matrix_rain: e.matrix_rain,
                rain_interval: Duration::from_millis(Self::clamp(
                    e.rain_interval,
                    MIN_RAIN_INTERVAL,
                    MAX_POLL_RATE,
                    DEFAULT_RAIN_INTERVAL,
                )),
                icon_interval: Duration::from_millis(Self::clamp(
                    e.icon_interval,
                    MIN_POLL_RATE,
                    10_000,
                    DEFAULT_ICON_INTERVAL,
                )),
                loading_base_delay: Duration::from_millis(Self::clamp(
                    e.loading_base_delay,
                    1,
                    MAX_TYPEWRITER_DELAY,
                    DEFAULT_LOADING_BASE_DELAY,
                )),
                content_path: e.content_path.as_ref().map(PathBuf::from),
            });

        let input_max_length = if file.general.input_max_length == 0 {
            DEFAULT_INPUT_MAX_LENGTH
        } else {
            file.general.input_max_length
        };

        Ok(Self {
            config_path: Some(path.as_ref().to_path_buf()),
            typewriter_delay: Duration::from_millis(typewriter),
            paragraph_delay: Duration::from_millis(paragraph),
            art_delay: Duration::from_millis(art),
            input_max_length,
            poll_rate: Duration::from_millis(poll_rate),
            log_level: file.general.log_level,
            prompt: file.general.prompt,
            theme,
            effects,
        })
    }

    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let file = ConfigFile {
            general: GeneralConfig {
                typewriter_delay: self.typewriter_delay.as_millis() as u64,
                paragraph_delay: self.paragraph_delay.as_millis() as u64,
                art_delay: self.art_delay.as_millis() as u64,
                input_max_length: self.input_max_length,
                poll_rate: self.poll_rate.as_millis() as u64,
                log_level: self.log_level.clone(),
                prompt: self.prompt.clone(),
            },
            theme: Some(self.theme.to_config()),
            effects: Some(EffectsConfigToml {
                matrix_rain: self.effects.matrix_rain,
                rain_interval: self.effects.rain_interval.as_millis() as u64,
                icon_interval: self.effects.icon_interval.as_millis() as u64,
                loading_base_delay: self.effects.loading_base_delay.as_millis() as u64,
                content_path: self
                    .effects
                    .content_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            }),
        };

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::Io)?;
        }

        tokio::fs::write(path, content).await.map_err(AppError::Io)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }

    pub fn get_performance_info(&self) -> String {
        let fps = 1000.0 / self.poll_rate.as_millis() as f64;
        let typewriter = if self.typewriter_delay.as_millis() > 0 {
            1000.0 / self.typewriter_delay.as_millis() as f64
        } else {
            f64::INFINITY
        };
        format!(
            "Performance: {:.1} FPS, Typewriter: {:.1} chars/sec",
            fps, typewriter
        )
    }

    // Helper methods
    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn log_startup(config: &Config) {
        log::info!("Folio Terminal v{}", VERSION);
        log::info!("{}", config.get_performance_info());
    }
}

impl Theme {
    fn from_config(def: &ThemeConfigToml) -> Result<Self> {
        Ok(Self {
            output_text: AppColor::from_string(&def.output_text)?,
            output_bg: AppColor::from_string(&def.output_bg)?,
            input_text: AppColor::from_string(&def.input_text)?,
            link: AppColor::from_string(&def.link)?,
            accent: AppColor::from_string(&def.accent)?,
            rain: AppColor::from_string(&def.rain)?,
            info: AppColor::from_string(&def.info)?,
        })
    }

    fn to_config(&self) -> ThemeConfigToml {
        ThemeConfigToml {
            output_text: self.output_text.to_name().into(),
            output_bg: self.output_bg.to_name().into(),
            input_text: self.input_text.to_name().into(),
            link: self.link.to_name().into(),
            accent: self.accent.to_name().into(),
            rain: self.rain.to_name().into(),
            info: self.info.to_name().into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            typewriter_delay: Duration::from_millis(DEFAULT_TYPEWRITER_DELAY),
            paragraph_delay: Duration::from_millis(DEFAULT_PARAGRAPH_DELAY),
            art_delay: Duration::from_millis(DEFAULT_ART_DELAY),
            input_max_length: DEFAULT_INPUT_MAX_LENGTH,
            poll_rate: Duration::from_millis(DEFAULT_POLL_RATE),
            log_level: "info".into(),
            prompt: DEFAULT_PROMPT.into(),
            theme: Theme::default(),
            effects: EffectsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[tokio::test]
    async fn loads_minimal_config_with_defaults() {
        let file = write_config(
            r#"[general]
typewriter_delay = 25
input_max_length = 80
poll_rate = 33
log_level = "debug"
"#,
        );

        let config = Config::from_file(file.path()).await.expect("config loads");
        assert_eq!(config.typewriter_delay, Duration::from_millis(25));
        assert_eq!(config.poll_rate, Duration::from_millis(33));
        assert_eq!(config.input_max_length, 80);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        assert!(config.effects.matrix_rain);
        assert_eq!(
            config.effects.rain_interval,
            Duration::from_millis(DEFAULT_RAIN_INTERVAL)
        );
    }

    #[tokio::test]
    async fn out_of_range_values_fall_back() {
        let file = write_config(
            r#"[general]
typewriter_delay = 999999
input_max_length = 0
poll_rate = 1
log_level = "nonsense"

[effects]
rain_interval = 1
"#,
        );

        let config = Config::from_file(file.path()).await.expect("config loads");
        assert_eq!(
            config.typewriter_delay,
            Duration::from_millis(DEFAULT_TYPEWRITER_DELAY)
        );
        assert_eq!(config.poll_rate, Duration::from_millis(DEFAULT_POLL_RATE));
        assert_eq!(config.input_max_length, DEFAULT_INPUT_MAX_LENGTH);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            config.effects.rain_interval,
            Duration::from_millis(DEFAULT_RAIN_INTERVAL)
        );
    }

    #[tokio::test]
    async fn invalid_theme_uses_default_theme() {
        let file = write_config(
            r#"[general]
typewriter_delay = 10
input_max_length = 100
poll_rate = 16
log_level = "info"

[theme]
output_text = "NotAColor"
"#,
        );

        let config = Config::from_file(file.path()).await.expect("config loads");
        assert_eq!(config.theme.output_text, Theme::default().output_text);
    }

    #[tokio::test]
    async fn rejects_broken_toml() {
        let file = write_config("[general\nbroken");
        assert!(matches!(
            Config::from_file(file.path()).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn save_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("folio.toml");
        tokio::fs::write(
            &path,
            "[general]\ntypewriter_delay = 40\ninput_max_length = 50\npoll_rate = 20\nlog_level = \"warn\"\n",
        )
        .await
        .expect("seed config");

        let mut config = Config::from_file(&path).await.expect("config loads");
        config.effects.matrix_rain = false;
        config.save().await.expect("config saves");

        let reloaded = Config::from_file(&path).await.expect("config reloads");
        assert!(!reloaded.effects.matrix_rain);
        assert_eq!(reloaded.typewriter_delay, Duration::from_millis(40));
        assert_eq!(reloaded.log_level, "warn");
    }
}
