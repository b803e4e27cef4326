// src/content/mod.rs
use crate::core::prelude::*;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::Path;

const CONTENT_FILE: &str = "content.toml";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Intro text, icon frames and loading frames shown around the terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentData {
    pub loading_frames: Vec<String>,
    pub icon_frames: Vec<String>,
    pub paragraph: String,
    pub art_text: String,
}

impl ContentData {
    /// Content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = Assets::get(CONTENT_FILE)
            .ok_or_else(|| AppError::Content(format!("missing embedded {}", CONTENT_FILE)))?;
        let text = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| AppError::Content(format!("{}: {}", CONTENT_FILE, e)))?;
        Self::from_toml(text)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        Self::from_toml(&text)
    }

    /// Override file from the config when set, embedded content otherwise.
    pub async fn load(config: &Config) -> Result<Self> {
        match &config.effects.content_path {
            Some(path) => {
                log::info!("Loading content from {}", path.display());
                Self::from_file(path).await
            }
            None => Self::embedded(),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let content: Self =
            toml::from_str(text).map_err(|e| AppError::Content(format!("TOML: {}", e)))?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<()> {
        if self.loading_frames.is_empty() {
            return Err(AppError::Content("loading_frames must not be empty".into()));
        }
        if self.icon_frames.is_empty() {
            return Err(AppError::Content("icon_frames must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = ContentData::embedded().expect("embedded content parses");
        assert!(content.loading_frames.len() > 1);
        assert!(content.icon_frames.len() > 1);
        assert!(content.paragraph.contains("help"));
        assert!(!content.art_text.is_empty());
    }

    #[test]
    fn rejects_empty_frames() {
        let text = r#"
paragraph = "hi"
art_text = ""
loading_frames = []
icon_frames = ["x"]
"#;
        assert!(matches!(
            ContentData::from_toml(text),
            Err(AppError::Content(_))
        ));
    }

    #[tokio::test]
    async fn loads_override_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("content.toml");
        tokio::fs::write(
            &path,
            "paragraph = \"p\"\nart_text = \"a\"\nloading_frames = [\"[ ]\", \"[#]\"]\nicon_frames = [\"o\"]\n",
        )
        .await
        .expect("write content");

        let mut config = Config::default();
        config.effects.content_path = Some(path);
        let content = ContentData::load(&config).await.expect("content loads");
        assert_eq!(content.paragraph, "p");
        assert_eq!(content.loading_frames, vec!["[ ]", "[#]"]);
    }
}
