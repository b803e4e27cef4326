// src/lib.rs
pub mod animation;
pub mod commands;
pub mod content;
pub mod core;
pub mod input;
pub mod markup;
pub mod output;
pub mod session;
pub mod setup;
pub mod ui;

pub use commands::{Command, CommandHandler, CommandRegistry, CommandResult};
pub use content::ContentData;
pub use core::config::Config;
pub use core::error::{AppError, Result};
pub use session::{SubmitOutcome, TerminalSession};
pub use ui::screen::ScreenManager;

/// Registry with every portfolio command plus `cls`.
pub fn create_default_registry() -> CommandRegistry {
    use commands::{
        clear::ClearCommand,
        help::HelpCommand,
        profile::{
            BioCommand, ContactCommand, ExperienceCommand, InfoCommand, ProjectsCommand,
            StackCommand,
        },
    };

    let mut registry = CommandRegistry::new();

    registry
        .register(HelpCommand)
        .register(BioCommand)
        .register(StackCommand)
        .register(ExperienceCommand)
        .register(InfoCommand)
        .register(ProjectsCommand)
        .register(ContactCommand)
        .register(ClearCommand);

    registry.initialize();
    registry
}

pub async fn run() -> Result<()> {
    let config = Config::load().await?;
    run_with_config(config).await
}

pub async fn run_with_config(config: Config) -> Result<()> {
    let content = match ContentData::load(&config).await {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Content override unusable, using embedded content: {}", e);
            ContentData::embedded()?
        }
    };

    let mut screen = ScreenManager::new(config, content).await?;
    screen.run().await
}
