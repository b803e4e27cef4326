// src/commands/handler.rs
use super::registry::CommandRegistry;
use crate::core::constants::{STATUS_ERROR, STATUS_NOT_FOUND, STATUS_OK};

/// Outcome of resolving one submitted line. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub command: String,
    pub response_text: String,
    pub status_code: u16,
    pub is_clear_command: bool,
}

impl CommandResult {
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

pub fn not_found_response(command: &str) -> String {
    format!("\nCommand not found: {}\n\n", command)
}

pub struct CommandHandler {
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            registry: crate::create_default_registry(),
        }
    }

    pub fn with_registry(mut registry: CommandRegistry) -> Self {
        registry.initialize();
        Self { registry }
    }

    /// Lowercases the whole input and resolves it against the registry.
    pub fn resolve(&self, input: &str) -> CommandResult {
        let command = input.to_lowercase();

        let Some(cmd) = self.registry.find_command(&command) else {
            log::warn!("Unknown command: {}", command);
            return CommandResult {
                response_text: not_found_response(&command),
                command,
                status_code: STATUS_NOT_FOUND,
                is_clear_command: false,
            };
        };

        if cmd.is_clear() {
            log::info!("Clear requested via '{}'", command);
            return CommandResult {
                command,
                response_text: String::new(),
                status_code: STATUS_OK,
                is_clear_command: true,
            };
        }

        match cmd.execute() {
            Ok(response_text) => {
                log::info!(
                    "Command '{}' returned {} chars",
                    command,
                    response_text.chars().count()
                );
                CommandResult {
                    command,
                    response_text,
                    status_code: STATUS_OK,
                    is_clear_command: false,
                }
            }
            Err(e) => {
                log::error!("Command '{}' failed: {}", command, e);
                CommandResult {
                    response_text: format!("\n{}\n\n", e),
                    command,
                    status_code: STATUS_ERROR,
                    is_clear_command: false,
                }
            }
        }
    }

    pub fn add_command<T: crate::commands::command::Command>(&mut self, command: T) {
        self.registry.register(command);
        self.registry.initialize();
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.registry.list_commands()
    }

    pub fn debug_info(&self) -> String {
        self.registry.debug_info()
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::command::Command;
    use crate::core::prelude::*;

    #[derive(Debug)]
    struct BrokenCommand;

    impl Command for BrokenCommand {
        fn name(&self) -> &'static str {
            "broken"
        }
        fn description(&self) -> &'static str {
            "Always fails"
        }
        fn execute(&self) -> Result<String> {
            Err(AppError::Validation("boom".into()))
        }
    }

    #[test]
    fn command_errors_surface_as_500() {
        let mut handler = CommandHandler::new();
        handler.add_command(BrokenCommand);
        let result = handler.resolve("BROKEN");
        assert_eq!(result.status_code, STATUS_ERROR);
        assert!(result.response_text.contains("boom"));
        assert!(!result.is_success());
    }

    #[test]
    fn whitespace_is_part_of_the_command() {
        let handler = CommandHandler::new();
        let result = handler.resolve("help me");
        assert_eq!(result.status_code, STATUS_NOT_FOUND);
        assert_eq!(result.response_text, "\nCommand not found: help me\n\n");
    }
}
