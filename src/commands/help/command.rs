use crate::commands::command::Command;
use crate::core::prelude::*;

pub const HELP_TEXT: &str = concat!(
    "\nHELP:\n\n",
    "bio - 'About me'\n\n",
    "stack - 'View my tech stack'\n\n",
    "experience - 'See how long I've been working for'\n\n",
    "info - 'Personal details'\n\n",
    "projects - 'List of major projects'\n\n",
    "contact - 'Get my contact links'\n\n",
    "cls - 'Clears the terminal and history'\n\n",
    "(Use the ↑ and ↓ keys in the terminal to navigate command history)\n\n",
);

#[derive(Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "List the available commands"
    }

    fn execute(&self) -> Result<String> {
        Ok(HELP_TEXT.to_string())
    }

    fn priority(&self) -> u8 {
        95
    }
}
