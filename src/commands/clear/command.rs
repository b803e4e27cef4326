use crate::commands::command::Command;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "cls"
    }

    fn description(&self) -> &'static str {
        "Clears the terminal and history"
    }

    fn execute(&self) -> Result<String> {
        Ok(String::new())
    }

    fn is_clear(&self) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        80
    }
}
