use crate::core::prelude::*;

pub trait Command: Send + Sync + std::fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    // Input arrives lowercased; whole-input match by default
    fn matches(&self, command: &str) -> bool {
        command == self.name()
    }

    fn execute(&self) -> Result<String>;

    // Clear commands wipe display and history instead of printing
    fn is_clear(&self) -> bool {
        false
    }

    fn priority(&self) -> u8 {
        50
    }
    fn is_available(&self) -> bool {
        true
    }
}
