use super::command::Command;
use std::collections::HashMap;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    name_map: HashMap<String, usize>,
    initialized: bool,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            name_map: HashMap::new(),
            initialized: false,
        }
    }

    pub fn register<T: Command>(&mut self, command: T) -> &mut Self {
        self.register_boxed(Box::new(command))
    }

    pub fn register_boxed(&mut self, command: Box<dyn Command>) -> &mut Self {
        let name = command.name().to_lowercase();
        let index = self.commands.len();

        self.commands.push(command);
        self.name_map.insert(name, index);
        self.initialized = false;
        self
    }

    /// Orders commands by priority (highest first) and rebuilds the name index.
    pub fn initialize(&mut self) -> &mut Self {
        if self.initialized {
            return self;
        }

        self.commands
            .sort_by_key(|cmd| std::cmp::Reverse(cmd.priority()));
        self.name_map.clear();
        for (new_idx, cmd) in self.commands.iter().enumerate() {
            self.name_map.insert(cmd.name().to_lowercase(), new_idx);
        }

        self.initialized = true;
        self
    }

    /// Looks up an already-normalized command string.
    pub fn find_command(&self, input: &str) -> Option<&dyn Command> {
        // Exact name
        if let Some(&index) = self.name_map.get(input) {
            return self
                .commands
                .get(index)
                .filter(|cmd| cmd.is_available())
                .map(|cmd| cmd.as_ref());
        }

        // Aliases
        self.commands
            .iter()
            .find(|cmd| cmd.is_available() && cmd.matches(input))
            .map(|cmd| cmd.as_ref())
    }

    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .filter(|cmd| cmd.is_available())
            .map(|cmd| (cmd.name(), cmd.description()))
            .collect()
    }

    pub fn debug_info(&self) -> String {
        format!(
            "CommandRegistry: {} commands, initialized: {}",
            self.commands.len(),
            self.initialized
        )
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prelude::*;

    #[derive(Debug)]
    struct Echo {
        name: &'static str,
        priority: u8,
    }

    impl Command for Echo {
        fn name(&self) -> &'static str {
            self.name
        }
        fn description(&self) -> &'static str {
            "echo"
        }
        fn matches(&self, command: &str) -> bool {
            command == self.name || command == "alias"
        }
        fn execute(&self) -> Result<String> {
            Ok(self.name.to_string())
        }
        fn priority(&self) -> u8 {
            self.priority
        }
    }

    #[test]
    fn initialize_orders_by_priority_and_keeps_lookup() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Echo { name: "low", priority: 10 })
            .register(Echo { name: "high", priority: 90 })
            .initialize();

        let names: Vec<&str> = registry.list_commands().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["high", "low"]);
        assert_eq!(registry.find_command("low").map(|c| c.name()), Some("low"));
    }

    #[test]
    fn falls_back_to_matches_for_aliases() {
        let mut registry = CommandRegistry::new();
        registry.register(Echo { name: "one", priority: 50 }).initialize();
        assert_eq!(registry.find_command("alias").map(|c| c.name()), Some("one"));
        assert!(registry.find_command("two").is_none());
    }

    #[test]
    fn registering_invalidates_initialization() {
        let mut registry = CommandRegistry::new();
        registry.initialize();
        assert!(registry.debug_info().ends_with("initialized: true"));
        registry.register(Echo { name: "x", priority: 1 });
        assert!(registry.debug_info().ends_with("initialized: false"));
        assert_eq!(registry.len(), 1);
    }
}
