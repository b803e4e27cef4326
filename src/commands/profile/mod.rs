//! Canned portfolio sections. Each command prints a fixed block of text with
//! inline markup that the typewriter reveals.

pub mod bio;
pub mod contact;
pub mod experience;
pub mod info;
pub mod projects;
pub mod stack;

pub use bio::BioCommand;
pub use contact::ContactCommand;
pub use experience::ExperienceCommand;
pub use info::InfoCommand;
pub use projects::ProjectsCommand;
pub use stack::StackCommand;

#[macro_export]
macro_rules! canned_command {
    ($type:ident, $name:literal, $description:literal, $text:expr) => {
        #[derive(Debug, Default)]
        pub struct $type;

        impl $crate::commands::command::Command for $type {
            fn name(&self) -> &'static str {
                $name
            }

            fn description(&self) -> &'static str {
                $description
            }

            fn execute(&self) -> $crate::core::error::Result<String> {
                Ok($text.to_string())
            }
        }
    };
}
