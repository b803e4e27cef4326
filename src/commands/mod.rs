pub mod clear;
pub mod command;
pub mod handler;
pub mod help;
pub mod history;
pub mod profile;
pub mod registry;

pub use command::Command;
pub use handler::{CommandHandler, CommandResult};
pub use history::{HistoryDirection, HistoryEntry, HistoryManager};
pub use registry::CommandRegistry;
