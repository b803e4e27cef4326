pub mod command;

pub use command::ClearCommand;
