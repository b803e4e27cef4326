pub mod event;
pub mod input;
pub mod keyboard;

pub use event::{AppEvent, EventHandler};
pub use input::InputState;
pub use keyboard::{KeyAction, KeyboardManager};
