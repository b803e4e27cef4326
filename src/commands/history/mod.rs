pub mod manager;

pub use manager::{HistoryDirection, HistoryEntry, HistoryManager};
