// src/output/mod.rs
pub mod display;
pub mod logging;
pub mod scroll;

pub use display::{render_nodes, OutputBuffer};
pub use scroll::ScrollState;
