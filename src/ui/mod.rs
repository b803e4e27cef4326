// src/ui/mod.rs
pub mod color;
pub mod cursor;
pub mod info;
pub mod screen;
pub mod terminal;
