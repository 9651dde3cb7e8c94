// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod table;

pub use app::run;
