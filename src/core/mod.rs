// src/core/mod.rs

pub mod html;
pub mod num;
pub mod sanitize;
