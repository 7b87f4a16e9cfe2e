// src/core/mod.rs

pub mod engine;
pub mod english;
pub mod hebrew;
pub mod tables;
pub mod types;
