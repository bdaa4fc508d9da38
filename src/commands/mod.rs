//! Command implementations for the NBA shot chart CLI

pub mod players;
pub mod shots;
