//! Core game logic module
//!
//! This module contains the board model without any I/O or rendering
//! dependencies, so it can be driven programmatically from tests.

pub mod board;
pub mod config;
pub mod direction;

// Re-export commonly used types
pub use board::{Board, Collision, Position};
pub use config::GameConfig;
pub use direction::Direction;
