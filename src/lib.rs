//! Snakes - a real-time terminal snake game with persistent high scores
//!
//! This library provides:
//! - Core board logic (game module)
//! - The welcome/playing/paused/game-over session flow (session module)
//! - High-score persistence (persistence module)
//! - TUI rendering (render module) and key translation (input module)
//! - The fixed-rate game loop driver (app module)

pub mod app;
pub mod audio;
pub mod game;
pub mod input;
pub mod persistence;
pub mod render;
pub mod session;
