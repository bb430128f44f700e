//! GUI module for the checkers game
//!
//! This module provides a native Rust GUI using egui/eframe. It holds no
//! rules of its own: [`GameState`] drives the board, the views only read it.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::CheckersApp;
pub use game_state::{GameError, GameResult, GameState, WinType};
