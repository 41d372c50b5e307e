//! GUI module for the connect-K game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::ConnectKApp;
pub use session::{AiState, GameSession, MoveTimer};
