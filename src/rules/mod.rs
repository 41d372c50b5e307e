//! Game rules for connect-K
//!
//! A player wins by owning every cell of one catalogued line. A full board
//! with no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{outcome, winning_line, Outcome};
