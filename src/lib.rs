//! Connect-K engine for N x N boards
//!
//! Two players alternate placing marks on a square board of side 3 to 9.
//! The first to fill `K` consecutive cells in a row, column or diagonal wins;
//! a full board with no such run is a draw. One side is the human, the other
//! an automated player driven by alpha-beta search.
//!
//! # Architecture
//!
//! - [`board`]: Packed bitboards, the winning-line catalogue and [`GameState`]
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Terminal scores and the open-line heuristic
//! - [`search`]: Alpha-beta with center-first move ordering
//! - [`engine`]: Timed, logged entry point for the automated player
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use connectk::{AIEngine, GameConfig, GameState, Player, Pos};
//!
//! let config = GameConfig::default();
//! let mut state = GameState::new(&config).unwrap();
//! state.apply(Pos::new(0, 0), Player::Human).unwrap();
//!
//! let mut engine = AIEngine::new();
//! if let Some(pos) = engine.get_move(&state, Player::Comp) {
//!     state.apply(pos, Player::Comp).unwrap();
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search
//!
//! 1. Immediate winning move at the root
//! 2. Alpha-beta minimax, switching to the heuristic past depth 3 while more
//!    than 9 cells are empty

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{BitBoard, GameState, Player, Pos, Symbol, WinningLines};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, GameError};
pub use rules::Outcome;
pub use search::SearchType;
