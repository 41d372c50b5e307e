//! AI engine for the automated player
//!
//! Wraps the alpha-beta [`Searcher`] with timing, logging and
//! a short remark on how the engine rates the position.
//!
//! # Example
//!
//! ```
//! use connectk::{AIEngine, GameConfig, GameState, Player, Pos};
//!
//! let mut state = GameState::new(&GameConfig::default()).unwrap();
//! state.apply(Pos::new(1, 1), Player::Human).unwrap();
//!
//! let mut engine = AIEngine::new();
//! let result = engine.get_move_with_stats(&state, Player::Comp);
//! if let Some(pos) = result.best_move {
//!     state.apply(pos, Player::Comp).unwrap();
//! }
//! println!("{}", result.commentary());
//! ```

use std::time::Instant;

use crate::board::{GameState, Player, Pos};
use crate::search::{SearchLimits, SearchResult, SearchType, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` means the engine has no move and resigns
    pub best_move: Option<Pos>,
    /// Score of the position, positive favours the automated player
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Terminal magnitude of the game the move was found in
    pub win_score: i32,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64, win_score: i32) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: result.search_type,
            time_ms,
            nodes: result.nodes,
            win_score,
        }
    }

    #[inline]
    pub fn is_resignation(&self) -> bool {
        self.search_type == SearchType::Resign
    }

    /// One-line remark on the score, seen from the automated player
    pub fn commentary(&self) -> &'static str {
        if self.is_resignation() {
            "I resign."
        } else if self.score >= self.win_score {
            "I went forward to see every possible outcome. You're not in it."
        } else if self.score < 0 {
            "You are one of the strongest humans."
        } else if self.score > 10 {
            "What do you do for a living? I can do it better."
        } else if self.score > 0 {
            "Human. Poor creature."
        } else {
            "I just need a little more training to replace humans."
        }
    }
}

/// Engine that picks moves for one side.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default cutoff policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            searcher: Searcher::with_limits(limits),
        }
    }

    pub fn limits(&self) -> SearchLimits {
        self.searcher.limits()
    }

    /// Get the best move for `player`, or `None` if there is none.
    #[must_use]
    pub fn get_move(&mut self, state: &GameState, player: Player) -> Option<Pos> {
        self.get_move_with_stats(state, player).best_move
    }

    /// Search a scratch copy of `state` and report the move with statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &GameState, player: Player) -> MoveResult {
        let start = Instant::now();
        let mut scratch = state.clone();

        let result = self.searcher.best_move(&mut scratch, player);
        let time_ms = start.elapsed().as_millis() as u64;
        let result = MoveResult::from_search(result, time_ms, state.lines().win_score());

        match result.best_move {
            Some(pos) => log::info!(
                "{} plays {} ({:?}): score={}, nodes={}, time={}ms",
                player.name(),
                pos,
                result.search_type,
                result.score,
                result.nodes,
                result.time_ms
            ),
            None => log::info!("{} has no move: score={}", player.name(), result.score),
        }
        result
    }
}
