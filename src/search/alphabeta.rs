//! Alpha-beta minimax search
//!
//! The automated player maximizes and the human minimizes the scores of
//! [`crate::eval`]. The search plays candidate moves directly on the caller's
//! [`GameState`] and reverts each one before trying the next, so the state is
//! bit-for-bit unchanged when [`Searcher::best_move`] returns.
//!
//! Past a fixed depth, positions that still have many empty cells are scored
//! with [`heuristic`] instead of being searched. On 3x3 this never triggers
//! and the search is exact; on larger boards move quality beyond the cutoff
//! is only as good as the heuristic.
//!
//! # Example
//!
//! ```
//! use connectk::{GameConfig, GameState, Player, Pos};
//! use connectk::search::Searcher;
//!
//! let mut state = GameState::new(&GameConfig::default()).unwrap();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.best_move(&mut state, Player::Comp);
//! assert_eq!(result.best_move, Some(Pos::new(1, 1)));
//! assert_eq!(result.score, 0);
//! ```

use crate::board::{GameState, Player, Pos};
use crate::eval::{evaluate, heuristic};

use super::ordered_moves;

/// Depth after which wide positions are scored statically
pub const HEURISTIC_DEPTH: u32 = 3;

/// Empty-cell count above which the static cutoff applies
pub const HEURISTIC_EMPTY_THRESHOLD: usize = 9;

/// When the search stops recursing and falls back to [`heuristic`].
///
/// A move made at ply `depth` with `empties` cells free before it is scored
/// statically iff `depth > exact_depth && empties > empty_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub exact_depth: u32,
    pub empty_threshold: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            exact_depth: HEURISTIC_DEPTH,
            empty_threshold: HEURISTIC_EMPTY_THRESHOLD,
        }
    }
}

/// Which part of the search produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Root move that completes a line at once
    ImmediateWin,
    /// Regular alpha-beta result
    AlphaBeta,
    /// No legal move was left
    Resign,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Maximizing nodes cut at `beta`
    pub beta_cutoffs: u64,
    /// Minimizing nodes cut at `alpha`
    pub alpha_cutoffs: u64,
    /// Branches scored by the heuristic instead of searched
    pub heuristic_cutoffs: u64,
    /// Nodes that were already game over
    pub terminal_nodes: u64,
    /// Root candidates tried by the immediate-win scan, not counted as nodes
    pub immediate_win_checks: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` if the position has no legal move
    pub best_move: Option<Pos>,
    /// Score of the position, from the automated player's side
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    pub search_type: SearchType,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only counters; all position data lives in the [`GameState`] passed
/// to [`Searcher::best_move`].
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    limits: SearchLimits,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with the default cutoff policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Find the best move for `player`.
    ///
    /// The automated player maximizes, the human minimizes. `state` is used
    /// as scratch space and restored before returning. On a finished game the
    /// result carries the terminal score and no move.
    pub fn best_move(&mut self, state: &mut GameState, player: Player) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        if let Some(pos) = self.find_immediate_win(state, player) {
            // Score the win as a terminal leaf would
            self.apply(state, pos, player);
            let score = evaluate(state);
            state.revert(pos, player);
            log::debug!("immediate win for {} at {}", player.name(), pos);
            return self.result(Some(pos), score, SearchType::ImmediateWin);
        }

        let inf = state.lines().win_score() + 1;
        let (score, best_move) = match player {
            Player::Comp => self.max_value(state, -inf, inf, 1),
            Player::Human => self.min_value(state, -inf, inf, 1),
        };

        log::debug!(
            "alpha-beta for {}: score={} move={:?} nodes={} cutoffs(beta={}, alpha={}, heuristic={})",
            player.name(),
            score,
            best_move,
            self.nodes,
            self.stats.beta_cutoffs,
            self.stats.alpha_cutoffs,
            self.stats.heuristic_cutoffs,
        );
        let search_type = if best_move.is_some() {
            SearchType::AlphaBeta
        } else {
            SearchType::Resign
        };
        self.result(best_move, score, search_type)
    }

    fn result(&self, best_move: Option<Pos>, score: i32, search_type: SearchType) -> SearchResult {
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            search_type,
            stats: self.stats.clone(),
        }
    }

    /// First move, in search order, that completes a line for `player`.
    fn find_immediate_win(&mut self, state: &mut GameState, player: Player) -> Option<Pos> {
        if state.game_over() {
            return None;
        }
        for pos in ordered_moves(state) {
            self.stats.immediate_win_checks += 1;
            self.apply(state, pos, player);
            let won = state.wins(player);
            state.revert(pos, player);
            if won {
                return Some(pos);
            }
        }
        None
    }

    /// Apply a move taken from `ordered_moves`, which only yields empty cells.
    #[inline]
    fn apply(&self, state: &mut GameState, pos: Pos, player: Player) {
        if let Err(err) = state.apply(pos, player) {
            unreachable!("search generated an unplayable move: {}", err);
        }
    }

    #[inline]
    fn use_heuristic(&self, depth: u32, empties: usize) -> bool {
        depth > self.limits.exact_depth && empties > self.limits.empty_threshold
    }

    /// Automated player to move
    fn max_value(
        &mut self,
        state: &mut GameState,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;
        if state.game_over() {
            self.stats.terminal_nodes += 1;
            return (evaluate(state), None);
        }

        let moves = ordered_moves(state);
        let empties = moves.len();
        let mut best_score = -(state.lines().win_score() + 1);
        let mut best_move = None;

        for pos in moves {
            self.apply(state, pos, Player::Comp);

            // A completed line is the best this node can do
            if state.wins(Player::Comp) {
                let score = evaluate(state);
                state.revert(pos, Player::Comp);
                return (score, Some(pos));
            }

            let score = if self.use_heuristic(depth, empties) {
                self.stats.heuristic_cutoffs += 1;
                heuristic(state, Player::Human)
            } else {
                self.min_value(state, alpha, beta, depth + 1).0
            };
            state.revert(pos, Player::Comp);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
            if best_score >= beta {
                self.stats.beta_cutoffs += 1;
                return (best_score, best_move);
            }
            alpha = alpha.max(best_score);
        }

        (best_score, best_move)
    }

    /// Human to move
    fn min_value(
        &mut self,
        state: &mut GameState,
        alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;
        if state.game_over() {
            self.stats.terminal_nodes += 1;
            return (evaluate(state), None);
        }

        let moves = ordered_moves(state);
        let empties = moves.len();
        let mut best_score = state.lines().win_score() + 1;
        let mut best_move = None;

        for pos in moves {
            self.apply(state, pos, Player::Human);

            if state.wins(Player::Human) {
                let score = evaluate(state);
                state.revert(pos, Player::Human);
                return (score, Some(pos));
            }

            let score = if self.use_heuristic(depth, empties) {
                self.stats.heuristic_cutoffs += 1;
                heuristic(state, Player::Comp)
            } else {
                self.max_value(state, alpha, beta, depth + 1).0
            };
            state.revert(pos, Player::Human);

            if score < best_score {
                best_score = score;
                best_move = Some(pos);
            }
            if best_score <= alpha {
                self.stats.alpha_cutoffs += 1;
                return (best_score, best_move);
            }
            beta = beta.min(best_score);
        }

        (best_score, best_move)
    }
}
