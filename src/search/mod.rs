//! Search module for the connect-K AI
//!
//! Contains:
//! - Center-first move ordering
//! - Alpha-beta minimax with a heuristic cutoff on wide positions

pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{SearchLimits, SearchResult, SearchStats, SearchType, Searcher};
pub use ordering::ordered_moves;
