//! Evaluation module for connect-K
//!
//! This module provides:
//! - Terminal scoring of won/drawn positions
//! - A line-potential heuristic for positions the search does not resolve

pub mod heuristic;

pub use heuristic::{evaluate, heuristic, line_potential};
