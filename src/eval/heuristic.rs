//! Position evaluation for connect-K
//!
//! All scores are from the automated player's point of view: positive favours
//! `Player::Comp`, negative favours `Player::Human`. The terminal magnitude
//! `W` is the catalogue size squared, which no heuristic total can reach.

use crate::board::{GameState, Player};

/// Terminal score.
///
/// Returns `+W` if the automated player has a completed line, `-W` if the
/// human has one, and `0` otherwise (game in progress or drawn).
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    let win = state.lines().win_score();
    if state.wins(Player::Comp) {
        win
    } else if state.wins(Player::Human) {
        -win
    } else {
        0
    }
}

/// Static estimate for positions cut off by the search.
///
/// If `player` has already won this is `player.sign() * W`. Otherwise each
/// line still open for a side (no opposing mark inside it) contributes the
/// number of that side's marks already on it, and the result is
/// `player.sign() * (own potential - opponent potential)`.
///
/// Double threats and forced sequences are not modelled.
#[must_use]
pub fn heuristic(state: &GameState, player: Player) -> i32 {
    if state.wins(player) {
        return player.sign() * state.lines().win_score();
    }

    let own = line_potential(state, player);
    let opp = line_potential(state, player.opponent());
    player.sign() * (own - opp)
}

/// Sum over open lines of the marks `player` already has on them
#[must_use]
pub fn line_potential(state: &GameState, player: Player) -> i32 {
    let stones = state.stones(player);
    let possible = *stones | *state.empty_mask();

    state
        .lines()
        .iter()
        .filter(|line| possible.contains(line))
        .map(|line| (*stones & *line).count() as i32)
        .sum()
}
