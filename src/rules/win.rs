//! Win condition checking
//!
//! Outcome classification and lookup of the completed line, used by the GUI
//! to highlight the winning cells.

use crate::board::{BitBoard, GameState, Player};

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Draw,
    Win(Player),
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Classify the position.
///
/// Both sides can never win at once: a full line needs `run_length` cells
/// owned by one side only.
pub fn outcome(state: &GameState) -> Outcome {
    for player in [Player::Comp, Player::Human] {
        if state.wins(player) {
            return Outcome::Win(player);
        }
    }
    if state.empty_mask().is_empty() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// The first completed line and its owner, if any
pub fn winning_line(state: &GameState) -> Option<(Player, BitBoard)> {
    [Player::Comp, Player::Human].into_iter().find_map(|player| {
        state
            .lines()
            .completed_by(state.stones(player))
            .map(|line| (player, *line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Symbol};
    use crate::config::GameConfig;

    fn state(size: u8, run_length: u8) -> GameState {
        GameState::new(&GameConfig::new(size, Symbol::X, run_length, true)).unwrap()
    }

    fn play(state: &mut GameState, cells: &[(u8, u8)], player: Player) {
        for &(r, c) in cells {
            state.apply(Pos::new(r, c), player).unwrap();
        }
    }

    #[test]
    fn test_in_progress() {
        let mut s = state(3, 3);
        assert_eq!(outcome(&s), Outcome::InProgress);
        play(&mut s, &[(0, 0), (0, 1)], Player::Comp);
        assert_eq!(outcome(&s), Outcome::InProgress);
        assert!(winning_line(&s).is_none());
    }

    #[test]
    fn test_horizontal_win() {
        let mut s = state(5, 4);
        play(&mut s, &[(2, 1), (2, 2), (2, 3), (2, 4)], Player::Human);
        assert_eq!(outcome(&s), Outcome::Win(Player::Human));
        assert_eq!(s.outcome().winner(), Some(Player::Human));
        let (owner, line) = winning_line(&s).unwrap();
        assert_eq!(owner, Player::Human);
        assert_eq!(line.count(), 4);
    }

    #[test]
    fn test_vertical_win() {
        let mut s = state(4, 3);
        play(&mut s, &[(1, 3), (2, 3), (3, 3)], Player::Comp);
        assert_eq!(outcome(&s), Outcome::Win(Player::Comp));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut s = state(3, 3);
        play(&mut s, &[(0, 2), (1, 1), (2, 0)], Player::Comp);
        assert!(s.wins(Player::Comp));
        let (_, line) = winning_line(&s).unwrap();
        assert_eq!(
            line.iter_ones().collect::<Vec<_>>(),
            vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]
        );
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut s = state(5, 3);
        play(&mut s, &[(0, 0), (0, 1), (0, 3), (0, 4)], Player::Comp);
        play(&mut s, &[(0, 2)], Player::Human);
        assert_eq!(outcome(&s), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_draw() {
        let mut s = state(3, 3);
        // X O X
        // X O O
        // O X X
        play(&mut s, &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)], Player::Human);
        play(&mut s, &[(0, 1), (1, 1), (1, 2), (2, 0)], Player::Comp);
        assert!(s.game_over());
        assert_eq!(outcome(&s), Outcome::Draw);
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_win_on_full_board_is_win() {
        let mut s = state(3, 3);
        play(&mut s, &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 0)], Player::Comp);
        play(&mut s, &[(1, 0), (1, 2), (2, 1), (2, 2)], Player::Human);
        assert_eq!(s.empty_count(), 0);
        assert_eq!(outcome(&s), Outcome::Win(Player::Comp));
    }
}
