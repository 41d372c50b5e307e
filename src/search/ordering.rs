//! Move ordering for alpha-beta
//!
//! Cells closest to the center are tried first. The sort is stable, so cells
//! at equal distance keep row-major order and the search stays reproducible.

use crate::board::{GameState, Pos};

/// Empty cells sorted by squared distance to `(size/2, size/2)`
pub fn ordered_moves(state: &GameState) -> Vec<Pos> {
    let size = state.size();
    let mut moves = state.empty_cells();
    moves.sort_by_key(|pos| pos.center_distance(size));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Player, Symbol};
    use crate::config::GameConfig;

    fn state(size: u8) -> GameState {
        GameState::new(&GameConfig::new(size, Symbol::X, 3, true)).unwrap()
    }

    #[test]
    fn test_3x3_order() {
        let moves = ordered_moves(&state(3));
        assert_eq!(
            moves,
            vec![
                Pos::new(1, 1),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 2),
                Pos::new(2, 1),
                Pos::new(0, 0),
                Pos::new(0, 2),
                Pos::new(2, 0),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_even_board_center_rounds_down() {
        let moves = ordered_moves(&state(4));
        assert_eq!(moves[0], Pos::new(2, 2));
        assert_eq!(&moves[1..5], &[Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 3), Pos::new(3, 2)]);
        assert_eq!(*moves.last().unwrap(), Pos::new(0, 0));
    }

    #[test]
    fn test_skips_occupied() {
        let mut s = state(3);
        s.apply(Pos::new(1, 1), Player::Human).unwrap();
        s.apply(Pos::new(1, 0), Player::Comp).unwrap();
        let moves = ordered_moves(&s);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Pos::new(0, 1));
        assert!(!moves.contains(&Pos::new(1, 1)));
    }

    #[test]
    fn test_distances_non_decreasing() {
        let s = state(9);
        let moves = ordered_moves(&s);
        assert_eq!(moves.len(), 81);
        for pair in moves.windows(2) {
            assert!(pair[0].center_distance(9) <= pair[1].center_distance(9));
        }
    }
}
