use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Comp.opponent(), Player::Human);
    assert_eq!(Player::Human.opponent(), Player::Comp);
}

#[test]
fn test_player_sign() {
    assert_eq!(Player::Comp.sign(), 1);
    assert_eq!(Player::Human.sign(), -1);
    assert_eq!(Player::Comp.opponent().sign(), -Player::Comp.sign());
}

#[test]
fn test_player_index() {
    assert_ne!(Player::Comp.index(), Player::Human.index());
    assert!(Player::Comp.index() < 2 && Player::Human.index() < 2);
}

#[test]
fn test_symbol_parse() {
    assert_eq!("x".parse::<Symbol>(), Ok(Symbol::X));
    assert_eq!(" O ".parse::<Symbol>(), Ok(Symbol::O));
    assert!("xo".parse::<Symbol>().is_err());
    assert!("".parse::<Symbol>().is_err());
    assert_eq!(Symbol::try_from('q'), Err(crate::error::ConfigError::InvalidSymbol('q')));
    assert_eq!(Symbol::X.other(), Symbol::O);
    assert_eq!(Symbol::O.to_string(), "O");
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.col, 1);
    assert_eq!(pos.to_string(), "(2, 1)");
}

#[test]
fn test_pos_within() {
    assert!(Pos::new(0, 0).is_within(3));
    assert!(Pos::new(2, 2).is_within(3));
    assert!(!Pos::new(3, 0).is_within(3));
    assert!(!Pos::new(0, 3).is_within(3));
    assert!(Pos::new(8, 8).is_within(MAX_SIZE));
}

#[test]
fn test_pos_center_distance() {
    assert_eq!(Pos::new(1, 1).center_distance(3), 0);
    assert_eq!(Pos::new(0, 1).center_distance(3), 1);
    assert_eq!(Pos::new(0, 0).center_distance(3), 2);
    // 4x4 center is (2, 2) by integer division
    assert_eq!(Pos::new(2, 2).center_distance(4), 0);
    assert_eq!(Pos::new(0, 0).center_distance(4), 8);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_constants() {
    assert_eq!(MIN_SIZE, 3);
    assert_eq!(MAX_SIZE, 9);
    assert_eq!(MIN_RUN_LENGTH, 3);
    assert_eq!(MAX_RUN_LENGTH, 5);
}
