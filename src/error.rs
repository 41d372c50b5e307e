//! Error types for the connect-K engine

use thiserror::Error;

/// Errors raised by bitboard coordinate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: u8, col: u8, size: u8 },
}

/// Errors raised while playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Target cell is occupied or outside the board. The state is unchanged.
    #[error("invalid move at ({row}, {col})")]
    InvalidMove { row: u8, col: u8 },
}

/// Errors raised when a game configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {size} is out of range (3-9)")]
    SizeOutOfRange { size: u8 },

    #[error("run length {run_length} is out of range (3-{max})")]
    RunLengthOutOfRange { run_length: u8, max: u8 },

    #[error("invalid symbol '{0}' (expected X or O)")]
    InvalidSymbol(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfRange { row: 3, col: 1, size: 3 };
        assert_eq!(err.to_string(), "cell (3, 1) is outside the 3x3 board");
    }

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidMove { row: 1, col: 2 };
        assert_eq!(err.to_string(), "invalid move at (1, 2)");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::SizeOutOfRange { size: 10 }.to_string(),
            "board size 10 is out of range (3-9)"
        );
        assert_eq!(
            ConfigError::RunLengthOutOfRange { run_length: 5, max: 4 }.to_string(),
            "run length 5 is out of range (3-4)"
        );
        assert_eq!(
            ConfigError::InvalidSymbol('Z').to_string(),
            "invalid symbol 'Z' (expected X or O)"
        );
    }
}
