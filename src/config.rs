//! Game configuration

use crate::board::{Symbol, MAX_RUN_LENGTH, MAX_SIZE, MIN_RUN_LENGTH, MIN_SIZE};
use crate::error::ConfigError;

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board is `size` x `size`
    pub size: u8,
    /// Mark the human plays with; the computer gets the other one
    pub human_symbol: Symbol,
    /// Cells in a row needed to win
    pub run_length: u8,
    /// Whether the human makes the first move
    pub human_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            human_symbol: Symbol::X,
            run_length: 3,
            human_first: true,
        }
    }
}

impl GameConfig {
    pub fn new(size: u8, human_symbol: Symbol, run_length: u8, human_first: bool) -> Self {
        Self {
            size,
            human_symbol,
            run_length,
            human_first,
        }
    }

    /// Validate board size and run length ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange { size: self.size });
        }
        let max = max_run_length(self.size);
        if !(MIN_RUN_LENGTH..=max).contains(&self.run_length) {
            return Err(ConfigError::RunLengthOutOfRange {
                run_length: self.run_length,
                max,
            });
        }
        Ok(())
    }
}

/// Longest run length allowed on a board of `size`
pub fn max_run_length(size: u8) -> u8 {
    size.min(MAX_RUN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_size_bounds() {
        for size in 3..=9 {
            assert!(GameConfig::new(size, Symbol::X, 3, true).validate().is_ok());
        }
        assert_eq!(
            GameConfig::new(2, Symbol::X, 3, true).validate(),
            Err(ConfigError::SizeOutOfRange { size: 2 })
        );
        assert_eq!(
            GameConfig::new(10, Symbol::O, 3, false).validate(),
            Err(ConfigError::SizeOutOfRange { size: 10 })
        );
    }

    #[test]
    fn test_run_length_bounds() {
        assert!(GameConfig::new(9, Symbol::X, 5, true).validate().is_ok());
        assert_eq!(
            GameConfig::new(9, Symbol::X, 6, true).validate(),
            Err(ConfigError::RunLengthOutOfRange { run_length: 6, max: 5 })
        );
        assert_eq!(
            GameConfig::new(4, Symbol::X, 5, true).validate(),
            Err(ConfigError::RunLengthOutOfRange { run_length: 5, max: 4 })
        );
        assert_eq!(
            GameConfig::new(5, Symbol::X, 2, true).validate(),
            Err(ConfigError::RunLengthOutOfRange { run_length: 2, max: 5 })
        );
    }

    #[test]
    fn test_max_run_length() {
        assert_eq!(max_run_length(3), 3);
        assert_eq!(max_run_length(4), 4);
        assert_eq!(max_run_length(5), 5);
        assert_eq!(max_run_length(9), 5);
    }
}
