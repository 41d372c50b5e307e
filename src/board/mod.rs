//! Board representation for connect-K

pub mod bitboard;
pub mod lines;
pub mod state;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::BitBoard;
pub use lines::WinningLines;
pub use state::GameState;

/// Smallest supported board (3x3)
pub const MIN_SIZE: u8 = 3;
/// Largest supported board (9x9)
pub const MAX_SIZE: u8 = 9;
/// Shortest winning run
pub const MIN_RUN_LENGTH: u8 = 3;
/// Longest winning run (further capped by the board size)
pub const MAX_RUN_LENGTH: u8 = 5;

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Automated player (maximizing side)
    Comp,
    /// Human player (minimizing side)
    Human,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Comp => Player::Human,
            Player::Human => Player::Comp,
        }
    }

    /// +1 for the automated player, -1 for the human.
    /// Multiplying a score by this biases it toward the side.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::Comp => 1,
            Player::Human => -1,
        }
    }

    /// Index into per-player arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Comp => 0,
            Player::Human => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Comp => "Computer",
            Player::Human => "Human",
        }
    }
}

/// Mark drawn for a player's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    #[inline]
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = crate::error::ConfigError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            _ => Err(crate::error::ConfigError::InvalidSymbol(c)),
        }
    }
}

impl std::str::FromStr for Symbol {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::try_from(c),
            (Some(c), Some(_)) => Err(crate::error::ConfigError::InvalidSymbol(c)),
            (None, _) => Err(crate::error::ConfigError::InvalidSymbol(' ')),
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Coordinates are checked against a board size where they are used,
    /// since the size is chosen per game.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Squared euclidean distance to the board center `(size/2, size/2)`
    #[inline]
    pub fn center_distance(self, size: u8) -> u32 {
        let center = i32::from(size / 2);
        let dr = i32::from(self.row) - center;
        let dc = i32::from(self.col) - center;
        (dr * dr + dc * dc) as u32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
