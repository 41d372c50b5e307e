//! Game state: occupancy bitboards plus the empty-cell mask

use std::sync::Arc;

use super::{BitBoard, Player, Pos, Symbol, WinningLines};
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::rules::{self, Outcome};

/// Position of one game.
///
/// Every cell is set in exactly one of the two player boards or the empty
/// mask. The search plays moves with [`GameState::apply`] and takes them back
/// with [`GameState::revert`]; there is no history, so whoever applies a move
/// must revert it, last in first out.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player boards, indexed by `Player::index()`
    players: [BitBoard; 2],
    /// Set bit = empty cell
    mt: BitBoard,
    /// Shared read-only with any clone of this state
    lines: Arc<WinningLines>,
    human_symbol: Symbol,
    human_first: bool,
}

impl GameState {
    /// Create an empty board for `config`.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            players: [BitBoard::new(config.size); 2],
            mt: BitBoard::full(config.size),
            lines: Arc::new(WinningLines::new(config.size, config.run_length)),
            human_symbol: config.human_symbol,
            human_first: config.human_first,
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.mt.size()
    }

    #[inline]
    pub fn run_length(&self) -> u8 {
        self.lines.run_length()
    }

    /// The configuration this game was built from
    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.size(), self.human_symbol, self.run_length(), self.human_first)
    }

    #[inline]
    pub fn lines(&self) -> &WinningLines {
        &self.lines
    }

    #[inline]
    pub fn empty_mask(&self) -> &BitBoard {
        &self.mt
    }

    /// Occupancy bitboard for a player
    #[inline]
    pub fn stones(&self, player: Player) -> &BitBoard {
        &self.players[player.index()]
    }

    #[inline]
    pub fn human_symbol(&self) -> Symbol {
        self.human_symbol
    }

    #[inline]
    pub fn human_first(&self) -> bool {
        self.human_first
    }

    pub fn first_player(&self) -> Player {
        if self.human_first {
            Player::Human
        } else {
            Player::Comp
        }
    }

    pub fn symbol_of(&self, player: Player) -> Symbol {
        match player {
            Player::Human => self.human_symbol,
            Player::Comp => self.human_symbol.other(),
        }
    }

    pub fn player_with(&self, symbol: Symbol) -> Player {
        if symbol == self.human_symbol {
            Player::Human
        } else {
            Player::Comp
        }
    }

    /// Owner of a cell, `None` for empty or off-board cells
    pub fn cell(&self, pos: Pos) -> Option<Player> {
        [Player::Comp, Player::Human]
            .into_iter()
            .find(|&p| self.players[p.index()].is_set(pos))
    }

    /// Cell is on the board and empty
    #[inline]
    pub fn valid_move(&self, pos: Pos) -> bool {
        self.mt.is_set(pos)
    }

    /// Place `player`'s mark at `pos`.
    ///
    /// Fails with [`GameError::InvalidMove`] for occupied or off-board cells,
    /// leaving the state untouched.
    pub fn apply(&mut self, pos: Pos, player: Player) -> Result<(), GameError> {
        if !self.valid_move(pos) {
            return Err(GameError::InvalidMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.mt.flip_unchecked(pos);
        self.players[player.index()].flip_unchecked(pos);
        Ok(())
    }

    /// Take back a mark previously placed with [`GameState::apply`].
    ///
    /// # Panics
    ///
    /// If `pos` is not currently owned by `player`. That means the caller's
    /// apply/revert bookkeeping is broken.
    pub fn revert(&mut self, pos: Pos, player: Player) {
        assert!(
            self.players[player.index()].is_set(pos),
            "revert of {} for {} which does not own it",
            pos,
            player.name()
        );
        self.mt.flip_unchecked(pos);
        self.players[player.index()].flip_unchecked(pos);
    }

    /// Player occupies every cell of some winning line
    #[inline]
    pub fn wins(&self, player: Player) -> bool {
        self.lines.completed_by(&self.players[player.index()]).is_some()
    }

    /// Board is full or either side has won
    #[inline]
    pub fn game_over(&self) -> bool {
        self.mt.is_empty() || self.wins(Player::Comp) || self.wins(Player::Human)
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.mt.iter_ones().collect()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.mt.count()
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.players[0].count() + self.players[1].count()
    }
}
