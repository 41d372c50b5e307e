//! Packed per-row bitboard
//!
//! Each row is an `N`-bit mask stored in a `u16`; column `c` lives at bit
//! `N - 1 - c`, so column 0 is the most significant used bit. Unused rows and
//! bits above `N` are always zero, which lets boards be compared with `==`.

use std::ops::{BitAnd, BitOr, BitXor};

use super::{Pos, MAX_SIZE};
use crate::error::BoardError;

/// Bitboard for an N x N board, one `u16` per row
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard {
    rows: [u16; MAX_SIZE as usize],
    size: u8,
}

impl BitBoard {
    /// Create empty bitboard
    pub fn new(size: u8) -> Self {
        debug_assert!(size <= MAX_SIZE);
        Self {
            rows: [0; MAX_SIZE as usize],
            size,
        }
    }

    /// Create a bitboard with every cell set
    pub fn full(size: u8) -> Self {
        let mut board = Self::new(size);
        let row_mask = Self::row_mask(size);
        for row in board.rows.iter_mut().take(size as usize) {
            *row = row_mask;
        }
        board
    }

    #[inline]
    fn row_mask(size: u8) -> u16 {
        ((1u32 << size) - 1) as u16
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Raw mask of one row
    #[inline]
    pub fn row(&self, row: u8) -> u16 {
        self.rows[row as usize]
    }

    #[inline]
    fn bit(&self, col: u8) -> u16 {
        1u16 << (self.size - 1 - col)
    }

    #[inline]
    fn check(&self, pos: Pos) -> Result<(), BoardError> {
        if pos.is_within(self.size) {
            Ok(())
        } else {
            Err(BoardError::OutOfRange {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Set a bit at position
    pub fn set(&mut self, pos: Pos) -> Result<(), BoardError> {
        self.check(pos)?;
        self.rows[pos.row as usize] |= self.bit(pos.col);
        Ok(())
    }

    /// Clear a bit at position
    pub fn clear(&mut self, pos: Pos) -> Result<(), BoardError> {
        self.check(pos)?;
        self.rows[pos.row as usize] &= !self.bit(pos.col);
        Ok(())
    }

    /// Toggle a bit at position
    pub fn flip(&mut self, pos: Pos) -> Result<(), BoardError> {
        self.check(pos)?;
        self.flip_unchecked(pos);
        Ok(())
    }

    /// Toggle a bit the caller has already range-checked.
    #[inline]
    pub(crate) fn flip_unchecked(&mut self, pos: Pos) {
        debug_assert!(pos.is_within(self.size));
        self.rows[pos.row as usize] ^= self.bit(pos.col);
    }

    /// Copy of this board with the bit at position set
    pub fn with(&self, pos: Pos) -> Result<Self, BoardError> {
        let mut board = *self;
        board.set(pos)?;
        Ok(board)
    }

    /// Check if bit is set at position
    pub fn get(&self, pos: Pos) -> Result<bool, BoardError> {
        self.check(pos)?;
        Ok(self.is_set(pos))
    }

    /// Unchecked read; positions outside the board read as unset.
    #[inline]
    pub fn is_set(&self, pos: Pos) -> bool {
        pos.is_within(self.size) && self.rows[pos.row as usize] & self.bit(pos.col) != 0
    }

    /// Row-wise OR
    #[inline]
    pub fn or(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a | b)
    }

    /// Row-wise AND
    #[inline]
    pub fn and(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a & b)
    }

    /// Row-wise XOR
    #[inline]
    pub fn xor(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a ^ b)
    }

    #[inline]
    fn zip(&self, other: &Self, op: impl Fn(u16, u16) -> u16) -> Self {
        debug_assert_eq!(self.size, other.size);
        let mut rows = [0u16; MAX_SIZE as usize];
        for (i, row) in rows.iter_mut().enumerate() {
            *row = op(self.rows[i], other.rows[i]);
        }
        Self {
            rows,
            size: self.size,
        }
    }

    /// True when every bit of `other` is also set here
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(&a, &b)| a & b == b)
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitBoardIter {
        BitBoardIter {
            board: *self,
            row: 0,
            current_row: self.rows[0],
        }
    }
}

/// Iterator over set bits in a BitBoard
pub struct BitBoardIter {
    board: BitBoard,
    row: u8,
    current_row: u16,
}

impl Iterator for BitBoardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_row == 0 {
            self.row += 1;
            if self.row >= self.board.size {
                return None;
            }
            self.current_row = self.board.rows[self.row as usize];
        }

        // Highest set bit is the lowest column
        let bit = 15 - self.current_row.leading_zeros() as u8;
        self.current_row &= !(1u16 << bit);
        let col = self.board.size - 1 - bit;
        Some(Pos::new(self.row, col))
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(&rhs)
    }
}

impl BitAnd for BitBoard {
    type Output = BitBoard;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(&rhs)
    }
}

impl BitXor for BitBoard {
    type Output = BitBoard;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(&rhs)
    }
}

impl std::fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = (0..self.size)
            .map(|r| format!("{:0width$b}", self.rows[r as usize], width = self.size as usize))
            .collect();
        f.debug_struct("BitBoard").field("rows", &rows).finish()
    }
}
