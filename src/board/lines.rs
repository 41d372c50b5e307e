//! Precomputed winning lines
//!
//! Every run of `run_length` cells in a row, a column, or either diagonal is
//! stored once as a bitboard. The catalogue never changes after it is built.

use super::{BitBoard, Pos};

/// Direction vectors in enumeration order
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Catalogue of all winning lines for one board size and run length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLines {
    lines: Vec<BitBoard>,
    size: u8,
    run_length: u8,
}

impl WinningLines {
    /// Build the catalogue. Callers validate `(size, run_length)` first;
    /// a run longer than the board yields an empty catalogue.
    pub fn new(size: u8, run_length: u8) -> Self {
        let mut lines = Vec::with_capacity(Self::expected_len(size, run_length));

        for &(dr, dc) in &DIRECTIONS {
            for (r, c) in Self::starts(size, run_length, dr, dc) {
                let mut line = BitBoard::new(size);
                for i in 0..run_length as i8 {
                    let pos = Pos::new((r + dr * i) as u8, (c + dc * i) as u8);
                    line.flip_unchecked(pos);
                }
                lines.push(line);
            }
        }

        debug_assert_eq!(lines.len(), Self::expected_len(size, run_length));
        Self {
            lines,
            size,
            run_length,
        }
    }

    /// Start cells of every run in one direction.
    /// Horizontal runs go row by row; vertical runs go column by column.
    fn starts(size: u8, run_length: u8, dr: i8, dc: i8) -> Vec<(i8, i8)> {
        let n = size as i8;
        let k = run_length as i8;
        let mut starts = Vec::new();
        match (dr, dc) {
            (1, 0) => {
                for c in 0..n {
                    for r in 0..n {
                        if r + k <= n {
                            starts.push((r, c));
                        }
                    }
                }
            }
            _ => {
                for r in 0..n {
                    for c in 0..n {
                        let end_r = r + dr * (k - 1);
                        let end_c = c + dc * (k - 1);
                        if end_r < n && end_c >= 0 && end_c < n {
                            starts.push((r, c));
                        }
                    }
                }
            }
        }
        starts
    }

    /// `2·N·(N-K+1) + 2·(N-K+1)²`
    pub fn expected_len(size: u8, run_length: u8) -> usize {
        if run_length > size {
            return 0;
        }
        let n = size as usize;
        let free = (size - run_length) as usize + 1;
        2 * n * free + 2 * free * free
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn run_length(&self) -> u8 {
        self.run_length
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BitBoard> {
        self.lines.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[BitBoard] {
        &self.lines
    }

    /// Terminal win magnitude: the catalogue size squared.
    /// Any heuristic total stays below `len * run_length`, which is smaller.
    #[inline]
    pub fn win_score(&self) -> i32 {
        let len = self.lines.len() as i32;
        len * len
    }

    /// First line fully covered by `stones`
    pub fn completed_by(&self, stones: &BitBoard) -> Option<&BitBoard> {
        self.lines.iter().find(|line| stones.contains(line))
    }
}

impl<'a> IntoIterator for &'a WinningLines {
    type Item = &'a BitBoard;
    type IntoIter = std::slice::Iter<'a, BitBoard>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_size_all_configs() {
        for size in 3..=9u8 {
            for run_length in 3..=size.min(5) {
                let lines = WinningLines::new(size, run_length);
                let free = (size - run_length + 1) as usize;
                let n = size as usize;
                assert_eq!(
                    lines.len(),
                    2 * n * free + 2 * free * free,
                    "size {} run {}",
                    size,
                    run_length
                );
            }
        }
    }

    #[test]
    fn test_every_line_has_run_length_bits() {
        for size in 3..=9u8 {
            for run_length in 3..=size.min(5) {
                let lines = WinningLines::new(size, run_length);
                for line in &lines {
                    assert_eq!(line.count(), run_length as u32);
                }
            }
        }
    }

    #[test]
    fn test_no_duplicates() {
        for size in 3..=9u8 {
            for run_length in 3..=size.min(5) {
                let lines = WinningLines::new(size, run_length);
                let unique: HashSet<BitBoard> = lines.iter().copied().collect();
                assert_eq!(unique.len(), lines.len());
            }
        }
    }

    #[test]
    fn test_3x3_lines_in_order() {
        let lines = WinningLines::new(3, 3);
        assert_eq!(lines.len(), 8);
        let cells: Vec<Vec<Pos>> = lines.iter().map(|l| l.iter_ones().collect()).collect();

        // Rows
        assert_eq!(cells[0], vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(cells[2], vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)]);
        // Columns
        assert_eq!(cells[3], vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(cells[5], vec![Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)]);
        // Down-right diagonal
        assert_eq!(cells[6], vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);
        // Down-left diagonal
        assert_eq!(cells[7], vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]);
    }

    #[test]
    fn test_diagonal_lines_are_diagonal() {
        let lines = WinningLines::new(6, 4);
        let free = 3usize;
        let diagonal_start = 2 * 6 * free;
        for line in &lines.as_slice()[diagonal_start..] {
            let cells: Vec<Pos> = line.iter_ones().collect();
            for pair in cells.windows(2) {
                assert_eq!(pair[1].row, pair[0].row + 1);
                assert_eq!((pair[1].col as i8 - pair[0].col as i8).abs(), 1);
            }
        }
    }

    #[test]
    fn test_win_score() {
        let lines = WinningLines::new(3, 3);
        assert_eq!(lines.win_score(), 64);
        let lines = WinningLines::new(9, 5);
        assert_eq!(lines.len(), 140);
        assert_eq!(lines.win_score(), 19_600);
    }

    #[test]
    fn test_completed_by() {
        let lines = WinningLines::new(4, 3);
        let mut stones = BitBoard::new(4);
        stones.set(Pos::new(1, 3)).unwrap();
        stones.set(Pos::new(2, 2)).unwrap();
        assert!(lines.completed_by(&stones).is_none());
        stones.set(Pos::new(3, 1)).unwrap();
        let line = lines.completed_by(&stones).unwrap();
        assert_eq!(
            line.iter_ones().collect::<Vec<_>>(),
            vec![Pos::new(1, 3), Pos::new(2, 2), Pos::new(3, 1)]
        );
    }

    #[test]
    fn test_expected_len_too_long_run() {
        assert_eq!(WinningLines::expected_len(3, 4), 0);
        assert!(WinningLines::new(3, 4).is_empty());
    }
}
