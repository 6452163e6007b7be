use std::fmt;
use std::str::FromStr;

use crate::error::{ChessError, Result};

/// A square on the board.
///
/// `row` is the rank counted from White's side (row 0 = rank 1) and `col` is
/// the file (col 0 = file a). Both are always in `0..8`; the only ways to
/// build a `Square` go through bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self { row: row as u8, col: col as u8 })
        } else {
            Err(ChessError::InvalidPosition { row, col })
        }
    }

    /// Internal constructor for coordinates already known to be on the board
    pub(crate) fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Square shifted by `(dr, dc)`, or `None` if that walks off the board
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::new(self.row as i32 + dr, self.col as i32 + dc).ok()
    }

    /// 0..64 index, a1 = 0, h8 = 63
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Inverse of [`Square::index`]; anything past 63 is `InvalidPosition`
    pub fn from_index(idx: usize) -> Result<Self> {
        if idx >= 64 {
            return Err(ChessError::InvalidPosition {
                row: (idx / 8).min(i32::MAX as usize) as i32,
                col: (idx % 8) as i32,
            });
        }
        Ok(Self::at((idx / 8) as u8, (idx % 8) as u8))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Self::at(i / 8, i % 8))
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.row) as char
    }

    /// Parse file-rank notation such as `e4`
    pub fn from_algebraic(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        let col = bytes[0].wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if col >= 8 || row >= 8 {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        Ok(Self::at(row, col))
    }

    /// Chebyshev distance to the nearest of the four centre squares
    pub fn center_distance(self) -> u8 {
        let dr = if self.row < 4 { 3 - self.row } else { self.row - 4 };
        let dc = if self.col < 4 { 3 - self.col } else { self.col - 4 };
        dr.max(dc)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_algebraic(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            Square::new(8, 0),
            Err(ChessError::InvalidPosition { row: 8, col: 0 })
        );
        assert!(Square::new(0, -1).is_err());
        assert!(Square::new(7, 7).is_ok());
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Square::from_index(0).unwrap(), Square::new(0, 0).unwrap());
        assert_eq!(Square::from_index(63).unwrap().to_string(), "h8");
        assert_eq!(
            Square::from_index(64),
            Err(ChessError::InvalidPosition { row: 8, col: 0 })
        );
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.index()), Ok(sq));
        }
    }

    #[test]
    fn test_algebraic_round_trip() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(Square::from_algebraic(&text).unwrap(), sq);
        }
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!((e4.row(), e4.col()), (3, 4));
    }

    #[test]
    fn test_bad_algebraic() {
        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("e").is_err());
    }

    #[test]
    fn test_center_distance() {
        assert_eq!(Square::from_algebraic("d4").unwrap().center_distance(), 0);
        assert_eq!(Square::from_algebraic("e5").unwrap().center_distance(), 0);
        assert_eq!(Square::from_algebraic("a1").unwrap().center_distance(), 3);
        assert_eq!(Square::from_algebraic("c6").unwrap().center_distance(), 1);
    }
}
