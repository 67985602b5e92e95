use crate::board::{Cell, Digit};
use crate::errors::{FromBytesError, FromBytesSliceError, InvalidEntry, LineParseError};
use crate::propagation::{missing::MissingSets, Layout, Outcome, PropagationSolver};

use std::fmt;

/// The main structure exposing all the functionality of the library.
///
/// A 9×9 sudoku grid, stored row-major with `0` marking empty cells.
/// Every constructor validates cell values and dimensions, so a `Sudoku`
/// in hand is always well-formed. It is not necessarily consistent:
/// nothing stops a puzzle from containing the same digit twice in a row;
/// the solver reports such grids as unsolvable rather than rejecting them
/// up front.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sudoku(pub(crate) [u8; 81]);

impl Sudoku {
    /// Creates a sudoku from a byte array. `0` marks an empty cell,
    /// `1..=9` are clues.
    ///
    /// Returns an error if any byte is greater than 9; the grid is not
    /// inspected any further than that.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().all(|&byte| byte <= 9) {
            Ok(Sudoku(bytes))
        } else {
            Err(FromBytesError(()))
        }
    }

    /// Creates a sudoku from a byte slice. Equivalent to [`Sudoku::from_bytes`]
    /// but additionally checks that the slice contains exactly 81 cells.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != 81 {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; 81];
        array.copy_from_slice(bytes);
        Sudoku::from_bytes(array).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Reads a sudoku in line format: 81 characters, row-major, digits for
    /// clues and any of `.`, `_` or `0` for empty cells. Anything after the
    /// 81st cell is ignored if separated by whitespace (a comment).
    ///
    /// ```
    /// use sudoku_singles::Sudoku;
    ///
    /// let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    /// let sudoku = Sudoku::from_str_line(line).unwrap();
    /// assert_eq!(sudoku.n_clues(), 32);
    /// ```
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; 81];
        let mut n_cells = 0;
        for ch in s.chars() {
            if n_cells == 81 {
                // a full grid may only be followed by a whitespace-delimited comment
                return match ch {
                    ' ' | '\t' | '\r' | '\n' => Ok(Sudoku(grid)),
                    _ => Err(LineParseError::TooManyCells),
                };
            }
            grid[n_cells as usize] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '_' | '0' => 0,
                _ => return Err(LineParseError::InvalidEntry(InvalidEntry { cell: n_cells, ch })),
            };
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cell contents as a byte array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the sudoku in line format, `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (b'0' + num) as char,
            })
            .collect()
    }

    /// Returns the digit in `cell`, if any.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    pub(crate) fn set(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }

    /// Returns an iterator over the cell contents, going from left to
    /// right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Returns the number of empty cells.
    pub fn n_empty_cells(&self) -> u8 {
        81 - self.n_clues()
    }

    /// Checks whether the sudoku is completely and consistently filled.
    ///
    /// This re-derives the missing digits of every row, column and box
    /// directly from the grid and checks that all 27 sets are exhausted.
    /// It does not rely on any solver bookkeeping and can be used on its
    /// own.
    pub fn is_complete(&self) -> bool {
        let missing = MissingSets::derive(self, Layout::STANDARD);
        if !missing.all_exhausted() {
            return false;
        }
        // 27 exhausted houses imply 81 filled cells
        debug_assert_eq!(self.n_empty_cells(), 0);
        true
    }

    /// Runs naked-singles propagation on this sudoku in place and reports
    /// the outcome. Convenience for [`PropagationSolver`].
    ///
    /// ```
    /// use sudoku_singles::Sudoku;
    ///
    /// let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    /// let mut sudoku = Sudoku::from_str_line(line).unwrap();
    /// assert!(sudoku.solve_singles().is_solved());
    /// assert!(sudoku.is_complete());
    /// ```
    pub fn solve_singles(&mut self) -> Outcome {
        let (solved, outcome) = PropagationSolver::new(*self).solve();
        *self = solved;
        outcome
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &num) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (0, 0) => {}
                (3, 0) | (6, 0) => f.write_str("\n\n")?, // separate bands
                (_, 0) => f.write_str("\n")?,
                (_, 3) | (_, 6) => f.write_str(" ")?, // separate stacks
                _ => {}
            }
            match num {
                0 => f.write_str("_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // line string in human readable formats, raw cell bytes otherwise
    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.0)
            }
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a line format sudoku string or 81 cell bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Sudoku, E> {
            Sudoku::from_str_line(value).map_err(E::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Sudoku, E> {
            Sudoku::from_bytes_slice(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(SudokuVisitor)
            } else {
                deserializer.deserialize_bytes(SudokuVisitor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn line_roundtrip() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        assert_eq!(sudoku.to_str_line(), LINE);
    }

    #[test]
    fn line_comment() {
        let commented = format!("{} this part is ignored", LINE);
        assert_eq!(Sudoku::from_str_line(&commented), Sudoku::from_str_line(LINE));
    }

    #[test]
    fn line_too_short() {
        assert_eq!(
            Sudoku::from_str_line(&LINE[..80]),
            Err(LineParseError::NotEnoughCells(80))
        );
    }

    #[test]
    fn line_missing_comment_delimiter() {
        let glued = format!("{}comment", LINE);
        assert_eq!(
            Sudoku::from_str_line(&glued),
            Err(LineParseError::TooManyCells)
        );
    }

    #[test]
    fn line_invalid_char() {
        let broken = LINE.replace('7', "x");
        match Sudoku::from_str_line(&broken) {
            Err(LineParseError::InvalidEntry(entry)) => {
                assert_eq!(entry.ch, 'x');
                assert_eq!((entry.row(), entry.col()), (0, 4));
            }
            other => panic!("expected invalid entry, got {:?}", other),
        }
    }

    #[test]
    fn bytes_reject_out_of_range() {
        let mut bytes = [0; 81];
        bytes[40] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());
    }

    #[test]
    fn slice_rejects_wrong_length() {
        match Sudoku::from_bytes_slice(&[0; 80]) {
            Err(FromBytesSliceError::WrongLength(80)) => {}
            other => panic!("expected length error, got {:?}", other),
        }
    }

    #[test]
    fn counters() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        assert_eq!(sudoku.n_clues(), 30);
        assert_eq!(sudoku.n_empty_cells(), 51);
    }

    #[test]
    fn display_block_layout() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        let expected = "\
53_ _7_ ___
6__ 195 ___
_98 ___ _6_

8__ _6_ __3
4__ 8_3 __1
7__ _2_ __6

_6_ ___ 28_
___ 419 __5
___ _8_ _79";
        assert_eq!(format!("{}", sudoku), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_roundtrip() {
        let sudoku = Sudoku::from_str_line(LINE).unwrap();
        let json = serde_json::to_string(&sudoku).unwrap();
        assert_eq!(json, format!("\"{}\"", LINE));
        let back: Sudoku = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sudoku);
    }
}
