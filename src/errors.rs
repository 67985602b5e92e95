//! Errors returned when constructing grids or solver configurations.
#[cfg(doc)]
use crate::{Layout, Sudoku};

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// An invalid cell encountered while parsing a line format sudoku.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} contains invalid character '{ch}'")]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first line, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        self.cell / 9
    }

    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        self.cell % 9
    }
}

/// Error for [`Sudoku::from_str_line`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error(transparent)]
    InvalidEntry(InvalidEntry),
    /// Input ends before 81 cells are read. Contains the number of cells supplied.
    #[error("line contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cell characters are supplied, or a trailing comment
    /// is not separated from the grid by whitespace
    #[error("line contains more than 81 cells or is missing a comment delimiter")]
    TooManyCells,
}

/// Error for [`Layout::new`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LayoutError {
    /// The grid side length must be the square of the box edge length
    #[error("grid size {grid_size} is not the square of box size {box_size}")]
    NotBoxSquare {
        /// Requested box edge length
        box_size: u8,
        /// Requested grid side length
        grid_size: u8,
    },
    /// The board representation is fixed at 9×9 cells
    #[error("grid size {0} does not match the 9×9 board representation")]
    UnsupportedGridSize(u8),
}
