use crate::bitset::DigitSet;
use crate::board::{Block, Col, Digit, Row, Sudoku};
use crate::propagation::Layout;

/// The digits not yet placed in each row, column and box.
///
/// A digit is in `rows[r]` exactly when no cell of row `r` holds it, and
/// likewise for columns and boxes. [`MissingSets::derive`] builds all
/// three families fresh from a grid; during solving they are kept up to
/// date through [`MissingSets::remove`] instead of being re-derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MissingSets {
    pub(crate) rows: [DigitSet; 9],
    pub(crate) cols: [DigitSet; 9],
    pub(crate) blocks: [DigitSet; 9],
}

impl MissingSets {
    /// Derives the missing digits of every house from the grid. Pure.
    pub(crate) fn derive(sudoku: &Sudoku, layout: Layout) -> MissingSets {
        let mut sets = MissingSets {
            rows: [DigitSet::ALL; 9],
            cols: [DigitSet::ALL; 9],
            blocks: [DigitSet::ALL; 9],
        };
        for row in Row::all() {
            for cell in row.cells() {
                if let Some(digit) = sudoku.get(cell) {
                    sets.rows[row.as_index()].remove(digit);
                }
            }
        }
        for col in Col::all() {
            for cell in col.cells() {
                if let Some(digit) = sudoku.get(cell) {
                    sets.cols[col.as_index()].remove(digit);
                }
            }
        }
        for block in Block::all() {
            for cell in layout.block_cells(block) {
                if let Some(digit) = sudoku.get(cell) {
                    sets.blocks[block.as_index()].remove(digit);
                }
            }
        }
        sets
    }

    /// Removes a just-placed digit from the three houses of its cell.
    pub(crate) fn remove(&mut self, row: Row, col: Col, block: Block, digit: Digit) {
        self.rows[row.as_index()].remove(digit);
        self.cols[col.as_index()].remove(digit);
        self.blocks[block.as_index()].remove(digit);
    }

    /// True iff every house has all nine digits placed.
    pub(crate) fn all_exhausted(&self) -> bool {
        self.rows
            .iter()
            .chain(self.cols.iter())
            .chain(self.blocks.iter())
            .all(DigitSet::is_empty)
    }
}
