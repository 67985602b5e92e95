use crate::board::{Block, Cell};
use crate::errors::LayoutError;

/// The geometry a solver is constructed with: box edge length and grid
/// side length.
///
/// Both values are validated once, at construction: the side must be the
/// square of the box edge, and must match the 9×9 board representation.
/// All box arithmetic in the engine goes through this type rather than
/// scattered constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    box_size: u8,
    grid_size: u8,
}

impl Layout {
    /// The standard layout: a 9×9 grid of 3×3 boxes.
    pub const STANDARD: Layout = Layout {
        box_size: 3,
        grid_size: 9,
    };

    /// Validates and constructs a layout.
    ///
    /// ```
    /// use sudoku_singles::Layout;
    ///
    /// assert_eq!(Layout::new(3, 9), Ok(Layout::STANDARD));
    /// assert!(Layout::new(3, 8).is_err());
    /// assert!(Layout::new(4, 16).is_err()); // square, but not 9×9
    /// ```
    pub fn new(box_size: u8, grid_size: u8) -> Result<Layout, LayoutError> {
        if box_size.checked_mul(box_size) != Some(grid_size) {
            return Err(LayoutError::NotBoxSquare {
                box_size,
                grid_size,
            });
        }
        if grid_size != Self::STANDARD.grid_size {
            return Err(LayoutError::UnsupportedGridSize(grid_size));
        }
        Ok(Layout {
            box_size,
            grid_size,
        })
    }

    /// Returns the box edge length.
    pub fn box_size(self) -> u8 {
        self.box_size
    }

    /// Returns the grid side length.
    pub fn grid_size(self) -> u8 {
        self.grid_size
    }

    /// Returns the box containing `cell`: bands of `box_size` rows crossed
    /// with stacks of `box_size` columns, counted row-major.
    #[inline]
    pub(crate) fn block_of(self, cell: Cell) -> Block {
        let band = cell.row().get() / self.box_size;
        let stack = cell.col().get() / self.box_size;
        Block::new(band * self.box_size + stack)
    }

    /// Returns an iterator over the cells of `block`, row-major from its
    /// top-left cell.
    pub(crate) fn block_cells(self, block: Block) -> impl Iterator<Item = Cell> {
        let box_size = self.box_size;
        let grid_size = self.grid_size;
        let first_row = block.get() / box_size * box_size;
        let first_col = block.get() % box_size * box_size;
        (0..box_size).flat_map(move |row_offset| {
            (0..box_size).map(move |col_offset| {
                Cell::new((first_row + row_offset) * grid_size + first_col + col_offset)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square() {
        assert_eq!(
            Layout::new(3, 10),
            Err(LayoutError::NotBoxSquare {
                box_size: 3,
                grid_size: 10
            })
        );
    }

    #[test]
    fn rejects_unrepresentable_sizes() {
        assert_eq!(Layout::new(2, 4), Err(LayoutError::UnsupportedGridSize(4)));
        assert_eq!(
            Layout::new(4, 16),
            Err(LayoutError::UnsupportedGridSize(16))
        );
    }

    #[test]
    fn block_of_matches_block_cells() {
        let layout = Layout::STANDARD;
        for block in Block::all() {
            for cell in layout.block_cells(block) {
                assert_eq!(layout.block_of(cell), block);
            }
        }
    }

    #[test]
    fn block_cells_cover_grid() {
        let layout = Layout::STANDARD;
        let mut seen = [false; 81];
        for block in Block::all() {
            for cell in layout.block_cells(block) {
                assert!(!seen[cell.as_index()]);
                seen[cell.as_index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn top_left_corners() {
        let layout = Layout::STANDARD;
        let corners: Vec<u8> = Block::all()
            .map(|block| layout.block_cells(block).next().unwrap().get())
            .collect();
        assert_eq!(corners, [0, 3, 6, 27, 30, 33, 54, 57, 60]);
    }
}
