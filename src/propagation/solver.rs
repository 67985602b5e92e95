use crate::bitset::Empty;
use crate::board::{Candidate, Cell, Sudoku};
use crate::propagation::{missing::MissingSets, Deductions, Layout};

/// Terminal state of a propagation run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every cell holds a digit.
    Solved,
    /// Propagation reached a fixed point with cells still empty.
    Stalled(Stall),
}

impl Outcome {
    /// Checks whether the run filled the whole grid.
    pub fn is_solved(self) -> bool {
        self == Outcome::Solved
    }
}

/// Why a run stopped short of a full grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stall {
    /// A full scan placed nothing. The puzzle needs techniques beyond
    /// naked singles; `empty_cells` of them remain open.
    NoProgress {
        /// Number of cells still empty
        empty_cells: u8,
    },
    /// `cell` is empty but its row, column and box already contain all
    /// nine digits between them. The givens contradict each other.
    NoCandidates {
        /// The overconstrained cell
        cell: Cell,
    },
}

/// Fills a sudoku by naked-singles propagation.
///
/// The solver owns the grid for the duration of a run, together with the
/// digits still missing from every row, column and box and a count of the
/// empty cells. Whenever the intersection of a cell's three houses leaves
/// exactly one digit, that digit is committed to the grid and removed
/// from the three sets in the same step, so the narrowed sets are already
/// visible to the cells scanned afterwards in the same pass.
///
/// Passes repeat until the grid is full or a pass commits nothing. Each
/// productive pass fills at least one cell, so a run over a grid with `E`
/// empty cells executes at most `E + 1` passes.
///
/// ```
/// use sudoku_singles::{PropagationSolver, Sudoku};
///
/// let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
/// let sudoku = Sudoku::from_str_line(line).unwrap();
///
/// let (solution, outcome, deductions) =
///     PropagationSolver::new(sudoku).solve_with_deductions();
/// assert!(outcome.is_solved());
/// assert_eq!(deductions.len(), 51);
/// assert!(solution.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct PropagationSolver {
    grid: Sudoku,
    layout: Layout,
    missing: MissingSets,
    n_empty: u8,
    deduced: Vec<Candidate>,
    n_passes: u32,
}

impl PropagationSolver {
    /// Constructs a solver for the standard 9×9 layout.
    pub fn new(sudoku: Sudoku) -> PropagationSolver {
        Self::with_layout(Layout::STANDARD, sudoku)
    }

    /// Constructs a solver for an explicit, pre-validated [`Layout`].
    pub fn with_layout(layout: Layout, sudoku: Sudoku) -> PropagationSolver {
        PropagationSolver {
            missing: MissingSets::derive(&sudoku, layout),
            n_empty: sudoku.n_empty_cells(),
            grid: sudoku,
            layout,
            deduced: Vec::new(),
            n_passes: 0,
        }
    }

    /// Runs propagation to its fixed point and returns the grid together
    /// with the outcome. The grid is returned in both cases; on a stall it
    /// contains everything that could be deduced.
    pub fn solve(self) -> (Sudoku, Outcome) {
        let (sudoku, outcome, _) = self.solve_with_deductions();
        (sudoku, outcome)
    }

    /// Like [`PropagationSolver::solve`], additionally returning the log
    /// of resolved cells and the pass count.
    pub fn solve_with_deductions(mut self) -> (Sudoku, Outcome, Deductions) {
        let outcome = self.run();
        let deductions = Deductions {
            entries: self.deduced,
            passes: self.n_passes,
        };
        (self.grid, outcome, deductions)
    }

    fn run(&mut self) -> Outcome {
        while self.n_empty > 0 {
            self.n_passes += 1;
            match self.pass() {
                Ok(0) => {
                    return Outcome::Stalled(Stall::NoProgress {
                        empty_cells: self.n_empty,
                    });
                }
                Ok(_) => {}
                Err(cell) => return Outcome::Stalled(Stall::NoCandidates { cell }),
            }
        }
        // cross-check the incrementally maintained sets and the counter
        // against a fresh derivation before declaring victory
        let fresh = MissingSets::derive(&self.grid, self.layout);
        assert!(
            fresh.all_exhausted(),
            "house bookkeeping diverged from the grid"
        );
        Outcome::Solved
    }

    /// One full row-major scan over the grid. Returns the number of cells
    /// placed, or the first empty cell found with no candidates left.
    fn pass(&mut self) -> Result<u8, Cell> {
        let mut n_placed = 0;
        for cell in Cell::all() {
            if self.grid.get(cell).is_some() {
                continue;
            }
            let block = self.layout.block_of(cell);
            let candidates = self.missing.rows[cell.row().as_index()]
                & self.missing.cols[cell.col().as_index()]
                & self.missing.blocks[block.as_index()];
            match candidates.unique() {
                Ok(Some(digit)) => {
                    self.place(Candidate { cell, digit });
                    n_placed += 1;
                    if self.n_empty == 0 {
                        break;
                    }
                }
                Ok(None) => {}
                Err(Empty) => return Err(cell),
            }
        }
        Ok(n_placed)
    }

    /// Commits a resolution: grid, house sets, counter and log are updated
    /// together. Cells are write-once; a placed digit is never revisited.
    fn place(&mut self, candidate: Candidate) {
        debug_assert!(self.grid.get(candidate.cell).is_none());
        self.grid.set(candidate.cell, candidate.digit);
        let block = self.layout.block_of(candidate.cell);
        self.missing
            .remove(candidate.row(), candidate.col(), block, candidate.digit);
        self.n_empty -= 1;
        self.deduced.push(candidate);
    }
}
