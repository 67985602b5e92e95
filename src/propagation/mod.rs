//! The naked-singles propagation engine.
//!
//! This module contains the [`PropagationSolver`], which drives a grid to a
//! fixed point of the simplest sudoku technique: a cell whose row, column
//! and box together leave exactly one legal digit gets that digit. Solving
//! a cell immediately narrows its three houses, which can unlock further
//! cells later in the same scan; the solver keeps scanning until the grid
//! is full or a whole scan places nothing.
//!
//! Puzzles that need pairs, hidden singles or guessing are out of scope by
//! design; on those the solver terminates with [`Outcome::Stalled`] and
//! reports how many cells remain.

mod deduction;
mod layout;
pub(crate) mod missing;
mod solver;

pub use self::deduction::Deductions;
pub use self::layout::Layout;
pub use self::solver::{Outcome, PropagationSolver, Stall};
