//! Types for cells, digits and other things on a sudoku board
mod candidate;
mod digit;
mod positions;
mod sudoku;

pub use self::{
    candidate::Candidate,
    digit::Digit,
    positions::{Block, Cell, Col, Row},
    sudoku::Sudoku,
};
