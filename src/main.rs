use std::io::{self, BufRead};

use sudoku_singles::{Outcome, PropagationSolver, Stall, Sudoku};

// Reads line format sudokus from stdin and prints what naked-singles
// propagation makes of each one.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let sudoku = match Sudoku::from_str_line(&line) {
            Ok(sudoku) => sudoku,
            Err(err) => {
                eprintln!("skipping invalid sudoku: {}", err);
                continue;
            }
        };

        let (solution, outcome, deductions) =
            PropagationSolver::new(sudoku).solve_with_deductions();
        println!("{}\n", solution);
        match outcome {
            Outcome::Solved => {
                println!("solved: {} cells in {} passes\n", deductions.len(), deductions.passes());
            }
            Outcome::Stalled(Stall::NoProgress { empty_cells }) => {
                println!("stalled with {} empty cells; needs more than naked singles\n", empty_cells);
            }
            Outcome::Stalled(Stall::NoCandidates { cell }) => {
                println!(
                    "no legal digit for r{}c{}; the givens contradict each other\n",
                    cell.row().get() + 1,
                    cell.col().get() + 1,
                );
            }
        }
    }
    Ok(())
}
