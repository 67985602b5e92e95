use criterion::{criterion_group, criterion_main, Criterion};
use sudoku_singles::{PropagationSolver, Sudoku};

const CLASSIC: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const CLASSIC_SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

fn solve_classic(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(CLASSIC).unwrap();
    c.bench_function("solve_classic", |b| {
        b.iter(|| PropagationSolver::new(sudoku).solve())
    });
}

fn check_completed_grid(c: &mut Criterion) {
    let solved = Sudoku::from_str_line(CLASSIC_SOLVED).unwrap();
    c.bench_function("check_completed_grid", |b| b.iter(|| solved.is_complete()));
}

criterion_group!(benches, solve_classic, check_completed_grid);
criterion_main!(benches);
