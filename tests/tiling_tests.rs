//! The n-queens puzzle as an exact cover problem, exercising secondary
//! columns: every rank and file must be used exactly once, while the
//! diagonals are constraints that may go unused but never doubled.

mod common;

use common::init_logging;
use exact_cover::{format_solution, LinkedMatrix, Matrix, Problem, Solver};

/// Build the n-queens cover problem. Row `r * n + c` places a queen on rank
/// `r`, file `c`. Ranks and files are primary; the `2 * (2n - 1)` diagonals
/// are secondary.
fn queens_problem(n: usize) -> Problem {
    let num_diagonals = 2 * n - 1;
    let columns: Vec<String> = (0..n)
        .map(|r| format!("R{r}"))
        .chain((0..n).map(|c| format!("F{c}")))
        .chain((0..num_diagonals).map(|d| format!("D{d}")))
        .chain((0..num_diagonals).map(|a| format!("A{a}")))
        .collect();
    let mut problem = Problem::new(columns, 2 * num_diagonals).unwrap();

    for r in 0..n {
        for c in 0..n {
            problem
                .add_row([
                    format!("R{r}"),
                    format!("F{c}"),
                    format!("D{}", r + c),
                    format!("A{}", r + n - 1 - c),
                ])
                .unwrap();
        }
    }

    problem
}

#[test]
fn four_queens_has_the_two_mirror_solutions() {
    init_logging();

    let problem = queens_problem(4);
    let mut solver = Solver::new(LinkedMatrix::new(&problem));

    let mut solutions: Vec<Vec<usize>> = solver
        .all_solutions()
        .into_iter()
        .map(|mut rows| {
            rows.sort_unstable();
            rows
        })
        .collect();
    solutions.sort();

    // Queens on files (1, 3, 0, 2) and the mirror (2, 0, 3, 1).
    assert_eq!(solutions, vec![vec![1, 7, 8, 14], vec![2, 4, 11, 13]]);
}

#[test]
fn six_queens_has_four_solutions() {
    init_logging();

    let problem = queens_problem(6);
    let mut solver = Solver::new(LinkedMatrix::new(&problem));
    assert_eq!(solver.all_solutions().len(), 4);
}

#[test]
fn formatted_placements_show_only_ranks_and_files() {
    init_logging();

    let problem = queens_problem(4);
    let mut solver = Solver::new(LinkedMatrix::new(&problem));
    let solution = solver.next_solution().unwrap();

    let rendered = format_solution(&problem, &solution);
    let mut lines: Vec<&str> = rendered.lines().collect();
    lines.sort_unstable();

    // Whichever of the two placements comes out first, the diagonal names
    // never appear.
    let by_file_1302 = vec!["R0 F1", "R1 F3", "R2 F0", "R3 F2"];
    let by_file_2031 = vec!["R0 F2", "R1 F0", "R2 F3", "R3 F1"];
    assert!(lines == by_file_1302 || lines == by_file_2031, "{lines:?}");
}
