use exact_cover::Problem;

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Knuth's standard 7-column example. Its unique solution is rows
/// {0, 3, 4} = {(C,E,F), (A,D), (B,G)}.
#[allow(dead_code)]
pub fn knuth_example() -> Problem {
    let mut problem = Problem::new(["A", "B", "C", "D", "E", "F", "G"], 0).unwrap();
    problem.add_row(["C", "E", "F"]).unwrap();
    problem.add_row(["A", "D", "G"]).unwrap();
    problem.add_row(["B", "C", "F"]).unwrap();
    problem.add_row(["A", "D"]).unwrap();
    problem.add_row(["B", "G"]).unwrap();
    problem.add_row(["D", "E", "G"]).unwrap();
    problem
}

/// Two columns, five rows, five solutions; small enough to enumerate by
/// hand but branchy enough to exercise backtracking and resumption.
#[allow(dead_code)]
pub fn five_solutions() -> Problem {
    let mut problem = Problem::new(["A", "B"], 0).unwrap();
    problem.add_row(["A"]).unwrap();
    problem.add_row(["B"]).unwrap();
    problem.add_row(["A", "B"]).unwrap();
    problem.add_row(["A"]).unwrap();
    problem.add_row(["B"]).unwrap();
    problem
}
