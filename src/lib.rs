#![deny(missing_docs)]

//! A resumable solver for [exact cover](https://en.wikipedia.org/wiki/Exact_cover)
//! problems, built on [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X)
//! over the [Dancing Links](https://en.wikipedia.org/wiki/Dancing_Links) structure.
//!
//! A problem is declared as a list of named columns and a sequence of rows,
//! each row the subset of columns it covers; a solution is a set of rows
//! covering every primary column exactly once. Trailing columns can be
//! marked secondary, meaning covered at most once instead.
//!
//! Solutions are produced lazily: [`Solver`] is an [`Iterator`] whose search
//! state can be captured as a [`Checkpoint`] between solutions and fed back
//! to [`Solver::resume`] in a later run, continuing the enumeration exactly
//! where it stopped.
//!
//! ```
//! use exact_cover::{LinkedMatrix, Matrix, Problem, Solver};
//!
//! // Knuth's standard example matrix.
//! let mut problem = Problem::new(["A", "B", "C", "D", "E", "F", "G"], 0)?;
//! problem.add_row(["C", "E", "F"])?;
//! problem.add_row(["A", "D", "G"])?;
//! problem.add_row(["B", "C", "F"])?;
//! problem.add_row(["A", "D"])?;
//! problem.add_row(["B", "G"])?;
//! problem.add_row(["D", "E", "G"])?;
//!
//! let mut solver = Solver::new(LinkedMatrix::new(&problem));
//! assert_eq!(solver.all_solutions(), vec![vec![3, 0, 4]]);
//! # Ok::<(), exact_cover::Error>(())
//! ```

mod error;
mod format;
mod linked;
mod matrix;
mod problem;
mod sets;
mod solver;

pub use error::Error;
pub use format::{format_solution, solution_display, SolutionDisplay};
pub use linked::LinkedMatrix;
pub use matrix::Matrix;
pub use problem::Problem;
pub use sets::SetMatrix;
pub use solver::{Checkpoint, Solver};
