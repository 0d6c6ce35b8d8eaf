//! Rendering of solutions back into column-name form.

use crate::problem::Problem;
use core::fmt;

/// A [`Display`](fmt::Display) adaptor rendering one solution of `problem`.
///
/// Each selected row becomes one line listing the names of the primary
/// columns it covers, space separated, in the row's canonical column order.
/// Secondary columns are bookkeeping constraints rather than items to be
/// covered, so their names are left out; a row whose primary entries are
/// exhausted still produces its (empty) line.
#[derive(Debug, Clone, Copy)]
pub struct SolutionDisplay<'a> {
    problem: &'a Problem,
    rows: &'a [usize],
}

impl fmt::Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &row in self.rows {
            let mut first = true;
            for &column in self.problem.row_columns(row) {
                if self.problem.is_secondary(column) {
                    continue;
                }
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(self.problem.column_name(column))?;
                first = false;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Wrap a solution for display against its problem definition.
///
/// `rows` is a row-identifier slice as yielded by
/// [`Solver`](crate::Solver); rows are rendered in the given order.
pub fn solution_display<'a>(problem: &'a Problem, rows: &'a [usize]) -> SolutionDisplay<'a> {
    SolutionDisplay { problem, rows }
}

/// Render a solution to a `String`, one line per selected row.
pub fn format_solution(problem: &Problem, rows: &[usize]) -> String {
    solution_display(problem, rows).to_string()
}
