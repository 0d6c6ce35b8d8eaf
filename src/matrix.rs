//! The seam between the search engine and the matrix representations.

use crate::problem::Problem;

/// A reversible sparse 0/1 matrix over the columns and rows of a
/// [`Problem`], which can be permuted to solve exact cover problems using
/// Algorithm X.
///
/// Two implementations exist: [`LinkedMatrix`], the four-way linked
/// structure behind the dancing links technique, and [`SetMatrix`], an
/// equivalent dictionary-of-sets formulation that is easier to audit. Both
/// must enumerate identical candidates in identical order so that the solver
/// produces the same solutions regardless of representation.
///
/// Implementations must keep [`cover`]/[`uncover`] exact inverses under the
/// strict LIFO nesting the solver performs: after `cover(c1)`, `cover(c2)`,
/// `uncover(c2)`, `uncover(c1)` the structure is indistinguishable from its
/// state before `cover(c1)`.
///
/// [`LinkedMatrix`]: crate::LinkedMatrix
/// [`SetMatrix`]: crate::SetMatrix
/// [`cover`]: Matrix::cover
/// [`uncover`]: Matrix::uncover
pub trait Matrix {
    /// Build the representation from a validated problem.
    fn new(problem: &Problem) -> Self
    where
        Self: Sized;

    /// Select the active primary column with the fewest live rows, breaking
    /// ties towards the earliest-declared column. Returns `None` when no
    /// primary column remains active (the terminal/success state).
    fn choose_column(&self) -> Option<usize>;

    /// The active primary columns, in declaration order.
    fn live_columns(&self) -> Vec<usize>;

    /// The number of live rows in the given column.
    ///
    /// This count is maintained incrementally by cover/uncover, never
    /// recomputed by scanning.
    fn column_size(&self, column: usize) -> usize;

    /// The live rows of the given column, in row-chain order.
    fn live_rows(&self, column: usize) -> Vec<usize>;

    /// Remove the column from the active set and delete every row that
    /// covers it from all other columns.
    fn cover(&mut self, column: usize);

    /// Exact inverse of [`cover`](Matrix::cover). Must only be called for
    /// the most recently covered column that has not yet been uncovered.
    fn uncover(&mut self, column: usize);

    /// Cover every column the given row covers other than `except`, in the
    /// row's canonical column order.
    fn cover_siblings(&mut self, row: usize, except: usize);

    /// Exact inverse of [`cover_siblings`](Matrix::cover_siblings):
    /// uncovers the same columns in reverse order.
    fn uncover_siblings(&mut self, row: usize, except: usize);
}
