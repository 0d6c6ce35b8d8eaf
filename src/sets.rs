//! Dictionary-of-sets formulation of the cover matrix.
//!
//! Each column tracks the set of rows currently covering it; covering a
//! column removes its rows from every other column's set. No link surgery is
//! involved, which makes this representation much easier to audit than
//! [`LinkedMatrix`](crate::LinkedMatrix) — it serves as the oracle the
//! linked structure is tested against.

use crate::{matrix::Matrix, problem::Problem};
use rustc_hash::FxHashSet;

/// The dictionary-of-sets representation of a [`Problem`].
#[derive(Debug, Clone)]
pub struct SetMatrix {
    /// Column memberships per row, in canonical order.
    rows: Vec<Vec<usize>>,
    /// Live rows per column.
    columns: Vec<FxHashSet<usize>>,
    /// Whether each column is currently uncovered.
    active: Vec<bool>,
    num_primary: usize,
}

impl SetMatrix {
    /// The live rows of a column, sorted into row-chain order.
    ///
    /// A covered column's own set is never mutated while it stays covered:
    /// any row covering it has already been deleted from every other
    /// column's set, so no nested cover can reach it. That is what lets
    /// `uncover` recompute the exact member list `cover` walked.
    fn members(&self, column: usize) -> Vec<usize> {
        let mut rows: Vec<usize> = self.columns[column].iter().copied().collect();
        rows.sort_unstable();
        rows
    }
}

impl Matrix for SetMatrix {
    fn new(problem: &Problem) -> Self {
        let mut columns = vec![FxHashSet::default(); problem.num_columns()];
        for (row, cols) in problem.rows().iter().enumerate() {
            for &column in cols {
                columns[column].insert(row);
            }
        }
        Self {
            rows: problem.rows().to_vec(),
            columns,
            active: vec![true; problem.num_columns()],
            num_primary: problem.num_primary(),
        }
    }

    fn choose_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for column in 0..self.num_primary {
            if !self.active[column] {
                continue;
            }
            match best {
                Some(b) if self.columns[column].len() >= self.columns[b].len() => {}
                _ => best = Some(column),
            }
        }
        best
    }

    fn live_columns(&self) -> Vec<usize> {
        (0..self.num_primary)
            .filter(|&column| self.active[column])
            .collect()
    }

    fn column_size(&self, column: usize) -> usize {
        self.columns[column].len()
    }

    fn live_rows(&self, column: usize) -> Vec<usize> {
        self.members(column)
    }

    fn cover(&mut self, column: usize) {
        debug_assert!(self.active[column], "column covered twice");
        self.active[column] = false;
        for row in self.members(column) {
            for &other in &self.rows[row] {
                if other != column {
                    self.columns[other].remove(&row);
                }
            }
        }
    }

    fn uncover(&mut self, column: usize) {
        debug_assert!(!self.active[column], "column was not covered");
        for row in self.members(column) {
            for &other in &self.rows[row] {
                if other != column {
                    self.columns[other].insert(row);
                }
            }
        }
        self.active[column] = true;
    }

    fn cover_siblings(&mut self, row: usize, except: usize) {
        let columns = self.rows[row].clone();
        for column in columns {
            if column != except {
                self.cover(column);
            }
        }
    }

    fn uncover_siblings(&mut self, row: usize, except: usize) {
        let columns = self.rows[row].clone();
        for column in columns.into_iter().rev() {
            if column != except {
                self.uncover(column);
            }
        }
    }
}
