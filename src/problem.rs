//! Representation-independent problem definition.
//!
//! A [`Problem`] is the validated input to both matrix representations: an
//! ordered list of named columns, a count of trailing secondary columns, and
//! a sequence of rows given as subsets of the column names. All malformed
//! input is rejected here, before any search begins.

use crate::error::Error;
use rustc_hash::FxHashMap;

/// A validated exact cover problem.
///
/// Columns are identified by their position in the declaration order; the
/// last [`num_secondary`] of them are secondary (covered at most once by a
/// solution), the rest primary (covered exactly once). Rows are identified by
/// the order they were added, and their column memberships are canonicalized
/// to ascending column index so that row chains, solution formatting, and
/// checkpoint replay are deterministic regardless of the order the caller
/// listed a row's columns.
///
/// [`num_secondary`]: Problem::num_secondary
#[derive(Debug, Clone)]
pub struct Problem {
    names: Vec<String>,
    num_secondary: usize,
    index: FxHashMap<String, usize>,
    rows: Vec<Vec<usize>>,
}

impl Problem {
    /// Create a problem over the given ordered column names, the last
    /// `num_secondary` of which are secondary.
    ///
    /// # Errors
    ///
    /// Fails if the column list is empty, if `num_secondary` exceeds the
    /// number of columns, or if any name appears twice.
    pub fn new<I, S>(columns: I, num_secondary: usize) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = columns.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(Error::NoColumns);
        }
        if num_secondary > names.len() {
            return Err(Error::TooManySecondary {
                num_secondary,
                num_columns: names.len(),
            });
        }

        let mut index = FxHashMap::default();
        for (ix, name) in names.iter().enumerate() {
            if index.insert(name.clone(), ix).is_some() {
                return Err(Error::DuplicateColumn { name: name.clone() });
            }
        }

        Ok(Self {
            names,
            num_secondary,
            index,
            rows: Vec::new(),
        })
    }

    /// Add a candidate row, given as the set of column names it covers, and
    /// return its row identifier.
    ///
    /// The membership is stored in ascending column index order; the order
    /// the caller lists the names carries no meaning.
    ///
    /// # Errors
    ///
    /// Fails if the row names an undeclared column, names the same column
    /// twice, or covers no columns.
    pub fn add_row<I, S>(&mut self, columns: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row = self.rows.len();

        let mut cols = Vec::new();
        for name in columns {
            let name = name.as_ref();
            let ix = *self.index.get(name).ok_or_else(|| Error::UnknownColumn {
                row,
                name: name.to_owned(),
            })?;
            cols.push(ix);
        }

        if cols.is_empty() {
            return Err(Error::EmptyRow { row });
        }

        cols.sort_unstable();
        if let Some(pair) = cols.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(Error::DuplicateEntry {
                row,
                name: self.names[pair[0]].clone(),
            });
        }

        self.rows.push(cols);
        Ok(row)
    }

    /// The total number of columns.
    pub fn num_columns(&self) -> usize {
        self.names.len()
    }

    /// The number of primary columns.
    pub fn num_primary(&self) -> usize {
        self.names.len() - self.num_secondary
    }

    /// The number of secondary columns.
    pub fn num_secondary(&self) -> usize {
        self.num_secondary
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Return true if the given column is secondary.
    pub fn is_secondary(&self, column: usize) -> bool {
        column >= self.num_primary()
    }

    /// The name of the given column.
    pub fn column_name(&self, column: usize) -> &str {
        &self.names[column]
    }

    /// The columns covered by the given row, in ascending column order.
    pub fn row_columns(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// All rows, indexed by row identifier.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }
}
