//! Error types for problem construction and search resumption.

use thiserror::Error;

/// The reasons building a [`Problem`] or resuming a suspended search can
/// fail.
///
/// All failures are raised synchronously at the offending call; the search
/// itself has no error states (a branch without solutions simply exhausts).
///
/// [`Problem`]: crate::Problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The problem declared no columns at all.
    #[error("problem must declare at least one column")]
    NoColumns,

    /// More trailing secondary columns were requested than columns declared.
    #[error("{num_secondary} secondary columns requested but only {num_columns} columns declared")]
    TooManySecondary {
        /// The requested number of trailing secondary columns.
        num_secondary: usize,
        /// The total number of declared columns.
        num_columns: usize,
    },

    /// The same column name was declared more than once.
    #[error("column {name:?} is declared more than once")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// A row referenced a column that was never declared.
    #[error("row {row} references unknown column {name:?}")]
    UnknownColumn {
        /// The identifier of the offending row.
        row: usize,
        /// The unrecognized column name.
        name: String,
    },

    /// A row listed the same column more than once.
    #[error("row {row} lists column {name:?} more than once")]
    DuplicateEntry {
        /// The identifier of the offending row.
        row: usize,
        /// The repeated column name.
        name: String,
    },

    /// A row covered no columns.
    #[error("row {row} covers no columns")]
    EmptyRow {
        /// The identifier of the offending row.
        row: usize,
    },

    /// A resumption checkpoint did not fit the matrix it was replayed
    /// against, e.g. because the problem definition changed since the
    /// checkpoint was recorded.
    #[error("stale checkpoint: row {row} is not a live candidate at depth {depth}")]
    StaleCheckpoint {
        /// The search depth at which replay failed.
        depth: usize,
        /// The recorded row that could not be selected.
        row: usize,
    },
}
