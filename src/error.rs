//! Error type shared by the dataset and the tree builder.
use polars::prelude::PolarsError;

use std::io;

/// A `Result` alias whose error is [`Id3Error`].
pub type Result<T> = std::result::Result<T, Id3Error>;

/// Errors raised while loading a dataset or growing a tree.
///
/// The first five variants describe malformed input;
/// they abort the run before any tree is built.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// A column referenced by name is absent.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// Two columns share the same name.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// A column length disagrees with the rest of the table.
    #[error("column `{column}` has {got} rows, expected {expected}")]
    RowCountMismatch {
        /// The offending column.
        column:   String,
        /// Row count of the table.
        expected: usize,
        /// Row count of the column.
        got:      usize,
    },

    /// A cell is empty.
    #[error("missing value in column `{column}` at row {row}")]
    MissingValue {
        /// Column of the empty cell.
        column: String,
        /// Zero-based row of the empty cell.
        row:    usize,
    },

    /// A numeric operation was requested on a non-numeric column.
    #[error("column `{0}` holds non-numeric values")]
    NonNumeric(String),

    /// The tree builder received a table without rows.
    #[error("cannot grow a tree from an empty dataset")]
    EmptyDataset,

    /// A partition below the split on `attribute` holds no rows.
    #[error("a partition below `{attribute}` holds no rows")]
    EmptyPartition {
        /// The attribute the partition was cut on.
        attribute: String,
    },

    /// Reading or converting a `DataFrame` failed.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
