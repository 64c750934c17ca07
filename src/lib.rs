//! This crate provides a mutable, dynamically resizable two-dimensional table of values.
//! Rows, columns and cells are exposed as lightweight views over one shared grid, and a
//! tabulation can be rendered as an HTML table with the `html` feature.

/// The rectangular value store backing a [`Tabulation`].
pub mod grid;
/// This module provides functionality for rendering a tabulation as an HTML table.
/// It is feature-gated under the `html` feature.
///
/// The main components of this module are:
/// - [`HtmlConfig`](formatter::HtmlConfig): Configuration for indentation, escaping and absent cells.
/// - [`Render`](formatter::Render): A trait implemented by types that can be rendered, such as [`Cell`] and [`Tabulation`].
///
/// # Examples
///
/// ```rust
/// use tabulation::{formatter::Formatter, tabulation, Tabulation};
///
/// let t: Tabulation<i32> = tabulation![[1, 2], [3, 4]];
/// let html = Formatter::new(&t).to_html().unwrap();
/// assert!(html.contains("<td>4</td>"));
/// ```
#[cfg(feature = "html")]
pub mod formatter;
/// The table facade and the row/column/cell views layered on its grid.
pub mod table;

use smallvec::SmallVec;
use thiserror::Error;

pub use crate::grid::traits::{GridLike, LineTrait};
pub use crate::grid::Grid;
pub use crate::table::components::{Cell, Column, Row};
pub use crate::table::lines::{CellCollection, ColumnCollection, Lines, RowCollection};
pub use crate::table::Tabulation;

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Most tables built through this crate are narrow
const DEFAULT_SMALLVEC_SIZE: usize = 8;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabulationError {
    #[error("number of rows must be greater than or equal to zero, got {rows}")]
    NegativeRows { rows: isize },

    #[error("number of columns must be greater than or equal to zero, got {columns}")]
    NegativeColumns { columns: isize },

    #[error("row {row} is out of bounds for {rows_count} rows")]
    RowOutOfBounds { row: isize, rows_count: usize },

    #[error("column {column} is out of bounds for {columns_count} columns")]
    ColumnOutOfBounds { column: isize, columns_count: usize },

    #[error("Failed to write output: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl TabulationError {
    /// Returns `true` for errors caused by an invalid requested size.
    ///
    /// # Example
    /// ```
    /// use tabulation::Tabulation;
    ///
    /// let err = Tabulation::<i32>::new(-1, 1).unwrap_err();
    /// assert!(err.is_argument_error());
    /// ```
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            TabulationError::NegativeRows { .. } | TabulationError::NegativeColumns { .. }
        )
    }

    /// Returns `true` for errors caused by an address outside the existing extent.
    ///
    /// # Example
    /// ```
    /// use tabulation::Tabulation;
    ///
    /// let t: Tabulation<i32> = Tabulation::new(2, 2).unwrap();
    /// let err = t.cell(-3, 1).set_value(1).unwrap_err();
    /// assert!(err.is_index_error());
    /// ```
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            TabulationError::RowOutOfBounds { .. } | TabulationError::ColumnOutOfBounds { .. }
        )
    }
}

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Creates a [`Tabulation`] from a list of rows.
///
/// Each row is pushed in order with [`RowCollection::push`], so rows of
/// different lengths are padded with absent cells up to the widest row.
///
/// # Examples
///
/// ```rust
/// use tabulation::{tabulation, GridLike, Tabulation};
///
/// let t: Tabulation<i32> = tabulation![
///     [1],
///     [2, 3],
/// ];
///
/// assert_eq!(t.rows_count(), 2);
/// assert_eq!(t.columns_count(), 2);
/// assert_eq!(t.cell(0, 1).value(), None);
/// assert_eq!(t.cell(1, 1).value(), Some(3));
/// ```
///
/// An invocation without rows creates an empty tabulation:
///
/// ```rust
/// use tabulation::{tabulation, Tabulation};
///
/// let t: Tabulation<String> = tabulation![];
/// assert!(t.is_empty());
/// ```
#[macro_export]
macro_rules! tabulation {
    () => {
        $crate::Tabulation::default()
    };
    ($([$($value:expr),* $(,)?]),+ $(,)?) => {{
        let table = $crate::Tabulation::default();
        $(
            table.rows().push([$($value),*]);
        )+
        table
    }};
}
