pub mod components;
pub mod lines;

use std::fmt;

use tracing::*;

use crate::grid::{Grid, SharedGrid};
use crate::{GridLike, LineTrait, TabulationError, VERSION};
use components::{Cell, Column, Row};
use lines::{ColumnCollection, RowCollection};

/// A two-dimensional, mutable table of values.
///
/// Every accessor returns a view holding a handle to the same grid, so a
/// change made through one view is visible through all others.
///
/// # Example
/// ```
/// use tabulation::{GridLike, Tabulation};
///
/// let t: Tabulation<i32> = Tabulation::default();
/// t.rows().push([1, 2]).push([3, 4]);
///
/// assert_eq!(t.rows_count(), 2);
/// assert_eq!(t.cell(1, 1).value(), Some(4));
///
/// let first = t.row(0);
/// t.cell(0, 1).set_value(20).unwrap();
/// assert_eq!(first.column(1).value(), Some(20));
/// ```
pub struct Tabulation<T> {
    grid: SharedGrid<T>,
}

impl<T> Default for Tabulation<T> {
    fn default() -> Self {
        Self {
            grid: Grid::default().into_shared(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tabulation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tabulation")
            .field("grid", &*self.grid.borrow())
            .finish()
    }
}

impl<T> GridLike for Tabulation<T> {
    fn rows_count(&self) -> usize {
        self.grid.borrow().rows_count()
    }

    fn columns_count(&self) -> usize {
        self.grid.borrow().columns_count()
    }
}

impl<T> From<Grid<T>> for Tabulation<T> {
    fn from(grid: Grid<T>) -> Self {
        Self {
            grid: grid.into_shared(),
        }
    }
}

impl<T> Tabulation<T> {
    /// Creates a tabulation of `rows` × `columns` absent cells.
    ///
    /// # Errors
    /// Returns an argument error when either dimension is negative.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::new(2, 2).unwrap();
    /// assert!(t.any());
    ///
    /// // A zero dimension leaves nothing in the other one either
    /// let t: Tabulation<i32> = Tabulation::new(1, 0).unwrap();
    /// assert_eq!(t.rows_count(), 0);
    ///
    /// assert!(Tabulation::<i32>::new(-1, 1).is_err());
    /// ```
    pub fn new(rows: isize, columns: isize) -> Result<Self, TabulationError> {
        debug!("Creating tabulation with rows={}, columns={}", rows, columns);
        Ok(Grid::new(rows, columns)?.into())
    }

    /// Creates a tabulation by pushing each of `rows` in order.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<&str> = Tabulation::from_rows([vec!["a"], vec!["b", "c"]]);
    /// assert_eq!(t.columns_count(), 2);
    /// assert_eq!(t.cell(0, 1).value(), None);
    /// ```
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let table = Self::default();
        {
            let collection = table.rows();
            for row in rows {
                collection.push(row);
            }
        }
        table
    }

    /// Returns the crate version.
    pub fn version() -> &'static str {
        VERSION
    }

    /// Returns a collection of rows.
    pub fn rows(&self) -> RowCollection<T> {
        RowCollection::new(self.grid.clone())
    }

    /// Returns a single row. The index may lie outside the table.
    pub fn row(&self, row: isize) -> Row<T> {
        Row::new(self.grid.clone(), row)
    }

    /// Returns a collection of columns.
    pub fn columns(&self) -> ColumnCollection<T> {
        ColumnCollection::new(self.grid.clone())
    }

    /// Returns a single column. The index may lie outside the table.
    pub fn column(&self, column: isize) -> Column<T> {
        Column::new(self.grid.clone(), column)
    }

    /// Returns a single cell. The address may lie outside the table.
    pub fn cell(&self, row: isize, column: isize) -> Cell<T> {
        Cell::new(self.grid.clone(), row, column)
    }

    /// Returns `true` if the number of allocated cells is zero.
    pub fn is_empty(&self) -> bool {
        self.cells_count() == 0
    }

    /// Returns `true` if the number of allocated cells is greater than zero.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Deletes all allocated cells.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::new(2, 2).unwrap();
    /// assert!(t.clear().is_empty());
    /// assert_eq!((t.rows_count(), t.columns_count()), (0, 0));
    /// ```
    pub fn clear(&self) -> &Self {
        trace!("Clearing tabulation");
        self.grid.borrow_mut().clear();
        self
    }

    /// Alters the number of rows and columns, keeping overlapping values.
    ///
    /// # Errors
    /// Returns an argument error when either dimension is negative; the
    /// table is unchanged then.
    pub fn resize(&self, rows: isize, columns: isize) -> Result<&Self, TabulationError> {
        self.grid.borrow_mut().resize(rows, columns)?;
        Ok(self)
    }

    /// Grows the table to at least `rows` × `columns`. Never shrinks.
    pub fn expand(&self, rows: usize, columns: usize) -> &Self {
        self.grid.borrow_mut().expand(rows, columns);
        self
    }

    /// Runs `f` against the current state of the grid.
    ///
    /// The grid must not be mutated through a view from within `f`.
    pub fn with_grid<R>(&self, f: impl FnOnce(&Grid<T>) -> R) -> R {
        f(&*self.grid.borrow())
    }

    /// Copies the current grid out of the table.
    ///
    /// The copy no longer observes later changes to the table.
    pub fn to_grid(&self) -> Grid<T>
    where
        T: Clone,
    {
        self.grid.borrow().clone()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Tabulation<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.grid.borrow().serialize(serializer)
    }
}
