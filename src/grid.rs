pub mod traits;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::*;

use crate::{SmallVecLine, TabulationError};
use traits::GridLike;

/// A grid shared between a tabulation and every view created from it.
pub type SharedGrid<T> = Rc<RefCell<Grid<T>>>;

/// The rectangular value store backing a [`Tabulation`](crate::Tabulation).
///
/// The grid is either empty (no rows and no columns) or every row holds
/// exactly [`columns_count`](GridLike::columns_count) slots. A slot holding
/// `None` is absent: its address is valid but no value is stored there.
///
/// # Example
/// ```
/// use tabulation::{Grid, GridLike};
///
/// let mut grid = Grid::new(2, 3).unwrap();
/// grid.set(1, 2, Some("x")).unwrap();
/// assert_eq!(grid.cells_count(), 6);
/// assert_eq!(grid.get(1, 2), Some(&"x"));
/// assert_eq!(grid.get(0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    rows: Vec<SmallVecLine<Option<T>>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> GridLike for Grid<T> {
    fn rows_count(&self) -> usize {
        self.rows.len()
    }

    fn columns_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }
}

/// Resolves a possibly end-relative index against `count`.
///
/// Returns `None` when the index does not address an existing element.
pub(crate) fn resolve(index: isize, count: usize) -> Option<usize> {
    let resolved = if index < 0 {
        count.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    (resolved < count).then_some(resolved)
}

impl<T> Grid<T> {
    /// Creates a grid of `rows` × `columns` absent slots.
    ///
    /// # Errors
    /// Returns [`TabulationError::NegativeRows`] or
    /// [`TabulationError::NegativeColumns`] for negative dimensions.
    pub fn new(rows: isize, columns: isize) -> Result<Self, TabulationError> {
        let mut grid = Self::default();
        grid.resize(rows, columns)?;
        Ok(grid)
    }

    /// Wraps the grid into a handle that views can share.
    pub fn into_shared(self) -> SharedGrid<T> {
        Rc::new(RefCell::new(self))
    }

    /// Returns the value stored at the given address.
    ///
    /// Negative indices count from the end of the existing extent. An address
    /// outside the grid reads the same as an absent slot.
    pub fn get(&self, row: isize, column: isize) -> Option<&T> {
        let row = resolve(row, self.rows_count())?;
        let column = resolve(column, self.columns_count())?;
        self.rows[row][column].as_ref()
    }

    /// Stores a value, growing the grid so that the address exists.
    ///
    /// # Errors
    /// Returns [`TabulationError::RowOutOfBounds`] or
    /// [`TabulationError::ColumnOutOfBounds`] when a negative index reaches
    /// past the start of the existing extent, or when the address is too
    /// large to allocate. The grid is unchanged then.
    ///
    /// # Example
    /// ```
    /// use tabulation::{Grid, GridLike};
    ///
    /// let mut grid = Grid::default();
    /// grid.set(1, 1, Some(1)).unwrap();
    /// assert_eq!((grid.rows_count(), grid.columns_count()), (2, 2));
    ///
    /// grid.set(-1, -2, Some(2)).unwrap();
    /// assert_eq!(grid.get(1, 0), Some(&2));
    ///
    /// assert!(grid.set(-3, 0, Some(3)).is_err());
    /// ```
    pub fn set(&mut self, row: isize, column: isize, value: Option<T>) -> Result<(), TabulationError> {
        let rows_count = self.rows_count();
        let columns_count = self.columns_count();
        if row < -(rows_count as isize) {
            error!("row {} is out of bounds for {} rows", row, rows_count);
            return Err(TabulationError::RowOutOfBounds { row, rows_count });
        }
        if column < -(columns_count as isize) {
            error!(
                "column {} is out of bounds for {} columns",
                column, columns_count
            );
            return Err(TabulationError::ColumnOutOfBounds {
                column,
                columns_count,
            });
        }

        let Some(rows) = row.checked_add(1) else {
            error!("row {} cannot be allocated", row);
            return Err(TabulationError::RowOutOfBounds { row, rows_count });
        };
        let Some(columns) = column.checked_add(1) else {
            error!("column {} cannot be allocated", column);
            return Err(TabulationError::ColumnOutOfBounds {
                column,
                columns_count,
            });
        };
        self.expand(rows.max(0) as usize, columns.max(0) as usize);

        let Some(resolved_row) = resolve(row, self.rows_count()) else {
            return Err(TabulationError::RowOutOfBounds {
                row,
                rows_count: self.rows_count(),
            });
        };
        let Some(resolved_column) = resolve(column, self.columns_count()) else {
            return Err(TabulationError::ColumnOutOfBounds {
                column,
                columns_count: self.columns_count(),
            });
        };
        self.rows[resolved_row][resolved_column] = value;
        Ok(())
    }

    /// Alters the number of rows and columns.
    ///
    /// Values at addresses present in both the old and the new extent are
    /// kept. A zero dimension collapses the grid to 0 × 0.
    ///
    /// # Errors
    /// Returns [`TabulationError::NegativeRows`] or
    /// [`TabulationError::NegativeColumns`]; the grid is unchanged then.
    ///
    /// # Example
    /// ```
    /// use tabulation::{Grid, GridLike};
    ///
    /// let mut grid: Grid<u8> = Grid::new(2, 2).unwrap();
    /// grid.resize(3, 0).unwrap();
    /// assert_eq!((grid.rows_count(), grid.columns_count()), (0, 0));
    /// ```
    pub fn resize(&mut self, rows: isize, columns: isize) -> Result<&mut Self, TabulationError> {
        if rows < 0 {
            error!("Invalid number of rows: {}", rows);
            return Err(TabulationError::NegativeRows { rows });
        }
        if columns < 0 {
            error!("Invalid number of columns: {}", columns);
            return Err(TabulationError::NegativeColumns { columns });
        }
        self.reshape(rows as usize, columns as usize);
        Ok(self)
    }

    /// Removes every row and column.
    pub fn clear(&mut self) -> &mut Self {
        self.reshape(0, 0);
        self
    }

    /// Grows the grid to at least `rows` × `columns`. Never shrinks.
    ///
    /// Growing an empty grid along one axis only still yields an empty grid.
    pub fn expand(&mut self, rows: usize, columns: usize) -> &mut Self {
        let rows_count = self.rows_count();
        let columns_count = self.columns_count();
        if rows_count < rows || columns_count < columns {
            self.reshape(rows_count.max(rows), columns_count.max(columns));
        }
        self
    }

    fn reshape(&mut self, rows: usize, columns: usize) {
        trace!("Reshaping grid to rows={}, columns={}", rows, columns);
        if rows == 0 || columns == 0 {
            self.rows.clear();
            return;
        }
        self.rows.truncate(rows);
        for line in self.rows.iter_mut() {
            line.truncate(columns);
            let missing = columns - line.len();
            line.extend(std::iter::repeat_with(|| None).take(missing));
        }
        self.rows
            .resize_with(rows, || std::iter::repeat_with(|| None).take(columns).collect());
        debug!(
            "Grid now has rows={}, columns={}",
            self.rows_count(),
            self.columns_count()
        );
    }

    /// Appends a row, widening the grid when `values` is longer than a row.
    pub(crate) fn push_row(&mut self, values: SmallVecLine<Option<T>>) {
        if values.is_empty() {
            return;
        }
        let width = self.columns_count().max(values.len());
        self.expand(self.rows_count(), width);
        self.rows.push(Self::padded(values, width));
    }

    /// Inserts a row at `index`, growing the grid first so `index` is valid.
    pub(crate) fn insert_row(&mut self, index: usize, values: SmallVecLine<Option<T>>) {
        if values.is_empty() {
            return;
        }
        self.expand(index, values.len());
        let width = self.columns_count().max(values.len());
        self.rows.insert(index, Self::padded(values, width));
    }

    /// Appends a column, materializing rows when `values` is longer than a column.
    pub(crate) fn push_column(&mut self, values: SmallVecLine<Option<T>>) {
        if values.is_empty() {
            return;
        }
        self.expand(values.len(), self.columns_count());
        let height = self.rows_count().max(values.len());
        self.rows.resize_with(height, SmallVecLine::new);
        let mut values = values.into_iter();
        for line in self.rows.iter_mut() {
            line.push(values.next().flatten());
        }
    }

    /// Inserts a column at `index`, growing the grid first so `index` is valid.
    pub(crate) fn insert_column(&mut self, index: usize, values: SmallVecLine<Option<T>>) {
        if values.is_empty() {
            return;
        }
        self.expand(values.len(), index);
        let height = self.rows_count().max(values.len());
        self.rows.resize_with(height, SmallVecLine::new);
        let mut values = values.into_iter();
        for line in self.rows.iter_mut() {
            line.insert(index, values.next().flatten());
        }
    }

    fn padded(mut values: SmallVecLine<Option<T>>, width: usize) -> SmallVecLine<Option<T>> {
        let missing = width - values.len();
        values.extend(std::iter::repeat_with(|| None).take(missing));
        values
    }
}
