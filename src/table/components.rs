use std::fmt;

use crate::grid::{resolve, Grid, SharedGrid};
use crate::{GridLike, LineTrait, TabulationError};

use super::lines::{CellCollection, Line};

/// A single cell of a tabulation, addressed by row and column index.
///
/// Negative indices count from the end of the existing extent.
pub struct Cell<T> {
    grid: SharedGrid<T>,
    row: isize,
    column: isize,
}

impl<T> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("row", &self.row)
            .field("column", &self.column)
            .finish()
    }
}

impl<T> Cell<T> {
    pub(crate) fn new(grid: SharedGrid<T>, row: isize, column: isize) -> Self {
        Self { grid, row, column }
    }

    /// Returns the row index as given, negative indices unresolved.
    pub fn row(&self) -> isize {
        self.row
    }

    /// Returns the column index as given, negative indices unresolved.
    pub fn column(&self) -> isize {
        self.column
    }

    /// Returns `true` if the address lies outside the allocated cells.
    ///
    /// # Example
    /// ```
    /// use tabulation::Tabulation;
    ///
    /// let t: Tabulation<i32> = Tabulation::new(2, 2).unwrap();
    /// assert!(!t.cell(0, 0).is_empty());
    /// assert!(t.cell(2, 2).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        let grid = self.grid.borrow();
        resolve(self.row, grid.rows_count()).is_none()
            || resolve(self.column, grid.columns_count()).is_none()
    }

    /// Returns a copy of the stored value, or `None` when absent.
    pub fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.grid.borrow().get(self.row, self.column).cloned()
    }

    /// Runs `f` with a reference to the stored value.
    ///
    /// The table must not be mutated from within `f`.
    pub fn with_value<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        f(self.grid.borrow().get(self.row, self.column))
    }

    /// Stores a value, growing the table so the address exists.
    /// Passing `None` makes the cell absent.
    ///
    /// # Errors
    /// Returns an index error when a negative index reaches past the start
    /// of the existing extent.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::default();
    /// t.cell(1, 1).set_value(1).unwrap();
    /// assert_eq!((t.rows_count(), t.columns_count()), (2, 2));
    /// assert_eq!(t.cell(0, 0).value(), None);
    /// assert_eq!(t.cell(1, 1).value(), Some(1));
    /// ```
    pub fn set_value(&self, value: impl Into<Option<T>>) -> Result<(), TabulationError> {
        self.grid
            .borrow_mut()
            .set(self.row, self.column, value.into())
    }
}

/// A single row of a tabulation.
pub struct Row<T> {
    grid: SharedGrid<T>,
    row: isize,
}

impl<T> fmt::Debug for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row").field("row", &self.row).finish()
    }
}

impl<T> LineTrait<T> for Row<T> {
    fn new(grid: SharedGrid<T>, index: isize) -> Self {
        Row { grid, row: index }
    }

    fn count(grid: &Grid<T>) -> usize {
        grid.rows_count()
    }
}

impl<T> Row<T> {
    /// Returns the index this row was created with.
    pub fn index(&self) -> isize {
        self.row
    }

    /// Returns `true` if the row lies outside the allocated rows.
    pub fn is_empty(&self) -> bool {
        resolve(self.row, self.grid.borrow().rows_count()).is_none()
    }

    /// Returns the cells of this row, one per column.
    ///
    /// # Example
    /// ```
    /// use tabulation::{tabulation, Tabulation};
    ///
    /// let t: Tabulation<i32> = tabulation![[1, 2, 3, 4]];
    /// let sum: i32 = t.row(0).columns().iter().filter_map(|cell| cell.value()).sum();
    /// assert_eq!(sum, 10);
    /// ```
    pub fn columns(&self) -> CellCollection<T> {
        CellCollection::new(self.grid.clone(), Line::Row(self.row))
    }

    /// Returns the cell of this row in `column`.
    pub fn column(&self, column: isize) -> Cell<T> {
        Cell::new(self.grid.clone(), self.row, column)
    }
}

/// A single column of a tabulation.
pub struct Column<T> {
    grid: SharedGrid<T>,
    column: isize,
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("column", &self.column)
            .finish()
    }
}

impl<T> LineTrait<T> for Column<T> {
    fn new(grid: SharedGrid<T>, index: isize) -> Self {
        Column {
            grid,
            column: index,
        }
    }

    fn count(grid: &Grid<T>) -> usize {
        grid.columns_count()
    }
}

impl<T> Column<T> {
    /// Returns the index this column was created with.
    pub fn index(&self) -> isize {
        self.column
    }

    /// Returns `true` if the column lies outside the allocated columns.
    pub fn is_empty(&self) -> bool {
        resolve(self.column, self.grid.borrow().columns_count()).is_none()
    }

    /// Returns the cells of this column, one per row.
    pub fn rows(&self) -> CellCollection<T> {
        CellCollection::new(self.grid.clone(), Line::Column(self.column))
    }

    /// Returns the cell of this column in `row`.
    pub fn row(&self, row: isize) -> Cell<T> {
        Cell::new(self.grid.clone(), row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use crate::{tabulation, Tabulation};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_is_empty_checks_row_against_rows_count() {
        // Three rows and one column: row 2 is allocated even though it is
        // not below the column count.
        let t: Tabulation<i32> = Tabulation::new(3, 1).unwrap();
        assert!(!t.cell(2, 0).is_empty());
        assert!(t.cell(3, 0).is_empty());
        assert!(t.cell(0, 1).is_empty());
    }

    #[test]
    fn test_cell_is_empty_with_negative_index() {
        let t: Tabulation<i32> = Tabulation::new(2, 2).unwrap();
        assert!(!t.cell(-1, -2).is_empty());
        assert!(t.cell(-3, 0).is_empty());
    }

    #[test]
    fn test_absent_value_is_distinct_from_out_of_bounds() {
        let t: Tabulation<i32> = Tabulation::new(1, 1).unwrap();
        let inside = t.cell(0, 0);
        let outside = t.cell(5, 5);
        assert_eq!(inside.value(), None);
        assert_eq!(outside.value(), None);
        assert!(!inside.is_empty());
        assert!(outside.is_empty());
    }

    #[test]
    fn test_set_value_none_makes_cell_absent() {
        let t: Tabulation<i32> = tabulation![[1, 2]];
        t.cell(0, 0).set_value(None::<i32>).unwrap();
        assert_eq!(t.cell(0, 0).value(), None);
        assert_eq!(t.cell(0, 1).value(), Some(2));
    }

    #[test]
    fn test_with_value_borrows() {
        let t: Tabulation<String> = Tabulation::default();
        t.cell(0, 0).set_value("hello".to_string()).unwrap();
        let len = t.cell(0, 0).with_value(|value| value.map_or(0, String::len));
        assert_eq!(len, 5);
    }

    #[test]
    fn test_row_and_column_emptiness() {
        let t: Tabulation<i32> = Tabulation::new(2, 3).unwrap();
        assert!(!t.row(1).is_empty());
        assert!(t.row(2).is_empty());
        assert!(!t.column(2).is_empty());
        assert!(t.column(3).is_empty());
        assert!(!t.row(-2).is_empty());
        assert!(t.column(-4).is_empty());
    }

    #[test]
    fn test_line_is_empty_past_the_start() {
        // A negative index counts from the end, so one reaching before the
        // first line addresses nothing.
        let t: Tabulation<i32> = Tabulation::new(2, 2).unwrap();
        assert!(t.row(-5).is_empty());
        assert!(t.column(-3).is_empty());
        assert!(!t.row(-1).is_empty());
        assert!(!t.column(-2).is_empty());
    }

    #[test]
    fn test_line_cells_address_the_crossing_cell() {
        let t: Tabulation<i32> = tabulation![[1, 2], [3, 4]];
        assert_eq!(t.row(1).column(0).value(), Some(3));
        assert_eq!(t.column(1).row(0).value(), Some(2));
        assert_eq!(t.row(1).column(0).row(), 1);
        assert_eq!(t.column(1).row(0).column(), 1);
    }

    #[test]
    fn test_debug_shows_indices() {
        let t: Tabulation<i32> = Tabulation::default();
        assert_eq!(format!("{:?}", t.cell(1, -1)), "Cell { row: 1, column: -1 }");
        assert_eq!(format!("{:?}", t.row(3)), "Row { row: 3 }");
        assert_eq!(format!("{:?}", t.column(0)), "Column { column: 0 }");
    }
}
