use std::fmt;
use std::marker::PhantomData;
use std::ops::Shl;

use tracing::*;

use crate::grid::SharedGrid;
use crate::{GridLike, LineTrait, SmallVecLine};

use super::components::{Cell, Column, Row};

/// Collects any sequence of optional values into one line of slots.
fn collect_values<T, I>(values: I) -> SmallVecLine<Option<T>>
where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
{
    values.into_iter().map(Into::into).collect()
}

/// A lazy iterator over the rows or columns of a tabulation.
///
/// The number of lines is read from the grid when the iterator is created,
/// so every call to `iter` observes the table as it is at that moment.
pub struct Lines<T, L> {
    grid: SharedGrid<T>,
    position: usize,
    end: usize,
    _line: PhantomData<L>,
}

impl<T, L: LineTrait<T>> Lines<T, L> {
    fn new(grid: SharedGrid<T>) -> Self {
        let end = L::count(&grid.borrow());
        Self {
            grid,
            position: 0,
            end,
            _line: PhantomData,
        }
    }
}

impl<T, L: LineTrait<T>> Iterator for Lines<T, L> {
    type Item = L;

    fn next(&mut self) -> Option<L> {
        if self.position >= self.end {
            return None;
        }
        let line = L::new(self.grid.clone(), self.position as isize);
        self.position += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.position;
        (remaining, Some(remaining))
    }
}

impl<T, L: LineTrait<T>> ExactSizeIterator for Lines<T, L> {}

/// A collection of rows for a [`Tabulation`](crate::Tabulation).
pub struct RowCollection<T> {
    grid: SharedGrid<T>,
}

impl<T> fmt::Debug for RowCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowCollection")
            .field("count", &self.count())
            .finish()
    }
}

impl<T> RowCollection<T> {
    pub(crate) fn new(grid: SharedGrid<T>) -> Self {
        Self { grid }
    }

    /// Returns `true` if the number of allocated rows is zero.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the number of allocated rows.
    pub fn count(&self) -> usize {
        self.grid.borrow().rows_count()
    }

    /// Adds a new row at the end position.
    ///
    /// `values` is any sequence whose items convert into `Option<T>`: a
    /// collection of values, a collection of optional values, or an `Option`
    /// standing for a single value (`Some`) or nothing (`None`). An empty
    /// sequence leaves the table unchanged. A row longer than the table
    /// widens every other row with absent cells; a shorter one is padded.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::default();
    /// t.rows().push([1, 2]).push(Some(3)).push([4, 5, 6]);
    /// assert_eq!(t.rows().count(), 3);
    /// assert_eq!(t.columns_count(), 3);
    ///
    /// t.rows().push(None::<i32>);
    /// assert_eq!(t.rows().count(), 3);
    /// ```
    pub fn push<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let values = collect_values(values);
        trace!("Pushing row with {} values", values.len());
        self.grid.borrow_mut().push_row(values);
        self
    }

    /// Adds a new row at the given position.
    ///
    /// The table grows first so that `row` is a valid position; rows at or
    /// after `row` shift down by one. Empty input leaves the table unchanged.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::new(1, 2).unwrap();
    /// t.rows().insert(2, [1]);
    /// assert_eq!(t.rows_count(), 3);
    /// assert_eq!(t.cell(2, 0).value(), Some(1));
    /// ```
    pub fn insert<I>(&self, row: usize, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let values = collect_values(values);
        trace!("Inserting row at {} with {} values", row, values.len());
        self.grid.borrow_mut().insert_row(row, values);
        self
    }

    /// Calls `visit` once for each row, in ascending order.
    ///
    /// The rows visited are the ones allocated when `each` is called; `visit`
    /// may modify the table through the views it receives.
    pub fn each<F>(&self, visit: F) -> &Self
    where
        F: FnMut(Row<T>),
    {
        self.iter().for_each(visit);
        self
    }

    /// Returns a lazy iterator over the rows allocated right now.
    pub fn iter(&self) -> Lines<T, Row<T>> {
        Lines::new(self.grid.clone())
    }
}

impl<T> IntoIterator for &RowCollection<T> {
    type Item = Row<T>;
    type IntoIter = Lines<T, Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Appends a row, like [`RowCollection::push`].
impl<T, I> Shl<I> for RowCollection<T>
where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
{
    type Output = Self;

    fn shl(self, values: I) -> Self::Output {
        self.push(values);
        self
    }
}

/// A collection of columns for a [`Tabulation`](crate::Tabulation).
pub struct ColumnCollection<T> {
    grid: SharedGrid<T>,
}

impl<T> fmt::Debug for ColumnCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnCollection")
            .field("count", &self.count())
            .finish()
    }
}

impl<T> ColumnCollection<T> {
    pub(crate) fn new(grid: SharedGrid<T>) -> Self {
        Self { grid }
    }

    /// Returns `true` if the number of allocated columns is zero.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the number of allocated columns.
    pub fn count(&self) -> usize {
        self.grid.borrow().columns_count()
    }

    /// Adds a new column at the end position.
    ///
    /// Accepts the same inputs as [`RowCollection::push`]. A column longer
    /// than the table adds rows, absent everywhere but in the new column.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::default();
    /// t.columns().push([1]).push([2, 3]);
    /// assert_eq!((t.rows_count(), t.columns_count()), (2, 2));
    /// assert_eq!(t.cell(1, 0).value(), None);
    /// assert_eq!(t.cell(1, 1).value(), Some(3));
    /// ```
    pub fn push<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let values = collect_values(values);
        trace!("Pushing column with {} values", values.len());
        self.grid.borrow_mut().push_column(values);
        self
    }

    /// Adds a new column at the given position.
    ///
    /// The table grows first so that `column` is a valid position; columns
    /// at or after `column` shift right by one.
    ///
    /// # Example
    /// ```
    /// use tabulation::{GridLike, Tabulation};
    ///
    /// let t: Tabulation<i32> = Tabulation::new(2, 1).unwrap();
    /// t.columns().insert(2, [1]);
    /// assert_eq!(t.columns_count(), 3);
    /// assert_eq!(t.cell(0, 2).value(), Some(1));
    /// ```
    pub fn insert<I>(&self, column: usize, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<Option<T>>,
    {
        let values = collect_values(values);
        trace!("Inserting column at {} with {} values", column, values.len());
        self.grid.borrow_mut().insert_column(column, values);
        self
    }

    /// Calls `visit` once for each column, in ascending order.
    pub fn each<F>(&self, visit: F) -> &Self
    where
        F: FnMut(Column<T>),
    {
        self.iter().for_each(visit);
        self
    }

    /// Returns a lazy iterator over the columns allocated right now.
    pub fn iter(&self) -> Lines<T, Column<T>> {
        Lines::new(self.grid.clone())
    }
}

impl<T> IntoIterator for &ColumnCollection<T> {
    type Item = Column<T>;
    type IntoIter = Lines<T, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Appends a column, like [`ColumnCollection::push`].
impl<T, I> Shl<I> for ColumnCollection<T>
where
    I: IntoIterator,
    I::Item: Into<Option<T>>,
{
    type Output = Self;

    fn shl(self, values: I) -> Self::Output {
        self.push(values);
        self
    }
}

/// The line a [`CellCollection`] runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Row(isize),
    Column(isize),
}

/// The cells along one row or one column.
///
/// Like [`Lines`], iteration reads the number of cells when it starts.
pub struct CellCollection<T> {
    grid: SharedGrid<T>,
    line: Line,
}

impl<T> fmt::Debug for CellCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellCollection")
            .field("line", &self.line)
            .finish()
    }
}

impl<T> CellCollection<T> {
    pub(crate) fn new(grid: SharedGrid<T>, line: Line) -> Self {
        Self { grid, line }
    }

    /// Returns the number of cells along the line right now.
    pub fn count(&self) -> usize {
        let grid = self.grid.borrow();
        match self.line {
            Line::Row(_) => grid.columns_count(),
            Line::Column(_) => grid.rows_count(),
        }
    }

    /// Calls `visit` once for each cell, in ascending order.
    pub fn each<F>(&self, visit: F) -> &Self
    where
        F: FnMut(Cell<T>),
    {
        self.iter().for_each(visit);
        self
    }

    /// Returns a lazy iterator over the cells along the line.
    pub fn iter(&self) -> Cells<T> {
        Cells {
            grid: self.grid.clone(),
            line: self.line,
            position: 0,
            end: self.count(),
        }
    }
}

impl<T> IntoIterator for &CellCollection<T> {
    type Item = Cell<T>;
    type IntoIter = Cells<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A lazy iterator over the cells of a [`CellCollection`].
pub struct Cells<T> {
    grid: SharedGrid<T>,
    line: Line,
    position: usize,
    end: usize,
}

impl<T> Iterator for Cells<T> {
    type Item = Cell<T>;

    fn next(&mut self) -> Option<Cell<T>> {
        if self.position >= self.end {
            return None;
        }
        let position = self.position as isize;
        self.position += 1;
        let cell = match self.line {
            Line::Row(row) => Cell::new(self.grid.clone(), row, position),
            Line::Column(column) => Cell::new(self.grid.clone(), position, column),
        };
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cells<T> {}

#[cfg(test)]
mod tests {
    use crate::{tabulation, GridLike, Tabulation};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rows_enumeration() {
        let t: Tabulation<i32> = tabulation![[1], [2], [3], [4]];
        let sum: i32 = t
            .rows()
            .iter()
            .filter_map(|row| row.column(0).value())
            .sum();
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_columns_enumeration() {
        let t: Tabulation<i32> = Tabulation::default();
        t.columns().push([1]).push([2]).push([3]).push([4]);
        let sum: i32 = t
            .columns()
            .iter()
            .filter_map(|column| column.row(0).value())
            .sum();
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_column_cells_enumeration() {
        let t: Tabulation<i32> = Tabulation::default();
        t.columns().push([1, 2, 3, 4]);
        let cells = t.column(0).rows();
        assert_eq!(cells.count(), 4);
        let sum: i32 = cells.iter().filter_map(|cell| cell.value()).sum();
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_iteration_is_restartable_and_fresh() {
        let t: Tabulation<i32> = tabulation![[1]];
        let rows = t.rows();
        assert_eq!(rows.iter().count(), 1);
        t.rows().push([2]);
        assert_eq!(rows.iter().count(), 2);
        assert_eq!(rows.iter().map(|row| row.index()).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_iteration_bound_is_fixed_when_started() {
        let t: Tabulation<i32> = tabulation![[1], [2]];
        let mut visited = 0;
        for row in &t.rows() {
            visited += 1;
            // Rows pushed during iteration are not visited
            t.rows().push([row.index() as i32 + 10]);
        }
        assert_eq!(visited, 2);
        assert_eq!(t.rows_count(), 4);
    }

    #[test]
    fn test_each_visits_in_order_and_chains() {
        let t: Tabulation<i32> = tabulation![[1, 2], [3, 4]];
        let mut seen = Vec::new();
        t.rows()
            .each(|row| {
                row.columns()
                    .each(|cell| seen.extend(cell.value()));
            })
            .push([5, 6]);
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(t.rows_count(), 3);
    }

    #[test]
    fn test_each_visitor_may_mutate() {
        let t: Tabulation<i32> = tabulation![[1, 2], [3, 4]];
        t.columns().each(|column| {
            column.rows().each(|cell| {
                let doubled = cell.value().map(|value| value * 2);
                cell.set_value(doubled).unwrap();
            });
        });
        assert_eq!(t.cell(1, 1).value(), Some(8));
    }

    #[test]
    fn test_shl_appends() {
        let t: Tabulation<i32> = Tabulation::default();
        let _ = t.rows() << [1] << [2, 3];
        assert_eq!(t.rows_count(), 2);
        assert_eq!(t.columns_count(), 2);
        assert_eq!(t.cell(0, 1).value(), None);

        let t: Tabulation<i32> = Tabulation::default();
        let _ = t.columns() << [1] << [2, 3];
        assert_eq!(t.cell(0, 1).value(), Some(2));
        assert_eq!(t.cell(1, 1).value(), Some(3));
    }

    #[test]
    fn test_push_accepts_optional_values() {
        let t: Tabulation<&str> = Tabulation::default();
        t.rows().push([Some("a"), None, Some("c")]);
        assert_eq!(t.columns_count(), 3);
        assert_eq!(t.cell(0, 1).value(), None);
        assert_eq!(t.cell(0, 2).value(), Some("c"));
    }

    #[test]
    fn test_collection_debug() {
        let t: Tabulation<i32> = tabulation![[1, 2, 3]];
        assert_eq!(format!("{:?}", t.rows()), "RowCollection { count: 1 }");
        assert_eq!(format!("{:?}", t.columns()), "ColumnCollection { count: 3 }");
    }
}
