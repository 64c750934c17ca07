use super::*;

/// A trait for types that expose the dimensions of a grid.
///
/// # Examples
///
/// ```
/// use tabulation::{GridLike, Tabulation};
///
/// let t: Tabulation<i32> = Tabulation::new(2, 3).unwrap();
/// assert_eq!(t.rows_count(), 2);
/// assert_eq!(t.columns_count(), 3);
/// assert_eq!(t.cells_count(), 6);
/// ```
pub trait GridLike {
    /// Returns the number of rows.
    fn rows_count(&self) -> usize;

    /// Returns the number of columns.
    fn columns_count(&self) -> usize;

    /// Returns the number of allocated cells.
    fn cells_count(&self) -> usize {
        self.rows_count() * self.columns_count()
    }
}

/// A trait providing a factory method to create line views over a shared grid.
///
/// This trait is implemented by [`Row`](crate::Row) and [`Column`](crate::Column),
/// allowing [`Lines`](crate::Lines) to enumerate either dimension in a uniform manner.
///
/// # Examples
///
/// ```
/// use tabulation::{LineTrait, Row, Column, Tabulation, tabulation};
///
/// let t: Tabulation<i32> = tabulation![[1, 2], [3, 4]];
///
/// // Two rows and two columns
/// assert_eq!(t.with_grid(|grid| Row::count(grid)), 2);
/// assert_eq!(t.with_grid(|grid| Column::count(grid)), 2);
/// ```
pub trait LineTrait<T>: Sized {
    /// Creates a view of the line at `index`.
    fn new(grid: SharedGrid<T>, index: isize) -> Self;

    /// Returns how many lines of this kind the grid currently holds.
    fn count(grid: &Grid<T>) -> usize;
}
