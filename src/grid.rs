use std::{ops::Index, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("unmatching column count at row #{row}: expected {expected}, found {found}")]
    UnequalRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular, read-only buffer addressed by `(row, column)`.
///
/// Every row has the same length; this is checked once in [`Grid::new`] so
/// lookups only ever need a bounds check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T>(Vec<Vec<T>>);

impl<T> Grid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(GridError::UnequalRows {
                row,
                expected,
                found,
            });
        }
        Ok(Grid(rows))
    }
    pub fn get(&self, index: (usize, usize)) -> Option<&T> {
        self.0.get(index.0).and_then(|row| row.get(index.1))
    }
    /// Looks up the cell `offset` away from `index`, or `None` when that
    /// falls outside the grid on any side.
    pub fn get_offset(&self, index: (usize, usize), offset: (isize, isize)) -> Option<&T> {
        let row = index.0.checked_add_signed(offset.0)?;
        let column = index.1.checked_add_signed(offset.1)?;
        self.get((row, column))
    }
    pub fn rows(&self) -> usize {
        self.0.len()
    }
    pub fn columns(&self) -> usize {
        self.0.first().map(|row| row.len()).unwrap_or(0)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (y, x): (usize, usize)) -> &Self::Output {
        &self.0[y][x]
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    /// Rows are split on `'\n'` only, nothing is trimmed. A final newline
    /// ends the last row rather than starting an empty one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('\n').unwrap_or(s);
        if s.is_empty() {
            return Grid::new(Vec::new());
        }
        Grid::new(s.split('\n').map(|line| line.chars().collect()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_rectangular_text() {
        let grid: Grid<char> = "ab\ncd\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid[(1, 0)], 'c');
        assert_eq!(grid.get((0, 1)), Some(&'b'));
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let grid: Grid<char> = "".parse().unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.columns(), 0);
        assert_eq!(grid.get((0, 0)), None);
    }

    #[test]
    fn rejects_unequal_rows() {
        let err = "abc\nab\nabc".parse::<Grid<char>>().unwrap_err();
        assert_eq!(
            err,
            GridError::UnequalRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn trailing_whitespace_is_a_row_length_mismatch() {
        assert!("ab \nab".parse::<Grid<char>>().is_err());
        assert!("ab\r\nab".parse::<Grid<char>>().is_err());
    }

    #[test]
    fn blank_line_inside_grid_is_rejected() {
        assert!("ab\n\nab".parse::<Grid<char>>().is_err());
    }

    #[test]
    fn offsets_never_wrap() {
        let grid: Grid<char> = "ab\ncd".parse().unwrap();
        assert_eq!(grid.get_offset((0, 0), (1, 1)), Some(&'d'));
        assert_eq!(grid.get_offset((0, 0), (-1, 0)), None);
        assert_eq!(grid.get_offset((0, 0), (0, -1)), None);
        assert_eq!(grid.get_offset((1, 1), (0, 1)), None);
        assert_eq!(grid.get_offset((1, 1), (1, 0)), None);
        assert_eq!(grid.get((2, 0)), None);
    }
}
