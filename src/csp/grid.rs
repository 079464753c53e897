#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The puzzle's cell layout.
//!
//! A [`Grid`] is a rectangular boolean matrix marking which cells are
//! fillable and which are blocked. It is built once from caller-supplied
//! rows and never mutated. From it the set of word-slot variables is
//! derived: every maximal run of two or more consecutive fillable cells,
//! read across each row and then down each column.

use crate::csp::variable::{Direction, Variable};
use bit_vec::BitVec;
use thiserror::Error;

/// Errors raised when constructing a [`Grid`] from malformed input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The structure had no rows, or rows with no cells.
    #[error("grid structure has no cells")]
    EmptyStructure,

    /// A row's cell count disagreed with the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        found: usize,
        /// Number of cells in the first row.
        expected: usize,
    },
}

/// A rectangular fillable/blocked cell matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: BitVec,
}

impl Grid {
    /// Builds a grid from rows of booleans, `true` marking a fillable cell.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyStructure`] if there are no rows or the rows are
    /// empty, [`GridError::RaggedRow`] if any row's length disagrees with
    /// the first row's.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        if height == 0 || width == 0 {
            return Err(GridError::EmptyStructure);
        }

        let mut cells = BitVec::from_elem(height * width, false);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: i,
                    found: row.len(),
                    expected: width,
                });
            }
            for (j, &fillable) in row.iter().enumerate() {
                if fillable {
                    cells.set(i * width + j, true);
                }
            }
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` participates in the puzzle.
    /// Out-of-bounds cells are not fillable.
    #[must_use]
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height
            && col < self.width
            && self.cells.get(row * self.width + col).unwrap_or(false)
    }

    /// Derives every word-slot variable: each maximal horizontal or
    /// vertical run of two or more consecutive fillable cells.
    ///
    /// The order is deterministic: across slots in row-major order, then
    /// down slots in column-major order.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();

        for row in 0..self.height {
            let mut col = 0;
            while col < self.width {
                let start = col;
                while self.is_fillable(row, col) {
                    col += 1;
                }
                let run = col - start;
                if run >= 2 {
                    variables.push(Variable::new(row, start, Direction::Across, run));
                }
                col += 1;
            }
        }

        for col in 0..self.width {
            let mut row = 0;
            while row < self.height {
                let start = row;
                while self.is_fillable(row, col) {
                    row += 1;
                }
                let run = row - start;
                if run >= 2 {
                    variables.push(Variable::new(start, col, Direction::Down, run));
                }
                row += 1;
            }
        }

        variables
    }

    /// Builds a grid from a textual pattern, `'#'` marking blocked cells
    /// and anything else fillable. Test convenience only.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &[&str]) -> Self {
        let rows: Vec<Vec<bool>> = pattern
            .iter()
            .map(|line| line.chars().map(|c| c != '#').collect())
            .collect();
        Self::from_rows(&rows).expect("test pattern must be rectangular")
    }
}
