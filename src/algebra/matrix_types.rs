#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical layout of a matrix buffer
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixLayout {
    /// Consecutive buffer positions run along a row
    #[default]
    RowMajor,
    /// Consecutive buffer positions run down a column
    ColumnMajor,
}

impl MatrixLayout {
    /// The layout obtained by transposition.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            MatrixLayout::RowMajor => MatrixLayout::ColumnMajor,
            MatrixLayout::ColumnMajor => MatrixLayout::RowMajor,
        }
    }

    /// Buffer offset of element `(row, col)` in a `rows` x `cols` matrix.
    ///
    /// No bounds checking is performed.
    #[inline(always)]
    pub fn offset(self, row: usize, col: usize, rows: usize, cols: usize) -> usize {
        match self {
            MatrixLayout::RowMajor => row * cols + col,
            MatrixLayout::ColumnMajor => col * rows + row,
        }
    }
}

/// Logical matrix dimensions
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    /// number of rows
    pub rows: usize,
    /// number of columns
    pub cols: usize,
}

impl From<(usize, usize)> for Shape {
    fn from(size: (usize, usize)) -> Self {
        Shape {
            rows: size.0,
            cols: size.1,
        }
    }
}

/// Ownership state of a matrix buffer
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Ownership {
    /// No other matrix refers to the buffer
    Exclusive,
    /// At least one alias refers to the same buffer
    Shared,
}

/// Relationship between the shapes of the two operands of an
/// elementwise operation
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Broadcast {
    /// Identical shapes
    Exact,
    /// Operand is a column vector with one entry per row
    Column,
    /// Operand is a row vector with one entry per column
    Row,
}
