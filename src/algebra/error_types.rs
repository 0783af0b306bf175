use thiserror::Error;

/// Error type returned by matrix construction, addressing and arithmetic.
///
/// Every failing operation reports its error before touching any matrix
/// data, so a returned error always leaves the receiver unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Element index lies outside the matrix dimensions
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes are incompatible for the requested operation
    #[error("shape mismatch in {op}: {}x{} vs {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Requested reshape does not preserve the number of elements
    #[error("cannot reshape a {rows}x{cols} matrix to {new_rows}x{new_cols}")]
    InvalidReshape {
        rows: usize,
        cols: usize,
        new_rows: usize,
        new_cols: usize,
    },
    /// Construction inputs are malformed
    #[error("invalid construction: {0}")]
    InvalidConstruction(&'static str),
}

impl MatrixError {
    pub(crate) fn shape_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        MatrixError::ShapeMismatch { op, lhs, rhs }
    }
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
