use crate::algebra::{FloatT, MatrixLayout, ShapedMatrix};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Dense matrix over a flat, possibly shared, buffer.
///
/// The buffer is reference counted so that [`alias`](Matrix::alias) and
/// [`transpose`](Matrix::transpose) can hand out new matrices over the same
/// data without copying.  Writes through any alias are visible through all
/// of them.  [`Clone`] always produces an independent deep copy.
///
/// The buffer may be longer than `rows * cols`; only the leading
/// `rows * cols` entries are addressed.
#[derive(Debug)]
pub struct Matrix<T = f32> {
    /// number of rows
    pub(crate) rows: usize,
    /// number of columns
    pub(crate) cols: usize,
    /// interpretation of the buffer
    pub(crate) layout: MatrixLayout,
    /// flat buffer, shared between aliases
    pub(crate) data: Rc<RefCell<Vec<T>>>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub(crate) fn from_parts(rows: usize, cols: usize, layout: MatrixLayout, data: Vec<T>) -> Self {
        debug_assert!(data.len() >= rows * cols);
        Self {
            rows,
            cols,
            layout,
            data: Rc::new(RefCell::new(data)),
        }
    }

    #[inline]
    pub(crate) fn buffer(&self) -> Ref<'_, Vec<T>> {
        self.data.borrow()
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> RefMut<'_, Vec<T>> {
        self.data.borrow_mut()
    }

    /// Buffer offset of `(row, col)`.  Callers are responsible for bounds.
    #[inline(always)]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        self.layout.offset(row, col, self.rows, self.cols)
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
    fn layout(&self) -> MatrixLayout {
        self.layout
    }
}
