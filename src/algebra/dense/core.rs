use crate::algebra::*;
use itertools::iproduct;
use std::rc::Rc;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Zero filled `rows` x `cols` matrix in row-major layout.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::with_layout(rows, cols, MatrixLayout::RowMajor)
    }

    /// Zero filled `rows` x `cols` matrix in the given layout.
    pub fn with_layout(rows: usize, cols: usize, layout: MatrixLayout) -> Result<Self, MatrixError> {
        let len = check_dims(rows, cols)?;
        Ok(Self::from_parts(rows, cols, layout, vec![T::zero(); len]))
    }

    /// Row-major matrix over an existing buffer.  The buffer must hold at
    /// least `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Self::from_vec_with_layout(rows, cols, data, MatrixLayout::RowMajor)
    }

    pub fn from_vec_with_layout(
        rows: usize,
        cols: usize,
        data: Vec<T>,
        layout: MatrixLayout,
    ) -> Result<Self, MatrixError> {
        let len = check_dims(rows, cols)?;
        if data.len() < len {
            return Err(MatrixError::InvalidConstruction(
                "buffer is shorter than rows * cols",
            ));
        }
        Ok(Self::from_parts(rows, cols, layout, data))
    }

    /// Row-major matrix from a sequence of equal length rows.
    ///
    /// ```
    /// use dualmat::algebra::*;
    /// let a = Matrix::<f32>::from_rows(&[vec![1., 2.], vec![3., 4.]]).unwrap();
    /// assert_eq!(a.get(1, 0).unwrap(), 3.);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let data = flatten_rows(rows)?;
        let ncols = rows[0].as_ref().len();
        Ok(Self::from_parts(rows.len(), ncols, MatrixLayout::RowMajor, data))
    }

    /// Matrix whose `i`th column is taken from the `i`th column vector.
    ///
    /// All vectors must be `n` x 1 for a common `n`.  The result is row-major.
    pub fn from_col_vectors(vectors: &[Matrix<T>]) -> Result<Self, MatrixError> {
        let first = vectors
            .first()
            .ok_or(MatrixError::InvalidConstruction("no column vectors given"))?;
        if vectors.iter().any(|v| v.cols != 1) {
            return Err(MatrixError::InvalidConstruction("vectors must be column vectors"));
        }
        if vectors.iter().any(|v| v.rows != first.rows) {
            return Err(MatrixError::InvalidConstruction(
                "column vectors must have equal length",
            ));
        }
        let mut mat = Self::new(first.rows, vectors.len())?;
        for (col, v) in vectors.iter().enumerate() {
            for row in 0..first.rows {
                mat.set(row, col, v.get(row, 0)?)?;
            }
        }
        Ok(mat)
    }

    /// Replaces the buffer with the flattened `rows`.  The new buffer is
    /// row-major and exclusively owned; former aliases keep the old buffer.
    pub fn set_array<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<&mut Self, MatrixError> {
        let data = flatten_rows(rows)?;
        let size = (rows.len(), rows[0].as_ref().len());
        if size != self.size() {
            return Err(MatrixError::shape_mismatch("set_array", self.size(), size));
        }
        self.layout = MatrixLayout::RowMajor;
        self.data = Rc::new(data.into());
        Ok(self)
    }

    /// number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// number of addressable elements, `rows * cols`
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ---------------------------------------------
    // element addressing
    // ---------------------------------------------

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.buffer()[self.offset(row, col)])
    }

    /// Writes `value` at `(row, col)`.  The write is visible through every
    /// alias of this matrix.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<&mut Self, MatrixError> {
        self.check_index(row, col)?;
        let idx = self.offset(row, col);
        self.buffer_mut()[idx] = value;
        Ok(self)
    }

    /// Applies `f` to every element, in buffer order.
    pub fn map(&mut self, f: impl Fn(T) -> T) -> &mut Self {
        for i in 0..self.len() {
            // NB: `f` may read through an alias, so no borrow is held across the call
            let value = f(self.buffer()[i]);
            self.buffer_mut()[i] = value;
        }
        self
    }

    /// Logical `(row, col)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
    }

    /// Calls `f(row, col, value)` for every cell in row-major order.
    pub fn for_each_cell(&self, mut f: impl FnMut(usize, usize, T)) -> &Self {
        for (row, col) in self.cells() {
            let value = self.buffer()[self.offset(row, col)];
            f(row, col, value);
        }
        self
    }

    /// Assigns `f(row, col)` to every cell in row-major order.
    pub fn set_each_cell(&mut self, mut f: impl FnMut(usize, usize) -> T) -> &mut Self {
        for (row, col) in self.cells() {
            // NB: `f` may read through an alias, so no borrow is held across the call
            let value = f(row, col);
            let idx = self.offset(row, col);
            self.buffer_mut()[idx] = value;
        }
        self
    }

    /// Copy of the contents in logical row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        let data = self.buffer();
        self.cells().map(|(r, c)| data[self.offset(r, c)]).collect()
    }

    // ---------------------------------------------
    // initializers
    // ---------------------------------------------

    pub fn zeros(&mut self) -> &mut Self {
        let len = self.len();
        self.buffer_mut()[..len].fill(T::zero());
        self
    }

    /// Sets buffer position `i` to the value `i`.
    pub fn range(&mut self) -> &mut Self {
        let len = self.len();
        for (i, x) in self.buffer_mut()[..len].iter_mut().enumerate() {
            *x = i.as_T();
        }
        self
    }

    // ---------------------------------------------
    // aliasing and shape
    // ---------------------------------------------

    /// Shallow copy sharing this matrix's buffer, shape and layout.
    pub fn alias(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            layout: self.layout,
            data: Rc::clone(&self.data),
        }
    }

    pub fn ownership(&self) -> Ownership {
        if Rc::strong_count(&self.data) == 1 {
            Ownership::Exclusive
        } else {
            Ownership::Shared
        }
    }

    /// True if both matrices address the same buffer.
    pub fn shares_buffer_with(&self, other: &Matrix<T>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Transposed alias.  Swaps the dimensions and flips the layout over
    /// the same buffer; no data is moved.
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            layout: self.layout.flip(),
            data: Rc::clone(&self.data),
        }
    }

    /// Changes the dimensions in place, keeping buffer and layout.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<&mut Self, MatrixError> {
        if rows.checked_mul(cols) != Some(self.len()) {
            return Err(MatrixError::InvalidReshape {
                rows: self.rows,
                cols: self.cols,
                new_rows: rows,
                new_cols: cols,
            });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(self)
    }
}

/// Deep copy into a new, exclusively owned buffer with the same layout.
impl<T> Clone for Matrix<T>
where
    T: FloatT,
{
    fn clone(&self) -> Self {
        Self::from_parts(self.rows, self.cols, self.layout, self.buffer().clone())
    }
}

/// Row-major matrix from a nested array literal.  Arrays with a zero
/// dimension are rejected at compile time.
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = NonEmptyArray::<M, N>::OK;
        let data = rows.iter().flatten().copied().collect();
        Self::from_parts(M, N, MatrixLayout::RowMajor, data)
    }
}

struct NonEmptyArray<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> NonEmptyArray<M, N> {
    const OK: () = assert!(M > 0 && N > 0, "matrix dimensions must be positive");
}

// number of elements in a `rows` x `cols` matrix
fn check_dims(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidConstruction(
            "matrix dimensions must be positive",
        ));
    }
    rows.checked_mul(cols)
        .ok_or(MatrixError::InvalidConstruction("rows * cols overflows"))
}

fn flatten_rows<T: FloatT, R: AsRef<[T]>>(rows: &[R]) -> Result<Vec<T>, MatrixError> {
    let ncols = rows
        .first()
        .map(|r| r.as_ref().len())
        .ok_or(MatrixError::InvalidConstruction("no rows given"))?;
    check_dims(rows.len(), ncols)?;
    if rows.iter().any(|r| r.as_ref().len() != ncols) {
        return Err(MatrixError::InvalidConstruction("rows must have equal length"));
    }
    Ok(rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect())
}
