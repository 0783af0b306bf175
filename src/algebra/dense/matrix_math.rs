use super::broadcast::ElementwiseOp;
use crate::algebra::*;
use log::debug;

impl<T> Matrix<T>
where
    T: FloatT,
{
    // ---------------------------------------------
    // in-place elementwise operators
    // ---------------------------------------------

    /// `self += mat`, with `mat` of equal shape, a column vector with
    /// `self.rows()` entries or a row vector with `self.cols()` entries.
    pub fn add(&mut self, mat: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        self.combine_assign(mat, ElementwiseOp::Add)
    }

    /// `self -= mat`, broadcasting as in [`add`](Matrix::add).
    pub fn sub(&mut self, mat: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        self.combine_assign(mat, ElementwiseOp::Sub)
    }

    /// Elementwise `self *= mat`, broadcasting as in [`add`](Matrix::add).
    pub fn mul_each(&mut self, mat: &Matrix<T>) -> Result<&mut Self, MatrixError> {
        self.combine_assign(mat, ElementwiseOp::Mul)
    }

    /// Scales every element by `c`.
    pub fn scale(&mut self, c: T) -> &mut Self {
        self.map(|x| x * c)
    }

    // ---------------------------------------------
    // non-mutating forms
    // ---------------------------------------------

    /// `mat1 + mat2` into a new matrix with the layout of `mat1`.
    pub fn add_of(mat1: &Matrix<T>, mat2: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let mut out = mat1.clone();
        out.add(mat2)?;
        Ok(out)
    }

    pub fn sub_of(mat1: &Matrix<T>, mat2: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let mut out = mat1.clone();
        out.sub(mat2)?;
        Ok(out)
    }

    pub fn mul_each_of(mat1: &Matrix<T>, mat2: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let mut out = mat1.clone();
        out.mul_each(mat2)?;
        Ok(out)
    }

    // ---------------------------------------------
    // reductions and comparison
    // ---------------------------------------------

    /// Sum of the elementwise product.  Shapes must match exactly.
    pub fn dot(&self, mat: &Matrix<T>) -> Result<T, MatrixError> {
        self.check_same_size(mat, "dot")?;
        let (a, b) = (self.buffer(), mat.buffer());
        if self.layout == mat.layout {
            let len = self.len();
            Ok(a[..len].iter().zip(&b[..len]).map(|(&x, &y)| x * y).sum())
        } else {
            Ok(self
                .cells()
                .map(|(r, c)| a[self.offset(r, c)] * b[mat.offset(r, c)])
                .sum())
        }
    }

    pub fn dot_of(mat1: &Matrix<T>, mat2: &Matrix<T>) -> Result<T, MatrixError> {
        mat1.dot(mat2)
    }

    /// Exact elementwise equality.  Shapes must match exactly.
    pub fn equals(&self, mat: &Matrix<T>) -> Result<bool, MatrixError> {
        self.all_pairs(mat, "equals", |a, b| a == b)
    }

    /// Approximate equality with the default tolerance of `0.01`.
    pub fn nearly_equals(&self, mat: &Matrix<T>) -> Result<bool, MatrixError> {
        self.nearly_equals_with(mat, &ComparisonSettings::default())
    }

    /// Approximate equality, accepting `|a - b| < tolerance`.
    pub fn nearly_equals_tol(&self, mat: &Matrix<T>, tolerance: T) -> Result<bool, MatrixError> {
        self.all_pairs(mat, "nearly_equals", |a, b| (a - b).abs() < tolerance)
    }

    pub fn nearly_equals_with(
        &self,
        mat: &Matrix<T>,
        settings: &ComparisonSettings<T>,
    ) -> Result<bool, MatrixError> {
        self.nearly_equals_tol(mat, settings.tolerance)
    }

    // true if `pred` holds for all logically corresponding pairs
    fn all_pairs(
        &self,
        mat: &Matrix<T>,
        op: &'static str,
        pred: impl Fn(T, T) -> bool,
    ) -> Result<bool, MatrixError> {
        self.check_same_size(mat, op)?;
        let (a, b) = (self.buffer(), mat.buffer());
        if self.layout == mat.layout {
            let len = self.len();
            Ok(a[..len].iter().zip(&b[..len]).all(|(&x, &y)| pred(x, y)))
        } else {
            debug!("{}: mixed layouts, comparing in logical order", op);
            Ok(self
                .cells()
                .all(|(r, c)| pred(a[self.offset(r, c)], b[mat.offset(r, c)])))
        }
    }
}

/// Exact logical equality.  Matrices of different shape are unequal.
impl<T> PartialEq for Matrix<T>
where
    T: FloatT,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

#[test]
fn test_dot_mixed_layouts() {
    let a = Matrix::<f64>::from(&[[1., 2., 3.], [4., 5., 6.]]);
    let b = Matrix::from(&[[1., 4.], [2., 5.], [3., 6.]]).transpose();
    assert_eq!(b.layout(), MatrixLayout::ColumnMajor);
    assert_eq!(a.dot(&b).unwrap(), 91.);
    assert_eq!(Matrix::dot_of(&a, &a).unwrap(), 91.);
    assert!(matches!(
        a.dot(&a.transpose()),
        Err(MatrixError::ShapeMismatch { op: "dot", .. })
    ));
}

#[test]
fn test_scale() {
    let mut a = Matrix::<f64>::from(&[[1., -2.], [3., 0.5]]);
    a.scale(2.);
    assert_eq!(a.to_vec(), vec![2., -4., 6., 1.]);
}

#[test]
fn test_partial_eq() {
    let a = Matrix::<f64>::from(&[[1., 2.], [3., 4.]]);
    let b = Matrix::from_vec_with_layout(2, 2, vec![1., 3., 2., 4.], MatrixLayout::ColumnMajor)
        .unwrap();
    assert_eq!(a, b);
    assert_ne!(a, a.transpose());
    assert_ne!(a, Matrix::from(&[[1., 2.]]));
}
