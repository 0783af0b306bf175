#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let len = self.len();
        self.buffer()[..len].iter().copied().sum()
    }

    /// Column vector of row sums.
    pub fn sum_each_row(&self) -> Matrix<T> {
        let data = self.buffer();
        let sums: Vec<T> = (0..self.rows)
            .map(|r| (0..self.cols).map(|c| data[self.offset(r, c)]).sum())
            .collect();
        Matrix::from_parts(self.rows, 1, MatrixLayout::RowMajor, sums)
    }

    /// Row vector of column sums.
    pub fn sum_each_col(&self) -> Matrix<T> {
        let data = self.buffer();
        let sums: Vec<T> = (0..self.cols)
            .map(|c| (0..self.rows).map(|r| data[self.offset(r, c)]).sum())
            .collect();
        Matrix::from_parts(1, self.cols, MatrixLayout::RowMajor, sums)
    }

    /// Position of the first maximal element in row-major order.
    pub fn argmax(&self) -> (usize, usize) {
        let data = self.buffer();
        let mut best = (0, 0);
        let mut max = data[self.offset(0, 0)];
        for (r, c) in self.cells() {
            let v = data[self.offset(r, c)];
            if v > max {
                max = v;
                best = (r, c);
            }
        }
        best
    }
}

#[test]
fn test_sums() {
    #[rustfmt::skip]
    let A = Matrix::<f64>::from(&[
        [ 1.,  2.,  3.],
        [-4.,  5.,  6.],
    ]);
    assert_eq!(A.sum(), 13.);
    assert_eq!(A.sum_each_row().to_vec(), vec![6., 7.]);
    assert_eq!(A.sum_each_row().size(), (2, 1));
    assert_eq!(A.sum_each_col().to_vec(), vec![-3., 7., 9.]);
    assert_eq!(A.sum_each_col().size(), (1, 3));

    // sums follow the logical layout of a transposed alias
    let At = A.transpose();
    assert_eq!(At.sum_each_row().to_vec(), vec![-3., 7., 9.]);
    assert_eq!(At.sum_each_col().to_vec(), vec![6., 7.]);
}

#[test]
fn test_argmax() {
    let A = Matrix::<f64>::from(&[[1., 9., 3.], [9., 5., 6.]]);
    assert_eq!(A.argmax(), (0, 1));
    assert_eq!(A.transpose().argmax(), (0, 1));

    let B = Matrix::<f64>::from(&[[1., 2.], [3., 4.]]).transpose();
    assert_eq!(B.argmax(), (1, 1));
}
