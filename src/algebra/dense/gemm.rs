#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Matrix product `mat1 * mat2` into a new row-major matrix.
    ///
    /// Requires `mat1.cols() == mat2.rows()`.  Results do not depend on the
    /// layouts of the operands.
    pub fn multiply(mat1: &Matrix<T>, mat2: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if mat1.cols != mat2.rows {
            return Err(MatrixError::shape_mismatch(
                "multiply",
                mat1.size(),
                mat2.size(),
            ));
        }
        let (m, k, n) = (mat1.rows, mat1.cols, mat2.cols);
        let mut C = vec![T::zero(); m * n];

        {
            let A = mat1.buffer();
            let B = mat2.buffer();

            if mat1.layout == MatrixLayout::RowMajor && mat2.layout == MatrixLayout::RowMajor {
                // contiguous rows of A, B and C: i-k-j order
                for (i, Crow) in C.chunks_exact_mut(n).enumerate() {
                    for (p, &Aip) in A[i * k..(i + 1) * k].iter().enumerate() {
                        for (Cij, &Bpj) in Crow.iter_mut().zip(&B[p * n..(p + 1) * n]) {
                            *Cij += Aip * Bpj;
                        }
                    }
                }
            } else {
                for i in 0..m {
                    for j in 0..n {
                        let mut tmp = T::zero();
                        for p in 0..k {
                            tmp += A[mat1.offset(i, p)] * B[mat2.offset(p, j)];
                        }
                        C[i * n + j] = tmp;
                    }
                }
            }
        }

        Ok(Matrix::from_parts(m, n, MatrixLayout::RowMajor, C))
    }

    /// Method form of [`multiply`](Matrix::multiply), computing `self * mat`.
    pub fn mul(&self, mat: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Matrix::multiply(self, mat)
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = vec![
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
    ];

    let A = Matrix::<f64>::from_vec(m, k, a).unwrap();
    let B = Matrix::<f64>::from_vec(k, n, b).unwrap();
    let C = Matrix::multiply(&A, &B).unwrap();
    assert_eq!(C.size(), (2, 4));
    assert_eq!(C.to_vec(), vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);

    // same product from column major storage of A
    let At = Matrix::<f64>::from_vec(k, m, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
    let C2 = At.transpose().mul(&B).unwrap();
    assert_eq!(C2, C);

    // transposed multiply
    let Ct = Matrix::multiply(&B.transpose(), &A.transpose()).unwrap();
    assert_eq!(Ct, C.transpose());

    assert!(matches!(
        Matrix::multiply(&A, &A),
        Err(MatrixError::ShapeMismatch { op: "multiply", .. })
    ));
}
