#![allow(non_snake_case)]

use dualmat::algebra::*;

// the 3x4 matrix
//[ 1.0   2.0   3.0   4.0]
//[ 5.0   6.0   7.0   8.0]
//[ 9.0  10.0  11.0  12.0]
// in both layouts
fn test_matrix_3x4(layout: MatrixLayout) -> Matrix<f32> {
    let mut A = Matrix::with_layout(3, 4, layout).unwrap();
    A.set_each_cell(|r, c| (4 * r + c + 1) as f32);
    A
}

fn layouts() -> [MatrixLayout; 2] {
    [MatrixLayout::RowMajor, MatrixLayout::ColumnMajor]
}

#[test]
fn test_layout_transparency() {
    let expected = Matrix::from(&[
        [2., 4., 6., 8.],
        [10., 12., 14., 16.],
        [18., 20., 22., 24.],
    ]);

    for la in layouts() {
        for lb in layouts() {
            let mut A = test_matrix_3x4(la);
            let B = test_matrix_3x4(lb);
            A.add(&B).unwrap();
            assert_eq!(A.layout(), la);
            assert!(A.nearly_equals(&expected).unwrap());

            let mut A = test_matrix_3x4(la);
            A.sub(&B).unwrap();
            assert_eq!(A.sum(), 0.);

            let mut A = test_matrix_3x4(la);
            A.mul_each(&B).unwrap();
            assert_eq!(A.get(2, 3).unwrap(), 144.);
            assert_eq!(A.get(1, 0).unwrap(), 25.);
        }
    }
}

#[test]
fn test_column_vector_broadcast() {
    let V = Matrix::<f32>::from(&[[1.], [2.], [3.]]);
    for la in layouts() {
        for lv in layouts() {
            let mut A = test_matrix_3x4(la);
            let mut Vl = Matrix::<f32>::with_layout(3, 1, lv).unwrap();
            Vl.set_each_cell(|r, c| V.get(r, c).unwrap());

            A.add(&Vl).unwrap();
            for (r, c) in A.cells() {
                let orig = (4 * r + c + 1) as f32;
                assert_eq!(A.get(r, c).unwrap(), orig + (r + 1) as f32);
            }
        }
    }
}

#[test]
fn test_row_vector_broadcast() {
    let W = Matrix::from(&[[10., 20., 30., 40.]]);
    for la in layouts() {
        let mut A = test_matrix_3x4(la);
        A.add(&W).unwrap();
        for (r, c) in A.cells() {
            let orig = (4 * r + c + 1) as f32;
            assert_eq!(A.get(r, c).unwrap(), orig + (10 * (c + 1)) as f32);
        }

        // a transposed column vector acts as a row vector
        let mut A = test_matrix_3x4(la);
        let Wt = Matrix::from(&[[10.], [20.], [30.], [40.]]).transpose();
        A.sub(&Wt).unwrap();
        assert_eq!(A.sum_each_col().to_vec(), vec![-15., -42., -69., -96.]);
    }
}

#[test]
fn test_broadcast_mul_each() {
    let mut A = test_matrix_3x4(MatrixLayout::ColumnMajor);
    let V = Matrix::from(&[[1.], [0.], [-1.]]);
    A.mul_each(&V).unwrap();
    assert_eq!(A.sum_each_row().to_vec(), vec![10., 0., -42.]);
}

#[test]
fn test_shape_mismatch_rejection() {
    let bad = [
        Matrix::<f32>::new(4, 3).unwrap(),
        Matrix::new(3, 3).unwrap(),
        Matrix::new(2, 1).unwrap(),
        Matrix::new(1, 3).unwrap(),
        Matrix::new(3, 2).unwrap(),
        Matrix::new(1, 1).unwrap(),
    ];

    for la in layouts() {
        let mut A = test_matrix_3x4(la);
        for B in bad.iter() {
            let err = A.add(B).unwrap_err();
            assert_eq!(
                err,
                MatrixError::ShapeMismatch {
                    op: "add",
                    lhs: (3, 4),
                    rhs: B.size()
                }
            );
            assert!(A.sub(B).is_err());
            assert!(A.mul_each(B).is_err());
            assert_eq!(A, test_matrix_3x4(la));
        }
    }
}

#[test]
fn test_non_mutating_forms() {
    let A = test_matrix_3x4(MatrixLayout::RowMajor);
    let B = test_matrix_3x4(MatrixLayout::ColumnMajor);
    let V = Matrix::from(&[[1.], [2.], [3.]]);

    let C = Matrix::add_of(&A, &B).unwrap();
    assert_eq!(C.get(2, 3).unwrap(), 24.);
    assert!(!C.shares_buffer_with(&A));
    assert_eq!(A, test_matrix_3x4(MatrixLayout::RowMajor));
    assert_eq!(B, test_matrix_3x4(MatrixLayout::RowMajor));

    let D = Matrix::sub_of(&B, &V).unwrap();
    assert_eq!(D.layout(), MatrixLayout::ColumnMajor);
    assert_eq!(D.get(2, 0).unwrap(), 6.);
    assert_eq!(V.to_vec(), vec![1., 2., 3.]);

    let E = Matrix::mul_each_of(&A, &A).unwrap();
    assert_eq!(E.get(0, 1).unwrap(), 4.);
    assert_eq!(A.get(0, 1).unwrap(), 2.);

    assert!(Matrix::add_of(&A, &A.transpose()).is_err());

    // the in-place form mutates only its receiver
    let mut A2 = A.clone();
    A2.add(&B).unwrap();
    assert_eq!(A2, C);
    assert_eq!(B, test_matrix_3x4(MatrixLayout::RowMajor));
}

#[test]
fn test_chaining_and_scale() {
    let mut A = test_matrix_3x4(MatrixLayout::RowMajor);
    let B = test_matrix_3x4(MatrixLayout::ColumnMajor);
    A.add(&B)
        .unwrap()
        .sub(&B)
        .unwrap()
        .scale(0.5)
        .map(|x| x + 1.);
    assert_eq!(A.get(2, 3).unwrap(), 7.);
    assert_eq!(A.get(0, 0).unwrap(), 1.5);
}
