#![allow(non_snake_case)]

use dualmat::algebra::*;

fn test_matrix_2x3() -> Matrix<f32> {
    Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ])
}

#[test]
fn test_transpose_involution() {
    for A in [test_matrix_2x3(), test_matrix_2x3().transpose()] {
        let Att = A.transpose().transpose();
        assert_eq!(Att.shape(), A.shape());
        assert_eq!(Att.layout(), A.layout());
        assert!(Att.equals(&A).unwrap());
        assert!(Att.shares_buffer_with(&A));
    }
}

#[test]
fn test_transpose_is_zero_copy() {
    let A = test_matrix_2x3();
    let At = A.transpose();
    assert_eq!(A.ownership(), Ownership::Shared);
    assert_eq!(At.to_vec(), vec![1., 4., 2., 5., 3., 6.]);

    // clones break the sharing
    let B = At.clone();
    assert!(!B.shares_buffer_with(&A));
    assert_eq!(B.layout(), MatrixLayout::ColumnMajor);
    assert_eq!(B, At);
}

#[test]
fn test_alias_mutation_visibility() {
    let A = test_matrix_2x3();

    let mut B = A.alias();
    B.set(1, 2, -6.).unwrap();
    assert_eq!(A.get(1, 2).unwrap(), -6.);

    let mut At = A.transpose();
    At.set(2, 0, 30.).unwrap();
    assert_eq!(A.get(0, 2).unwrap(), 30.);
    assert_eq!(B.get(0, 2).unwrap(), 30.);

    // bulk operations through an alias are visible as well
    At.scale(2.);
    assert_eq!(A.to_vec(), vec![2., 4., 60., 8., 10., -12.]);

    let ones = Matrix::from(&[[1., 1.]]);
    At.add(&ones).unwrap();
    assert_eq!(A.get(1, 0).unwrap(), 9.);
}

#[test]
fn test_reshape_does_not_affect_aliases() {
    let A = test_matrix_2x3();
    let mut B = A.alias();
    B.reshape(3, 2).unwrap();

    assert_eq!(A.size(), (2, 3));
    assert_eq!(B.size(), (3, 2));
    assert_eq!(B.to_vec(), vec![1., 2., 3., 4., 5., 6.]);

    assert!(B.reshape(4, 2).is_err());
    assert_eq!(B.size(), (3, 2));
}

#[test]
fn test_operations_with_self_aliases() {
    // A += A'
    let mut A = Matrix::<f32>::from(&[[1., 2.], [3., 4.]]);
    let At = A.transpose();
    A.add(&At).unwrap();
    assert_eq!(A.to_vec(), vec![2., 5., 5., 8.]);

    // A -= A
    let mut A = test_matrix_2x3();
    let B = A.alias();
    A.sub(&B).unwrap();
    assert_eq!(A.sum(), 0.);
    assert_eq!(B.sum(), 0.);

    // A .*= A
    let mut A = test_matrix_2x3();
    let B = A.alias();
    A.mul_each(&B).unwrap();
    assert_eq!(B.to_vec(), vec![1., 4., 9., 16., 25., 36.]);

    // comparisons and products read aliases without conflict
    let A = test_matrix_2x3();
    assert!(A.equals(&A.alias()).unwrap());
    assert_eq!(A.dot(&A.transpose().transpose()).unwrap(), 91.);
    let G = A.mul(&A.transpose()).unwrap();
    assert_eq!(G.to_vec(), vec![14., 32., 32., 77.]);
}
