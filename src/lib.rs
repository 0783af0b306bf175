//! __dualmat__ is a dense 2-D numeric buffer for Rust.  A [`Matrix`](crate::algebra::Matrix)
//! stores its entries in a flat buffer that is interpreted either in row-major
//! or in column-major order.
//!
//! ## Features
//!
//! * __Dual layout addressing__: every element-touching operation is correct
//!   regardless of the layout of either operand.
//!
//! * __Zero-copy transposition__: [`transpose`](crate::algebra::Matrix::transpose)
//!   returns an alias of the same buffer with the layout flipped and the
//!   dimensions swapped.  No data is moved.
//!
//! * __Broadcasting__: elementwise operations accept an operand of identical
//!   shape, a column vector with matching row count, or a row vector with
//!   matching column count.
//!
//! ```
//! use dualmat::algebra::*;
//!
//! let mut a = Matrix::<f32>::from(&[
//!     [1., 2., 3.],
//!     [4., 5., 6.],
//! ]);
//! let v = Matrix::from(&[[10.], [20.]]);
//! a.add(&v).unwrap();
//! assert_eq!(a.get(1, 2).unwrap(), 26.);
//!
//! let at = a.transpose();
//! assert_eq!(at.shape(), Shape { rows: 3, cols: 2 });
//! assert!(at.shares_buffer_with(&a));
//! ```
//!
//! # Thread safety
//!
//! Aliases produced by [`alias`](crate::algebra::Matrix::alias) and
//! [`transpose`](crate::algebra::Matrix::transpose) share a reference counted
//! buffer and are therefore neither `Send` nor `Sync`.  Independently owned
//! matrices may be used from one thread at a time.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
