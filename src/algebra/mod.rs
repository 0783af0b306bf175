//! Dense matrix types and the operations defined on them.
//!
//! All element access goes through the row/column addressing implemented
//! on [`Matrix`].  Elementwise arithmetic, equality and products are built
//! on top of that addressing, with fast paths over the flat buffer where the
//! layouts of both operands agree.

mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
mod settings;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use settings::*;

mod dense;
pub use dense::*;
