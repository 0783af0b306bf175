use crate::algebra::*;
use log::{debug, trace};

/// Elementwise binary operation applied by the broadcast engine
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) enum ElementwiseOp {
    Add,
    Sub,
    Mul,
}

impl ElementwiseOp {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ElementwiseOp::Add => "add",
            ElementwiseOp::Sub => "sub",
            ElementwiseOp::Mul => "mul_each",
        }
    }

    #[inline]
    pub(crate) fn func<T: FloatT>(self) -> fn(T, T) -> T {
        match self {
            ElementwiseOp::Add => |a, b| a + b,
            ElementwiseOp::Sub => |a, b| a - b,
            ElementwiseOp::Mul => |a, b| a * b,
        }
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Computes `self[r, c] = op(self[r, c], mat[r', c'])` for every cell,
    /// where `(r', c')` follows the broadcast relation between the shapes.
    ///
    /// The shape check precedes all writes, so `self` is untouched on error.
    pub(crate) fn combine_assign(
        &mut self,
        mat: &Matrix<T>,
        op: ElementwiseOp,
    ) -> Result<&mut Self, MatrixError> {
        let broadcast = self.broadcast_with(mat, op.name())?;

        // an operand sharing our buffer would be read while we write it
        let snapshot;
        let mat = if self.shares_buffer_with(mat) {
            trace!("{}: operand aliases the target, taking a copy", op.name());
            snapshot = mat.clone();
            &snapshot
        } else {
            mat
        };

        let f = op.func::<T>();
        let (m, n) = self.size();
        let len = self.len();
        let (layout, mlayout) = (self.layout, mat.layout);
        let (mm, mn) = mat.size();

        let src = mat.buffer();
        let mut dst = self.buffer_mut();

        match broadcast {
            Broadcast::Exact if layout == mlayout => {
                for (x, y) in dst[..len].iter_mut().zip(&src[..len]) {
                    *x = f(*x, *y);
                }
            }
            Broadcast::Exact => {
                debug!("{}: mixed layouts, translating offsets per operand", op.name());
                for r in 0..m {
                    for c in 0..n {
                        let i = layout.offset(r, c, m, n);
                        dst[i] = f(dst[i], src[mlayout.offset(r, c, mm, mn)]);
                    }
                }
            }
            Broadcast::Column => {
                for r in 0..m {
                    let v = src[mlayout.offset(r, 0, mm, mn)];
                    for c in 0..n {
                        let i = layout.offset(r, c, m, n);
                        dst[i] = f(dst[i], v);
                    }
                }
            }
            Broadcast::Row => {
                for c in 0..n {
                    let v = src[mlayout.offset(0, c, mm, mn)];
                    for r in 0..m {
                        let i = layout.offset(r, c, m, n);
                        dst[i] = f(dst[i], v);
                    }
                }
            }
        }
        drop(dst);
        Ok(self)
    }
}
