use crate::algebra::{Broadcast, MatrixError, MatrixLayout, Shape};

/// Dimension and layout queries shared by all dense matrix types.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn layout(&self) -> MatrixLayout;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn shape(&self) -> Shape {
        Shape::from(self.size())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Classifies how `other` combines elementwise with `self`.
    ///
    /// An exact match takes precedence over the vector broadcasts, so a
    /// column vector combined with a column vector of the same length is
    /// [`Broadcast::Exact`].
    fn broadcast_with<M: ShapedMatrix>(
        &self,
        other: &M,
        op: &'static str,
    ) -> Result<Broadcast, MatrixError> {
        let (m, n) = self.size();
        match other.size() {
            (r, c) if r == m && c == n => Ok(Broadcast::Exact),
            (r, 1) if r == m => Ok(Broadcast::Column),
            (1, c) if c == n => Ok(Broadcast::Row),
            size => Err(MatrixError::shape_mismatch(op, (m, n), size)),
        }
    }

    /// Errors unless `other` has exactly the same dimensions as `self`.
    fn check_same_size<M: ShapedMatrix>(&self, other: &M, op: &'static str) -> Result<(), MatrixError> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(MatrixError::shape_mismatch(op, self.size(), other.size()))
        }
    }
}
