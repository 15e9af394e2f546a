use crate::math::{Isometry, Matrix, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// The rotation part of `self` as a matrix with every entry replaced by its absolute value.
    fn absolute_rotation_matrix(&self) -> Matrix<Real>;

    /// Transform a vector by the absolute value of the homogeneous matrix
    /// equivalent to `self`.
    ///
    /// Applied to the half-extents of a box, this gives the half-extents of the
    /// world-space AABB enclosing that box once rotated.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_rotation_matrix(&self) -> Matrix<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs()
    }

    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.absolute_rotation_matrix() * *v
    }
}
