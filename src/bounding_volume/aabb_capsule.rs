use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::CapsuleShape;

impl CapsuleShape {
    /// Computes the world-space AABB of this capsule, transformed by `pos`.
    ///
    /// Each world axis sees the projection of the segment joining the cap centers, plus the
    /// radius.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let axis = pos.rotation * Vector::ith(self.up_axis(), self.half_height());
        let half_extents = axis.abs() + Vector::repeat(self.radius());
        Aabb::from_half_extents(Point::from(pos.translation.vector), half_extents)
    }

    /// Computes the local-space AABB of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.aabb(&Isometry::identity())
    }
}
