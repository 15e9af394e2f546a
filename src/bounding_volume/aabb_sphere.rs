use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SphereShape;

impl SphereShape {
    /// Computes the world-space AABB of this sphere, transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        Aabb::from_half_extents(center, Vector::repeat(self.radius()))
    }

    /// Computes the local-space AABB of this sphere.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), Vector::repeat(self.radius()))
    }
}
