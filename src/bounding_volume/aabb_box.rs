use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{BoxShape, Shape};
use crate::utils::IsometryOps;

impl BoxShape {
    /// Computes the world-space AABB of this box, transformed by `pos`.
    ///
    /// The inner box is rotated and the margin added afterwards, which is exact for the box
    /// rounded by its margin.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let ws_half_extents = pos.absolute_transform_vector(&self.half_extents_without_margin())
            + Vector::repeat(self.margin());

        Aabb::from_half_extents(center, ws_half_extents)
    }

    /// Computes the local-space AABB of this box.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.half_extents_with_margin());
        Aabb::new(-half_extents, half_extents)
    }
}
