use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{CylinderShape, Shape};

impl CylinderShape {
    /// Computes the world-space AABB of this cylinder, transformed by `pos`.
    ///
    /// Along a world axis making the cosine `c` with the cylinder axis, the margin-free cylinder
    /// extends by `|c| * half_height + sqrt(1 - c²) * radius`. The margin is added on top.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        let he = self.half_extents_without_margin();
        let up = self.up_axis();
        let radius = self.inner_radius();
        let axis = pos.rotation * Vector::ith(up, 1.0);

        let half_extents = axis.map(|c| {
            let sin = (1.0 - c * c).max(0.0).sqrt();
            c.abs() * he[up] + sin * radius + self.margin()
        });

        Aabb::from_half_extents(Point::from(pos.translation.vector), half_extents)
    }

    /// Computes the local-space AABB of this cylinder.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.aabb(&Isometry::identity())
    }
}
