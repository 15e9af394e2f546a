//! Bounding sphere.

use crate::math::{Point, Real};

/// A sphere enclosing a shape, used to bound its motion under rotation.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The distance from the local origin to the farthest point of this sphere.
    ///
    /// This bounds every point the enclosed shape can reach while rotating about its origin.
    #[inline]
    pub fn swept_radius(&self) -> Real {
        self.center.coords.norm() + self.radius
    }

    /// Does this sphere contain `point`, boundary included?
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }
}
