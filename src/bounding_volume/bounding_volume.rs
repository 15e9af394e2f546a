use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes with constant-time intersection and
/// inclusion tests. Two bounding volumes can be merged into a bigger one.
pub trait BoundingVolume {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Checks if this bounding volume intersects another one.
    fn intersects(&self, other: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, other: &Self) -> bool;

    /// Merges this bounding volume with another one, in-place.
    fn merge(&mut self, other: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, other: &Self) -> Self;

    /// A copy of this bounding volume enlarged by `amount` in every direction.
    fn loosened(&self, amount: Real) -> Self;
}
