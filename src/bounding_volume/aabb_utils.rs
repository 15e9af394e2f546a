use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::ConvexShape;
use crate::utils::IsometryOps;
use arrayvec::ArrayVec;

/// Computes the AABB of a convex shape placed at `m` by querying its support function, margin
/// included, along the six signed world axes.
pub fn support_map_aabb<G>(m: &Isometry<Real>, shape: &G) -> Aabb
where
    G: ?Sized + ConvexShape,
{
    let mut dirs = ArrayVec::<Vector<Real>, { 2 * DIM }>::new();

    for d in 0..DIM {
        let mut basis = Vector::zeros();
        basis[d] = 1.0;
        // World axis expressed in the shape's local frame.
        let dir = m.inverse_transform_vector(&basis);
        dirs.push(dir);
        dirs.push(-dir);
    }

    let mut min = Vector::zeros();
    let mut max = Vector::zeros();

    for d in 0..DIM {
        max[d] = (m * shape.local_supporting_vertex(&dirs[2 * d]))[d];
        min[d] = (m * shape.local_supporting_vertex(&dirs[2 * d + 1]))[d];
    }

    Aabb::new(Point::from(min), Point::from(max))
}

/// Computes the AABB of a local box, enlarged by `margin`, once placed at `m`.
///
/// The box is rotated as a whole, which overestimates the bounds of whatever the local box
/// encloses.
pub fn transform_aabb(local: &Aabb, margin: Real, m: &Isometry<Real>) -> Aabb {
    let half_extents = local.half_extents() + Vector::repeat(margin);
    let center = m * local.center();
    Aabb::from_half_extents(center, m.absolute_transform_vector(&half_extents))
}

/// Computes the AABB of a set of points transformed by `m`.
///
/// Returns an invalid AABB if `pts` is empty.
pub fn point_cloud_aabb<'a, I>(m: &Isometry<Real>, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut result = Aabb::new_invalid();

    for pt in pts {
        result.take_point(m * pt);
    }

    result
}
