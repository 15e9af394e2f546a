use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// Ties are resolved in favor of the point appearing first. Returns `None` if
/// `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    let (first, rest) = points.split_first()?;
    let mut best_pt = 0;
    let mut best_dot = first.coords.dot(dir);

    for (i, p) in rest.iter().enumerate() {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i + 1;
        }
    }

    Some(best_pt)
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<Point<Real>> {
    point_cloud_support_point_id(dir, points).map(|i| points[i])
}

/// Computes the support point of a cloud of points once each of them is scaled
/// component-wise by `scaling`.
///
/// This avoids materializing the scaled cloud: `dot(p ∘ s, d) = dot(p, d ∘ s)`.
#[inline]
pub fn scaled_point_cloud_support_point(
    dir: &Vector<Real>,
    points: &[Point<Real>],
    scaling: &Vector<Real>,
) -> Option<Point<Real>> {
    let scaled_dir = dir.component_mul(scaling);
    point_cloud_support_point_id(&scaled_dir, points)
        .map(|i| Point::from(points[i].coords.component_mul(scaling)))
}
