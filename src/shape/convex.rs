use crate::bounding_volume::{details, Aabb};
use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{Shape, ShapeError};

/// A convex shape described by its support function.
///
/// The support function maps a direction to the point of the shape furthest along it. It is
/// the only geometric query convex-collision algorithms (GJK, EPA) need from a shape.
pub trait ConvexShape: Shape {
    /// The local point maximizing the dot product with `dir`, ignoring the margin.
    ///
    /// `dir` does not need to be normalized.
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The local point maximizing the dot product with `dir`, margin included.
    ///
    /// This is the margin-free support point pushed by `margin` along the normalized
    /// direction. A (near) zero direction is replaced by `(-1, -1, -1)`.
    fn local_supporting_vertex(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut sup = self.local_supporting_vertex_without_margin(dir);
        let margin = self.margin();

        if margin != 0.0 {
            sup += margin_direction(dir) * margin;
        }

        sup
    }

    /// Evaluates the margin-free support function for several unit directions at once.
    ///
    /// # Panics
    ///
    /// Panics if `dirs` and `out` have different lengths.
    fn batched_unit_vector_supporting_vertex_without_margin(
        &self,
        dirs: &[Vector<Real>],
        out: &mut [Point<Real>],
    ) {
        assert_eq!(
            dirs.len(),
            out.len(),
            "One output point is needed per direction."
        );

        for (dir, out) in dirs.iter().zip(out.iter_mut()) {
            *out = self.local_supporting_vertex_without_margin(dir);
        }
    }

    /// The world-space support point, margin included, of this shape placed at `pos`.
    fn supporting_vertex(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = pos.inverse_transform_vector(dir);
        pos * self.local_supporting_vertex(&local_dir)
    }

    /// The AABB of this shape placed at `pos`, computed from six support queries.
    ///
    /// This is exact for the margin-inclusive shape and serves as the reference for closed-form
    /// AABB computations.
    fn aabb_slow(&self, pos: &Isometry<Real>) -> Aabb {
        details::support_map_aabb(pos, self)
    }
}

/// The normalized direction along which a margin is applied, with the `(-1, -1, -1)` fallback for
/// degenerate directions.
#[inline]
pub(crate) fn margin_direction(dir: &Vector<Real>) -> Vector<Real> {
    if dir.norm_squared() < DEFAULT_EPSILON * DEFAULT_EPSILON {
        Vector::repeat(-1.0).normalize()
    } else {
        dir.normalize()
    }
}

/// A convex polyhedron with enumerable vertices, edges and face planes.
pub trait PolyhedralConvexShape: ConvexShape {
    /// The number of vertices.
    fn num_vertices(&self) -> usize;

    /// The `i`-th vertex, scaled, without margin.
    fn vertex(&self, i: usize) -> Point<Real>;

    /// The number of edges.
    fn num_edges(&self) -> usize;

    /// The endpoints of the `i`-th edge.
    fn edge(&self, i: usize) -> (Point<Real>, Point<Real>);

    /// The number of face planes.
    fn num_planes(&self) -> usize;

    /// The `i`-th face plane as an outward unit normal and a point on the plane.
    fn plane(&self, i: usize) -> (Vector<Real>, Point<Real>);

    /// Is `pt` inside of this polyhedron, up to the tolerance `tolerance`?
    fn is_inside(&self, pt: &Point<Real>, tolerance: Real) -> Result<bool, ShapeError>;
}
