use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{Shape, ShapeError};

/// Receives the triangles reported by a concave shape or a striding mesh.
pub trait TriangleCallback {
    /// Called once per reported triangle.
    ///
    /// `part_id` is the mesh sub-part the triangle belongs to and `triangle_index` its index
    /// inside of that sub-part. Both are `0` for triangles that do not come from a mesh.
    fn process_triangle(
        &mut self,
        triangle: &[Point<Real>; 3],
        part_id: usize,
        triangle_index: usize,
    );
}

impl<F> TriangleCallback for F
where
    F: FnMut(&[Point<Real>; 3], usize, usize),
{
    #[inline]
    fn process_triangle(
        &mut self,
        triangle: &[Point<Real>; 3],
        part_id: usize,
        triangle_index: usize,
    ) {
        self(triangle, part_id, triangle_index)
    }
}

/// A shape that is not convex and exposes its geometry as a set of triangles.
pub trait ConcaveShape: Shape {
    /// Calls `callback` on every triangle that may intersect `aabb`.
    ///
    /// Both `aabb` and the reported triangles are expressed in the local space of the shape.
    /// Triangles that do not intersect `aabb` may be reported too.
    fn process_all_triangles(
        &self,
        callback: &mut dyn TriangleCallback,
        aabb: &Aabb,
    ) -> Result<(), ShapeError>;
}
