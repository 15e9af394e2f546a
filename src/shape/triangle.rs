//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConvexShape, PolyhedralConvexShape, Shape, ShapeError, ShapeType};
use crate::utils;

/// A triangle shape.
///
/// The vertices are stored unscaled; the local scaling is applied on each query.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleShape {
    vertices: [Point<Real>; 3],
    data: ConvexInternal,
}

impl TriangleShape {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> TriangleShape {
        TriangleShape {
            vertices: [a, b, c],
            data: ConvexInternal::new(Vector::zeros()),
        }
    }

    /// Creates the triangle with the given vertices.
    #[inline]
    pub fn from_array(vertices: &[Point<Real>; 3]) -> TriangleShape {
        Self::new(vertices[0], vertices[1], vertices[2])
    }

    /// The unscaled vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 3] {
        &self.vertices
    }

    /// The vertices of this triangle with the local scaling applied.
    #[inline]
    pub fn scaled_vertices(&self) -> [Point<Real>; 3] {
        self.vertices
            .map(|v| Point::from(v.coords.component_mul(&self.data.local_scaling)))
    }

    /// The unit normal of this triangle, following the counter-clockwise winding of its
    /// vertices. `None` if the triangle is degenerate.
    pub fn normal(&self) -> Option<Vector<Real>> {
        let [a, b, c] = self.scaled_vertices();
        (b - a).cross(&(c - a)).try_normalize(Real::EPSILON)
    }

    /// The plane of this triangle as its unit normal `n` and the constant `d` such that
    /// `n · p = d` for every point `p` of the plane. `None` if the triangle is degenerate.
    pub fn plane_equation(&self) -> Option<(Vector<Real>, Real)> {
        let normal = self.normal()?;
        let a = self.scaled_vertices()[0];
        Some((normal, a.coords.dot(&normal)))
    }
}

impl Shape for TriangleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb_slow(pos))
    }

    fn calculate_local_inertia(&self, _mass: Real) -> Result<Vector<Real>, ShapeError> {
        Err(ShapeError::unsupported(self.name(), "calculate_local_inertia"))
    }

    fn margin(&self) -> Real {
        self.data.collision_margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;
        self.data.collision_margin = margin;
        Ok(())
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.data.local_scaling)
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        self.data.local_scaling = ConvexInternal::checked_scaling(scaling)?;
        Ok(())
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }

    fn as_polyhedral(&self) -> Option<&dyn PolyhedralConvexShape> {
        Some(self)
    }
}

impl ConvexShape for TriangleShape {
    #[inline]
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let [a, b, c] = self.scaled_vertices();
        let best = utils::max_index3(
            a.coords.dot(dir),
            b.coords.dot(dir),
            c.coords.dot(dir),
        );
        [a, b, c][best]
    }
}

impl PolyhedralConvexShape for TriangleShape {
    fn num_vertices(&self) -> usize {
        3
    }

    fn vertex(&self, i: usize) -> Point<Real> {
        self.scaled_vertices()[i]
    }

    fn num_edges(&self) -> usize {
        3
    }

    fn edge(&self, i: usize) -> (Point<Real>, Point<Real>) {
        let vertices = self.scaled_vertices();
        (vertices[i], vertices[(i + 1) % 3])
    }

    fn num_planes(&self) -> usize {
        1
    }

    fn plane(&self, _i: usize) -> (Vector<Real>, Point<Real>) {
        let normal = self.normal().unwrap_or_else(Vector::zeros);
        (normal, self.scaled_vertices()[0])
    }

    /// Is `pt` on the triangle's plane, up to `tolerance`, and within its edges?
    ///
    /// Degenerate triangles contain no point.
    fn is_inside(&self, pt: &Point<Real>, tolerance: Real) -> Result<bool, ShapeError> {
        let Some((normal, constant)) = self.plane_equation() else {
            return Ok(false);
        };

        let dist = pt.coords.dot(&normal) - constant;
        if dist < -tolerance || dist > tolerance {
            return Ok(false);
        }

        for i in 0..3 {
            let (pa, pb) = self.edge(i);
            // Points toward the inside of the triangle.
            let Some(edge_normal) = normal.cross(&(pb - pa)).try_normalize(Real::EPSILON) else {
                return Ok(false);
            };

            if (pt - pa).dot(&edge_normal) < -tolerance {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
