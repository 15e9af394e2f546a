//! Support mapping based box shape.

use crate::bounding_volume::Aabb;
use crate::mass_properties;
use crate::math::{Isometry, Point, Real, Vector, CONVEX_DISTANCE_MARGIN};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConvexShape, PolyhedralConvexShape, Shape, ShapeError, ShapeType};
use crate::utils;

/// A box centered at the origin, aligned with the local axes.
///
/// The margin is carved out of the given half-extents: the box keeps the same outer size
/// whatever its margin, and its inner, margin-free box shrinks accordingly.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoxShape {
    data: ConvexInternal,
}

impl BoxShape {
    /// Creates a new box from its margin-inclusive half-extents.
    ///
    /// If the default margin does not fit inside the box, it is reduced to a tenth of the
    /// smallest half-extent.
    pub fn new(half_extents: Vector<Real>) -> Result<BoxShape, ShapeError> {
        ConvexInternal::check_dimensions(&half_extents)?;

        let min_extent = half_extents.min();
        let margin = if CONVEX_DISTANCE_MARGIN > min_extent {
            log::debug!(
                "Box half-extents {:?} are too small for the default margin, using {}.",
                half_extents,
                min_extent * 0.1
            );
            min_extent * 0.1
        } else {
            CONVEX_DISTANCE_MARGIN
        };

        let mut data = ConvexInternal::new(half_extents - Vector::repeat(margin));
        data.collision_margin = margin;
        Ok(BoxShape { data })
    }

    /// The half-extents of this box, margin included.
    #[inline]
    pub fn half_extents_with_margin(&self) -> Vector<Real> {
        self.data.dimensions_with_margin()
    }

    /// The half-extents of the margin-free inner box.
    #[inline]
    pub fn half_extents_without_margin(&self) -> Vector<Real> {
        self.data.implicit_shape_dimensions
    }
}

// Vertex pairs of each edge, vertex `i` having the sign bits `(x, y, z) = (i & 1, i & 2, i & 4)`.
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

impl Shape for BoxShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Box
    }

    fn name(&self) -> &'static str {
        "Box"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb(pos))
    }

    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        Ok(mass_properties::box_local_inertia(
            &self.half_extents_with_margin(),
            mass,
        ))
    }

    fn margin(&self) -> Real {
        self.data.collision_margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.data.set_margin_keeping_extents(margin)
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.data.local_scaling)
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        self.data.rescale_with_margin(scaling)
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }

    fn as_polyhedral(&self) -> Option<&dyn PolyhedralConvexShape> {
        Some(self)
    }
}

impl ConvexShape for BoxShape {
    #[inline]
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let he = &self.data.implicit_shape_dimensions;
        Point::new(
            utils::select(dir.x, he.x, -he.x),
            utils::select(dir.y, he.y, -he.y),
            utils::select(dir.z, he.z, -he.z),
        )
    }

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
        let he = self.data.implicit_shape_dimensions;

        for (dir, out) in dirs.iter().zip(out.iter_mut()) {
            *out = Point::from(he.zip_map(dir, |h, d| utils::select(d, h, -h)));
        }
    }
}

impl PolyhedralConvexShape for BoxShape {
    fn num_vertices(&self) -> usize {
        8
    }

    fn vertex(&self, i: usize) -> Point<Real> {
        let he = &self.data.implicit_shape_dimensions;
        let sign = |bit: usize| if i & bit == 0 { 1.0 } else { -1.0 };
        Point::new(he.x * sign(1), he.y * sign(2), he.z * sign(4))
    }

    fn num_edges(&self) -> usize {
        EDGES.len()
    }

    fn edge(&self, i: usize) -> (Point<Real>, Point<Real>) {
        let (a, b) = EDGES[i];
        (self.vertex(a), self.vertex(b))
    }

    fn num_planes(&self) -> usize {
        6
    }

    fn plane(&self, i: usize) -> (Vector<Real>, Point<Real>) {
        let he = &self.data.implicit_shape_dimensions;
        let axis = i / 2;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let mut normal = Vector::zeros();
        normal[axis] = sign;
        (normal, Point::from(normal * he[axis]))
    }

    fn is_inside(&self, pt: &Point<Real>, tolerance: Real) -> Result<bool, ShapeError> {
        let he = &self.data.implicit_shape_dimensions;
        Ok((0..3).all(|i| pt[i] <= he[i] + tolerance && pt[i] >= -he[i] - tolerance))
    }
}
