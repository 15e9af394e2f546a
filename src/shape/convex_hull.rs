use crate::bounding_volume::Aabb;
use crate::mass_properties;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConvexShape, PolyhedralConvexShape, Shape, ShapeError, ShapeType};
use crate::utils;
use arrayvec::ArrayVec;

/// The convex hull of a set of points.
///
/// The hull is never computed explicitly: support queries scan every point, so their cost
/// grows linearly with the number of points. This shape is meant for small point sets.
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexHullShape {
    points: Vec<Point<Real>>,
    data: ConvexInternal,
    local_aabb: Aabb,
}

impl ConvexHullShape {
    /// Creates the convex hull of the given points.
    pub fn new(points: Vec<Point<Real>>) -> Result<ConvexHullShape, ShapeError> {
        if points.is_empty() {
            return Err(ShapeError::EmptyHull);
        }

        let mut result = ConvexHullShape {
            points,
            data: ConvexInternal::new(Vector::zeros()),
            local_aabb: Aabb::new_invalid(),
        };
        result.recalc_local_aabb();
        Ok(result)
    }

    /// Adds a point to this hull.
    pub fn add_point(&mut self, point: Point<Real>) {
        self.points.push(point);
        self.recalc_local_aabb();
    }

    /// The unscaled points of this hull.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The points of this hull with the local scaling applied.
    pub fn scaled_points(&self) -> Vec<Point<Real>> {
        self.points
            .iter()
            .map(|p| Point::from(p.coords.component_mul(&self.data.local_scaling)))
            .collect()
    }

    /// The cached local-space AABB of this hull, margin included.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    fn recalc_local_aabb(&mut self) {
        let mut dirs = ArrayVec::<Vector<Real>, { 2 * DIM }>::new();
        for i in 0..DIM {
            dirs.push(Vector::ith(i, 1.0));
            dirs.push(Vector::ith(i, -1.0));
        }

        let mut supports = [Point::origin(); 2 * DIM];
        self.batched_unit_vector_supporting_vertex_without_margin(&dirs, &mut supports);

        let margin = self.data.collision_margin;
        for i in 0..DIM {
            self.local_aabb.maxs[i] = supports[2 * i][i] + margin;
            self.local_aabb.mins[i] = supports[2 * i + 1][i] - margin;
        }
    }
}

impl Shape for ConvexHullShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexHull
    }

    fn name(&self) -> &'static str {
        "Convex"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb_slow(pos))
    }

    /// The inertia of the local AABB of this hull.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        Ok(mass_properties::box_local_inertia(
            &self.local_aabb.half_extents(),
            mass,
        ))
    }

    fn margin(&self) -> Real {
        self.data.collision_margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;
        self.data.collision_margin = margin;
        self.recalc_local_aabb();
        Ok(())
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.data.local_scaling)
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        self.data.local_scaling = ConvexInternal::checked_scaling(scaling)?;
        self.recalc_local_aabb();
        Ok(())
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }

    fn as_polyhedral(&self) -> Option<&dyn PolyhedralConvexShape> {
        Some(self)
    }
}

impl ConvexShape for ConvexHullShape {
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        // Never fails: the hull has at least one point.
        utils::scaled_point_cloud_support_point(dir, &self.points, &self.data.local_scaling)
            .unwrap_or_else(Point::origin)
    }
}

impl PolyhedralConvexShape for ConvexHullShape {
    fn num_vertices(&self) -> usize {
        self.points.len()
    }

    fn vertex(&self, i: usize) -> Point<Real> {
        Point::from(self.points[i].coords.component_mul(&self.data.local_scaling))
    }

    /// The points seen as a closed polyline.
    fn num_edges(&self) -> usize {
        self.points.len()
    }

    fn edge(&self, i: usize) -> (Point<Real>, Point<Real>) {
        (self.vertex(i), self.vertex((i + 1) % self.points.len()))
    }

    fn num_planes(&self) -> usize {
        0
    }

    fn plane(&self, i: usize) -> (Vector<Real>, Point<Real>) {
        panic!("ConvexHullShape::plane: no face plane {} on a convex hull.", i)
    }

    fn is_inside(&self, _pt: &Point<Real>, _tolerance: Real) -> Result<bool, ShapeError> {
        Err(ShapeError::unsupported(self.name(), "is_inside"))
    }
}
