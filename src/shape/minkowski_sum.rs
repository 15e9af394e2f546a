use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConvexShape, Shape, ShapeError, ShapeType};
use std::sync::Arc;

/// The Minkowski sum of two convex shapes, each placed at its own local pose.
///
/// The support point of the sum is the sum of the support points of both operands. The
/// margin of the sum is the sum of their margins. [`Shape::set_margin`] validates its
/// argument and otherwise ignores it; set the margin on the operands instead.
#[derive(Clone)]
pub struct MinkowskiSumShape {
    shape_a: Arc<dyn ConvexShape>,
    shape_b: Arc<dyn ConvexShape>,
    transform_a: Isometry<Real>,
    transform_b: Isometry<Real>,
}

impl MinkowskiSumShape {
    /// The Minkowski sum of `shape_a` and `shape_b`, both at the identity pose.
    pub fn new(shape_a: Arc<dyn ConvexShape>, shape_b: Arc<dyn ConvexShape>) -> Self {
        Self {
            shape_a,
            shape_b,
            transform_a: Isometry::identity(),
            transform_b: Isometry::identity(),
        }
    }

    /// The first operand.
    pub fn shape_a(&self) -> &dyn ConvexShape {
        &*self.shape_a
    }

    /// The second operand.
    pub fn shape_b(&self) -> &dyn ConvexShape {
        &*self.shape_b
    }

    /// The pose of the first operand.
    pub fn transform_a(&self) -> &Isometry<Real> {
        &self.transform_a
    }

    /// The pose of the second operand.
    pub fn transform_b(&self) -> &Isometry<Real> {
        &self.transform_b
    }

    /// Sets the pose of the first operand.
    pub fn set_transform_a(&mut self, transform: Isometry<Real>) {
        self.transform_a = transform;
    }

    /// Sets the pose of the second operand.
    pub fn set_transform_b(&mut self, transform: Isometry<Real>) {
        self.transform_b = transform;
    }
}

impl Shape for MinkowskiSumShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::MinkowskiSum
    }

    fn name(&self) -> &'static str {
        "MinkowskiSum"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb_slow(pos))
    }

    fn calculate_local_inertia(&self, _mass: Real) -> Result<Vector<Real>, ShapeError> {
        Err(ShapeError::unsupported(self.name(), "calculate_local_inertia"))
    }

    fn margin(&self) -> Real {
        self.shape_a.margin() + self.shape_b.margin()
    }

    /// Validates `margin` and ignores it: the margin is derived from the operands.
    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Err(ShapeError::unsupported(self.name(), "local_scaling"))
    }

    fn set_local_scaling(&mut self, _scaling: &Vector<Real>) -> Result<(), ShapeError> {
        Err(ShapeError::unsupported(self.name(), "set_local_scaling"))
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }
}

impl ConvexShape for MinkowskiSumShape {
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let dir_a = self.transform_a.inverse_transform_vector(dir);
        let dir_b = self.transform_b.inverse_transform_vector(dir);
        let sup_a = self.transform_a * self.shape_a.local_supporting_vertex_without_margin(&dir_a);
        let sup_b = self.transform_b * self.shape_b.local_supporting_vertex_without_margin(&dir_b);

        sup_a + sup_b.coords
    }
}
