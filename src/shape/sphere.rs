use crate::bounding_volume::Aabb;
use crate::mass_properties;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConvexShape, Shape, ShapeError, ShapeType};

/// A sphere centered at the origin.
///
/// The whole sphere is encoded by its margin: the margin-free support point is always the
/// origin and [`Shape::margin`] returns the radius.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SphereShape {
    data: ConvexInternal,
}

impl SphereShape {
    /// Creates a new sphere with the given radius.
    pub fn new(radius: Real) -> Result<SphereShape, ShapeError> {
        ConvexInternal::check_dimensions(&Vector::repeat(radius))?;
        let mut data = ConvexInternal::new(Vector::new(radius, 0.0, 0.0));
        data.collision_margin = radius;
        Ok(SphereShape { data })
    }

    /// The radius of this sphere, scaled along the local `x` axis.
    #[inline]
    pub fn radius(&self) -> Real {
        self.data.implicit_shape_dimensions.x
    }
}

impl Shape for SphereShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb(pos))
    }

    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        Ok(mass_properties::sphere_local_inertia(self.radius(), mass))
    }

    fn margin(&self) -> Real {
        self.radius()
    }

    /// Stores the margin without affecting the sphere, whose margin is always its radius.
    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;
        self.data.collision_margin = margin;
        Ok(())
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.data.local_scaling)
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        self.data.rescale(scaling)
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }
}

impl ConvexShape for SphereShape {
    #[inline]
    fn local_supporting_vertex_without_margin(&self, _: &Vector<Real>) -> Point<Real> {
        Point::origin()
    }
}
