use crate::bounding_volume::Aabb;
use crate::mass_properties;
use crate::math::{Isometry, Point, Real, Vector, CONVEX_DISTANCE_MARGIN};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConvexShape, Shape, ShapeError, ShapeType};

/// A capsule: a cylinder capped by two half-spheres, centered at the origin.
///
/// The margin is part of the radius: the margin-free capsule has a radius of
/// `radius - margin`, so the outer surface does not depend on the margin.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CapsuleShape {
    data: ConvexInternal,
    up_axis: usize,
}

impl CapsuleShape {
    /// Creates a capsule aligned with the local `y` axis.
    ///
    /// `height` is the distance between the centers of the two half-spheres.
    pub fn new(radius: Real, height: Real) -> Result<CapsuleShape, ShapeError> {
        Self::with_up_axis(radius, height, 1)
    }

    /// Creates a capsule aligned with the local `x` axis.
    pub fn new_x(radius: Real, height: Real) -> Result<CapsuleShape, ShapeError> {
        Self::with_up_axis(radius, height, 0)
    }

    /// Creates a capsule aligned with the local `z` axis.
    pub fn new_z(radius: Real, height: Real) -> Result<CapsuleShape, ShapeError> {
        Self::with_up_axis(radius, height, 2)
    }

    fn with_up_axis(radius: Real, height: Real, up_axis: usize) -> Result<Self, ShapeError> {
        let mut dims = Vector::repeat(radius);
        dims[up_axis] = height * 0.5;
        ConvexInternal::check_dimensions(&dims)?;

        let mut data = ConvexInternal::new(dims);
        data.collision_margin = CONVEX_DISTANCE_MARGIN.min(radius);
        Ok(CapsuleShape { data, up_axis })
    }

    /// The index of the axis this capsule is aligned with.
    #[inline]
    pub fn up_axis(&self) -> usize {
        self.up_axis
    }

    /// The radius of the half-spheres, margin included.
    #[inline]
    pub fn radius(&self) -> Real {
        self.data.implicit_shape_dimensions[(self.up_axis + 2) % 3]
    }

    /// Half the distance between the centers of the two half-spheres.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.data.implicit_shape_dimensions[self.up_axis]
    }
}

impl Shape for CapsuleShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    fn name(&self) -> &'static str {
        match self.up_axis {
            0 => "CapsuleX",
            2 => "CapsuleZ",
            _ => "CapsuleShape",
        }
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb(pos))
    }

    /// The inertia of a solid sphere enclosing the capsule.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        Ok(mass_properties::sphere_local_inertia(
            self.half_height() + self.radius(),
            mass,
        ))
    }

    fn margin(&self) -> Real {
        self.data.collision_margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;

        if margin > self.radius() {
            return Err(ShapeError::MarginExceedsExtents);
        }

        self.data.collision_margin = margin;
        Ok(())
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.data.local_scaling)
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let mut scaled = self.data;
        scaled.rescale(scaling)?;

        if self.data.collision_margin > scaled.implicit_shape_dimensions[(self.up_axis + 2) % 3] {
            return Err(ShapeError::MarginExceedsExtents);
        }

        self.data = scaled;
        Ok(())
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }
}

impl ConvexShape for CapsuleShape {
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let len_sqr = dir.norm_squared();
        let dir = if len_sqr < 1.0e-4 {
            Vector::x()
        } else {
            dir / len_sqr.sqrt()
        };

        let inner_radius = self.radius() - self.margin();
        let mut cap_center = Point::origin();
        let mut best = Point::origin();
        let mut best_dot = -Real::MAX;

        for half_height in [self.half_height(), -self.half_height()] {
            cap_center[self.up_axis] = half_height;
            let vtx = cap_center + dir * inner_radius;
            let dot = dir.dot(&vtx.coords);

            if dot > best_dot {
                best_dot = dot;
                best = vtx;
            }
        }

        best
    }
}
