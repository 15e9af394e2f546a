use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConcaveShape, Shape, ShapeError, ShapeType, TriangleCallback};
use crate::utils;

/// An infinite plane, the set of points `p` such that `normal · p = constant`.
///
/// Only meant for static objects: its AABB covers the whole space and its inertia is zero.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct StaticPlaneShape {
    plane_normal: Vector<Real>,
    plane_constant: Real,
    margin: Real,
    local_scaling: Vector<Real>,
}

impl StaticPlaneShape {
    /// Creates a plane from its normal and constant.
    ///
    /// The normal is normalized. It must not be zero.
    pub fn new(plane_normal: Vector<Real>, plane_constant: Real) -> Result<Self, ShapeError> {
        let plane_normal = plane_normal
            .try_normalize(DEFAULT_EPSILON)
            .ok_or(ShapeError::InvalidDimensions)?;

        Ok(Self {
            plane_normal,
            plane_constant,
            margin: 0.0,
            local_scaling: Vector::repeat(1.0),
        })
    }

    /// The unit normal of this plane.
    #[inline]
    pub fn plane_normal(&self) -> &Vector<Real> {
        &self.plane_normal
    }

    /// The signed distance from the origin to this plane, along its normal.
    #[inline]
    pub fn plane_constant(&self) -> Real {
        self.plane_constant
    }
}

impl Shape for StaticPlaneShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::StaticPlane
    }

    fn name(&self) -> &'static str {
        "STATICPLANE"
    }

    fn compute_aabb(&self, _pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(Aabb::new_unbounded())
    }

    fn calculate_local_inertia(&self, _mass: Real) -> Result<Vector<Real>, ShapeError> {
        Ok(Vector::zeros())
    }

    /// A plane never moves: its swept AABB is its (unbounded) AABB.
    fn calculate_temporal_aabb(
        &self,
        pos: &Isometry<Real>,
        _linvel: &Vector<Real>,
        _angvel: &Vector<Real>,
        _time_step: Real,
    ) -> Result<Aabb, ShapeError> {
        self.compute_aabb(pos)
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;
        self.margin = margin;
        Ok(())
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.local_scaling)
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let scaling = ConvexInternal::checked_scaling(scaling)?;
        self.local_scaling = scaling;
        Ok(())
    }

    fn as_concave(&self) -> Option<&dyn ConcaveShape> {
        Some(self)
    }
}

impl ConcaveShape for StaticPlaneShape {
    /// Reports two triangles covering the part of the plane that lies under `aabb`.
    ///
    /// The triangles are centered on the projection of the center of `aabb` onto the plane
    /// and extend by the radius of the sphere bounding `aabb`.
    fn process_all_triangles(
        &self,
        callback: &mut dyn TriangleCallback,
        aabb: &Aabb,
    ) -> Result<(), ShapeError> {
        let radius = aabb.half_extents().norm();
        let center = aabb.center();
        let n = self.plane_normal;
        let (t0, t1) = utils::plane_space(&n);
        let projected: Point<Real> = center - n * (n.dot(&center.coords) - self.plane_constant);
        let (t0, t1) = (t0 * radius, t1 * radius);

        let first = [
            projected + t0 + t1,
            projected + t0 - t1,
            projected - t0 - t1,
        ];
        callback.process_triangle(&first, 0, 0);

        let second = [
            projected - t0 - t1,
            projected - t0 + t1,
            projected + t0 + t1,
        ];
        callback.process_triangle(&second, 0, 1);

        Ok(())
    }
}
