use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{BoxShape, ConvexShape, Shape, ShapeError, ShapeType};

/// A cylinder centered at the origin, aligned with one of the local axes.
///
/// The cylinder is described by the half-extents of its enclosing box: the component along
/// the up axis is the half height and the first other component is the radius. Dimensions
/// and margin are handled like those of a [`BoxShape`], which the cylinder delegates to.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CylinderShape {
    extents: BoxShape,
    up_axis: usize,
}

impl CylinderShape {
    /// Creates a cylinder aligned with the local `y` axis.
    pub fn new(half_extents: Vector<Real>) -> Result<CylinderShape, ShapeError> {
        Self::new_y(half_extents)
    }

    /// Creates a cylinder aligned with the local `x` axis.
    pub fn new_x(half_extents: Vector<Real>) -> Result<CylinderShape, ShapeError> {
        Self::with_up_axis(half_extents, 0)
    }

    /// Creates a cylinder aligned with the local `y` axis.
    pub fn new_y(half_extents: Vector<Real>) -> Result<CylinderShape, ShapeError> {
        Self::with_up_axis(half_extents, 1)
    }

    /// Creates a cylinder aligned with the local `z` axis.
    pub fn new_z(half_extents: Vector<Real>) -> Result<CylinderShape, ShapeError> {
        Self::with_up_axis(half_extents, 2)
    }

    fn with_up_axis(half_extents: Vector<Real>, up_axis: usize) -> Result<Self, ShapeError> {
        Ok(CylinderShape {
            extents: BoxShape::new(half_extents)?,
            up_axis,
        })
    }

    /// The index of the axis this cylinder is aligned with.
    #[inline]
    pub fn up_axis(&self) -> usize {
        self.up_axis
    }

    // Indices of the two radial axes, in the order the support function uses them.
    #[inline]
    fn radial_axes(&self) -> (usize, usize) {
        match self.up_axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        }
    }

    /// The radius of this cylinder, margin included.
    #[inline]
    pub fn radius(&self) -> Real {
        self.half_extents_with_margin()[self.radial_axes().0]
    }

    /// Half the height of this cylinder, margin included.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_extents_with_margin()[self.up_axis]
    }

    #[inline]
    pub(crate) fn inner_radius(&self) -> Real {
        self.half_extents_without_margin()[self.radial_axes().0]
    }

    /// The half-extents of the box enclosing this cylinder, margin included.
    #[inline]
    pub fn half_extents_with_margin(&self) -> Vector<Real> {
        self.extents.half_extents_with_margin()
    }

    /// The half-extents of the box enclosing the margin-free cylinder.
    #[inline]
    pub fn half_extents_without_margin(&self) -> Vector<Real> {
        self.extents.half_extents_without_margin()
    }
}

impl Shape for CylinderShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn name(&self) -> &'static str {
        match self.up_axis {
            0 => "CylinderX",
            1 => "CylinderY",
            _ => "CylinderZ",
        }
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(self.aabb(pos))
    }

    /// The inertia of the box enclosing this cylinder.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        self.extents.calculate_local_inertia(mass)
    }

    fn margin(&self) -> Real {
        self.extents.margin()
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.extents.set_margin(margin)
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        self.extents.local_scaling()
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        self.extents.set_local_scaling(scaling)
    }

    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        Some(self)
    }
}

impl ConvexShape for CylinderShape {
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let (xx, zz) = self.radial_axes();
        let yy = self.up_axis;
        let radius = self.inner_radius();
        let half_height = self.half_extents_without_margin()[yy];

        let mut result = Point::origin();
        result[yy] = if dir[yy] < 0.0 {
            -half_height
        } else {
            half_height
        };

        let s = (dir[xx] * dir[xx] + dir[zz] * dir[zz]).sqrt();
        if s != 0.0 {
            let d = radius / s;
            result[xx] = dir[xx] * d;
            result[zz] = dir[zz] * d;
        } else {
            result[xx] = radius;
        }

        result
    }
}
