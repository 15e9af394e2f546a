use crate::math::{Point, Real, Vector};
use crate::shape::{
    BoxShape, CapsuleShape, ConvexHullShape, CylinderShape, Shape, ShapeError, SphereShape,
    StaticPlaneShape, TriangleShape,
};
use std::sync::Arc;
use core::fmt;
use core::ops::Deref;

/// A reference-counted, shareable shape.
///
/// Cloning a `SharedShape` only increments a reference count. This is how a compound shape
/// holds its children, so one shape can appear in several compounds without being copied.
#[derive(Clone)]
pub struct SharedShape(pub Arc<dyn Shape>);

impl Deref for SharedShape {
    type Target = dyn Shape;
    fn deref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl AsRef<dyn Shape> for SharedShape {
    fn as_ref(&self) -> &dyn Shape {
        &*self.0
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedShape ( Arc<{}> )", self.0.name())
    }
}

impl SharedShape {
    /// Wraps any shape type into a `SharedShape`.
    pub fn new(shape: impl Shape) -> Self {
        Self(Arc::new(shape))
    }

    /// A mutable reference to the underlying shape, if this is its only owner.
    ///
    /// Shapes are not required to be `Clone`, so a shape shared with other owners cannot be
    /// detached and this returns `None`.
    pub fn get_mut(&mut self) -> Option<&mut dyn Shape> {
        Arc::get_mut(&mut self.0)
    }

    /// Do `self` and `other` point to the same shape?
    pub fn ptr_eq(&self, other: &SharedShape) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Initialize a box shape defined by its half-extents, margin included.
    pub fn cuboid(hx: Real, hy: Real, hz: Real) -> Result<Self, ShapeError> {
        Ok(Self::new(BoxShape::new(Vector::new(hx, hy, hz))?))
    }

    /// Initialize a sphere shape defined by its radius.
    pub fn sphere(radius: Real) -> Result<Self, ShapeError> {
        Ok(Self::new(SphereShape::new(radius)?))
    }

    /// Initialize a capsule aligned with the local `y` axis.
    pub fn capsule(radius: Real, height: Real) -> Result<Self, ShapeError> {
        Ok(Self::new(CapsuleShape::new(radius, height)?))
    }

    /// Initialize a cylinder aligned with the local `y` axis.
    pub fn cylinder(half_height: Real, radius: Real) -> Result<Self, ShapeError> {
        Ok(Self::new(CylinderShape::new(Vector::new(
            radius,
            half_height,
            radius,
        ))?))
    }

    /// Initialize a triangle shape.
    pub fn triangle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Self {
        Self::new(TriangleShape::new(a, b, c))
    }

    /// Initialize the convex hull of a set of points.
    pub fn convex_hull(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        Ok(Self::new(ConvexHullShape::new(points)?))
    }

    /// Initialize an infinite plane.
    pub fn static_plane(normal: Vector<Real>, constant: Real) -> Result<Self, ShapeError> {
        Ok(Self::new(StaticPlaneShape::new(normal, constant)?))
    }
}
