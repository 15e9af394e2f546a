use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Isometry, Real, Vector};
use crate::shape::{ConcaveShape, ConvexShape, PolyhedralConvexShape, ShapeError};
use downcast_rs::{impl_downcast, DowncastSync};
use num::FromPrimitive;
use num_derive::FromPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
///
/// The declaration order matters: the capability predicates of [`ShapeCapabilities`] are
/// derived from contiguous ranges of this enum.
pub enum ShapeType {
    /// A box.
    Box = 0,
    /// A triangle.
    Triangle,
    /// A tetrahedron.
    Tetrahedral,
    /// A convex mesh given as triangles.
    ConvexTriangleMesh,
    /// The convex hull of a point cloud.
    ConvexHull,
    /// A user-defined polyhedral shape.
    CustomPolyhedral,
    /// A sphere.
    Sphere,
    /// The convex hull of several spheres.
    MultiSphere,
    /// A capsule.
    Capsule,
    /// A cone.
    Cone,
    /// A generic convex shape.
    Convex,
    /// A cylinder.
    Cylinder,
    /// A uniformly scaled convex shape.
    UniformScaling,
    /// The Minkowski sum of two convex shapes.
    MinkowskiSum,
    /// The Minkowski difference of two convex shapes.
    MinkowskiDifference,
    /// A user-defined convex shape.
    CustomConvex,
    /// A triangle mesh.
    TriangleMesh,
    /// A triangle mesh accelerated by a bounding volume hierarchy.
    BvhTriangleMesh,
    /// A heightfield.
    Terrain,
    /// A deformable triangle mesh.
    Gimpact,
    /// A triangle mesh with per-triangle materials.
    MultiMaterialTriangleMesh,
    /// A shape that never collides.
    Empty,
    /// An infinite plane.
    StaticPlane,
    /// A user-defined concave shape.
    CustomConcave,
    /// A compound shape.
    Compound,
    /// A soft body.
    SoftBody,
    /// An invalid shape type.
    Invalid,
}

bitflags::bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    /// The capabilities of a kind of shape.
    pub struct ShapeCapabilities: u8 {
        /// The shape is a convex polyhedron.
        const POLYHEDRAL = 1 << 0;
        /// The shape is convex and answers support-point queries.
        const CONVEX = 1 << 1;
        /// The shape is concave and exposes its triangles.
        const CONCAVE = 1 << 2;
        /// The shape is made of other shapes.
        const COMPOUND = 1 << 3;
        /// The shape is unbounded.
        const INFINITE = 1 << 4;
    }
}

impl ShapeType {
    /// The shape type with the given numeric identifier, if any.
    pub fn from_id(id: u32) -> Option<ShapeType> {
        ShapeType::from_u32(id)
    }

    /// The capabilities shared by all the shapes of this type.
    pub fn capabilities(self) -> ShapeCapabilities {
        let id = self as u32;
        let mut result = ShapeCapabilities::empty();

        if id < ShapeType::Sphere as u32 {
            result |= ShapeCapabilities::POLYHEDRAL;
        }
        if id <= ShapeType::CustomConvex as u32 {
            result |= ShapeCapabilities::CONVEX;
        }
        if id >= ShapeType::TriangleMesh as u32 && id <= ShapeType::CustomConcave as u32 {
            result |= ShapeCapabilities::CONCAVE;
        }
        if self == ShapeType::Compound {
            result |= ShapeCapabilities::COMPOUND;
        }
        if self == ShapeType::StaticPlane {
            result |= ShapeCapabilities::INFINITE;
        }

        result
    }

    /// Is this a polyhedral shape type?
    #[inline]
    pub fn is_polyhedral(self) -> bool {
        self.capabilities().contains(ShapeCapabilities::POLYHEDRAL)
    }

    /// Is this a convex shape type?
    #[inline]
    pub fn is_convex(self) -> bool {
        self.capabilities().contains(ShapeCapabilities::CONVEX)
    }

    /// Is this a concave shape type?
    #[inline]
    pub fn is_concave(self) -> bool {
        self.capabilities().contains(ShapeCapabilities::CONCAVE)
    }

    /// Is this a compound shape type?
    #[inline]
    pub fn is_compound(self) -> bool {
        self.capabilities().contains(ShapeCapabilities::COMPOUND)
    }

    /// Is this an infinite shape type?
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.capabilities().contains(ShapeCapabilities::INFINITE)
    }
}

/// Trait implemented by all shapes.
pub trait Shape: DowncastSync {
    /// The type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// A human-readable name for this shape.
    fn name(&self) -> &'static str;

    /// The AABB of this shape once placed at `pos`.
    ///
    /// The result never underestimates the shape, margin included.
    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError>;

    /// The diagonal of the local inertia tensor of this shape for the given mass.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError>;

    /// The collision margin of this shape.
    fn margin(&self) -> Real;

    /// Sets the collision margin of this shape.
    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError>;

    /// The per-axis scaling factors applied to this shape.
    ///
    /// Shapes whose geometry is entirely defined by other shapes do not support scaling.
    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError>;

    /// Sets the per-axis scaling factors applied to this shape.
    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError>;

    /// A sphere bounding this shape in its local space.
    fn bounding_sphere(&self) -> Result<BoundingSphere, ShapeError> {
        Ok(self.compute_aabb(&Isometry::identity())?.bounding_sphere())
    }

    /// The radius of the sphere, centered at the local origin, swept by this shape under rotation.
    fn angular_motion_disc(&self) -> Result<Real, ShapeError> {
        Ok(self.bounding_sphere()?.swept_radius())
    }

    /// The AABB enclosing this shape while it moves from `pos` with the given velocities
    /// during `time_step`.
    ///
    /// The linear motion is swept exactly; the angular motion is bounded through
    /// [`Self::angular_motion_disc`]. A rotating shape without a finite bounding sphere
    /// gets an unbounded AABB.
    fn calculate_temporal_aabb(
        &self,
        pos: &Isometry<Real>,
        linvel: &Vector<Real>,
        angvel: &Vector<Real>,
        time_step: Real,
    ) -> Result<Aabb, ShapeError> {
        let mut aabb = self.compute_aabb(pos)?;
        let lin_motion = linvel * time_step;

        for i in 0..3 {
            if lin_motion[i] > 0.0 {
                aabb.maxs[i] += lin_motion[i];
            } else {
                aabb.mins[i] += lin_motion[i];
            }
        }

        let angular_speed = angvel.norm();

        if angular_speed > 0.0 {
            let disc = self.angular_motion_disc()?;

            // Unbounded shapes have no finite swept radius.
            if !disc.is_finite() {
                return Ok(Aabb::new_unbounded());
            }

            let angular_motion = angular_speed * disc * time_step;
            aabb.mins -= Vector::repeat(angular_motion);
            aabb.maxs += Vector::repeat(angular_motion);
        }

        Ok(aabb)
    }

    /// Is this shape convex?
    fn is_convex(&self) -> bool {
        self.shape_type().is_convex()
    }

    /// Is this shape concave?
    fn is_concave(&self) -> bool {
        self.shape_type().is_concave()
    }

    /// Is this shape a compound?
    fn is_compound(&self) -> bool {
        self.shape_type().is_compound()
    }

    /// Is this shape unbounded?
    fn is_infinite(&self) -> bool {
        self.shape_type().is_infinite()
    }

    /// Is this shape a convex polyhedron?
    fn is_polyhedral(&self) -> bool {
        self.shape_type().is_polyhedral()
    }

    /// This shape as a support-mapped convex shape, if it is one.
    fn as_convex(&self) -> Option<&dyn ConvexShape> {
        None
    }

    /// This shape as a concave shape, if it is one.
    fn as_concave(&self) -> Option<&dyn ConcaveShape> {
        None
    }

    /// This shape as a convex polyhedron, if it is one.
    fn as_polyhedral(&self) -> Option<&dyn PolyhedralConvexShape> {
        None
    }
}

impl_downcast!(sync Shape);
