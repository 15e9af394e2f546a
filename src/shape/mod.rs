//! Shapes supported by bulletshape.

pub use self::box_shape::BoxShape;
pub use self::bvh_trimesh_shape::{BvhStorage, BvhTriangleMeshShape};
pub use self::capsule::CapsuleShape;
pub use self::compound::{CompoundShape, CompoundShapeChild};
pub use self::concave::{ConcaveShape, TriangleCallback};
pub use self::convex::{ConvexShape, PolyhedralConvexShape};
pub use self::convex_hull::ConvexHullShape;
pub use self::cylinder::CylinderShape;
pub use self::error::ShapeError;
pub use self::minkowski_sum::MinkowskiSumShape;
#[doc(inline)]
pub use self::shape::{Shape, ShapeCapabilities, ShapeType};
pub use self::shared_shape::SharedShape;
pub use self::sphere::SphereShape;
pub use self::static_plane::StaticPlaneShape;
pub use self::triangle::TriangleShape;
pub use self::trimesh_shape::TriangleMeshShape;

mod box_shape;
mod bvh_trimesh_shape;
mod capsule;
mod compound;
mod concave;
mod convex;
mod convex_hull;
mod convex_internal;
mod cylinder;
mod error;
mod minkowski_sum;
#[doc(hidden)]
pub mod shape;
mod shared_shape;
mod sphere;
mod static_plane;
mod triangle;
mod trimesh_shape;
