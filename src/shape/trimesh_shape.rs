use crate::bounding_volume::{details, Aabb, BoundingVolume};
use crate::mass_properties;
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::mesh::{StridingMeshInterface, StridingMeshInterfaceExt};
use crate::shape::convex_internal::ConvexInternal;
use crate::shape::{ConcaveShape, Shape, ShapeError, ShapeType, TriangleCallback};
use core::fmt;

/// A static triangle mesh read through a [`StridingMeshInterface`].
///
/// Triangle queries visit every triangle of the mesh. See
/// [`BvhTriangleMeshShape`](crate::shape::BvhTriangleMeshShape) for an accelerated version.
pub struct TriangleMeshShape {
    mesh: Box<dyn StridingMeshInterface>,
    local_aabb: Aabb,
    margin: Real,
}

impl fmt::Debug for TriangleMeshShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriangleMeshShape")
            .field("num_sub_parts", &self.mesh.num_sub_parts())
            .field("local_aabb", &self.local_aabb)
            .field("margin", &self.margin)
            .finish()
    }
}

impl TriangleMeshShape {
    /// Creates a mesh shape reading its triangles from `mesh`.
    pub fn new(mesh: impl StridingMeshInterface + 'static) -> Result<Self, ShapeError> {
        Self::from_boxed(Box::new(mesh))
    }

    /// Creates a mesh shape reading its triangles from an already boxed `mesh`.
    pub fn from_boxed(mesh: Box<dyn StridingMeshInterface>) -> Result<Self, ShapeError> {
        let mut result = Self {
            mesh,
            local_aabb: Aabb::new_invalid(),
            margin: 0.0,
        };
        result.recalc_local_aabb()?;
        Ok(result)
    }

    /// The mesh this shape reads its triangles from.
    #[inline]
    pub fn mesh_interface(&self) -> &dyn StridingMeshInterface {
        &*self.mesh
    }

    /// Mutable access to the mesh this shape reads its triangles from.
    ///
    /// Call [`Self::recalc_local_aabb`] after modifying the mesh.
    #[inline]
    pub fn mesh_interface_mut(&mut self) -> &mut dyn StridingMeshInterface {
        &mut *self.mesh
    }

    /// The local AABB of the mesh, margin included.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// Recomputes the local AABB from the current vertices and scaling of the mesh.
    pub fn recalc_local_aabb(&mut self) -> Result<(), ShapeError> {
        let mut aabb = Aabb::new_invalid();

        for i in 0..DIM {
            let mut dir = Vector::zeros();
            dir[i] = 1.0;
            aabb.maxs[i] = self.local_supporting_vertex(&dir)?[i] + self.margin;
            dir[i] = -1.0;
            aabb.mins[i] = self.local_supporting_vertex(&dir)?[i] - self.margin;
        }

        self.local_aabb = aabb;
        Ok(())
    }

    /// Grows the local AABB to enclose `aabb`, enlarged by the margin.
    pub(crate) fn grow_local_aabb(&mut self, aabb: &Aabb) {
        self.local_aabb.merge(&aabb.loosened(self.margin));
    }

    /// The scaled mesh vertex maximizing the dot product with `dir`.
    ///
    /// Every triangle is visited. Returns the origin if the mesh has no triangles.
    pub fn local_supporting_vertex(&self, dir: &Vector<Real>) -> Result<Point<Real>, ShapeError> {
        let mut best = Point::origin();
        let mut best_dot = -Real::MAX;

        self.mesh
            .internal_process_all_triangles(&mut |tri: &[Point<Real>; 3], _: usize, _: usize| {
                for pt in tri {
                    let dot = pt.coords.dot(dir);
                    if dot > best_dot {
                        best_dot = dot;
                        best = *pt;
                    }
                }
            })?;

        if best_dot == -Real::MAX {
            log::debug!("Support query on a triangle mesh without triangles.");
        }

        Ok(best)
    }
}

impl Shape for TriangleMeshShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::TriangleMesh
    }

    fn name(&self) -> &'static str {
        "TRIANGLEMESH"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        Ok(details::transform_aabb(&self.local_aabb, self.margin, pos))
    }

    /// The inertia of the local AABB.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        Ok(mass_properties::box_local_inertia(
            &self.local_aabb.half_extents(),
            mass,
        ))
    }

    fn margin(&self) -> Real {
        self.margin
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        ConvexInternal::check_margin(margin)?;
        self.margin = margin;
        self.recalc_local_aabb()
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        Ok(self.mesh.scaling())
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let scaling = ConvexInternal::checked_scaling(scaling)?;
        self.mesh.set_scaling(scaling);
        self.recalc_local_aabb()
    }

    fn as_concave(&self) -> Option<&dyn ConcaveShape> {
        Some(self)
    }
}

impl ConcaveShape for TriangleMeshShape {
    fn process_all_triangles(
        &self,
        callback: &mut dyn TriangleCallback,
        aabb: &Aabb,
    ) -> Result<(), ShapeError> {
        self.mesh.internal_process_all_triangles(
            &mut |tri: &[Point<Real>; 3], part: usize, index: usize| {
                if Aabb::from_points(tri).intersects(aabb) {
                    callback.process_triangle(tri, part, index);
                }
            },
        )?;

        Ok(())
    }
}
