use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::mesh::{MeshError, StridingMeshInterface, StridingMeshInterfaceExt};
use crate::partitioning::OptimizedBvh;
use crate::shape::{
    ConcaveShape, Shape, ShapeError, ShapeType, TriangleCallback, TriangleMeshShape,
};
use std::sync::Arc;

/// The BVH of a [`BvhTriangleMeshShape`], either owned or shared with other shapes.
#[derive(Clone, Debug)]
pub enum BvhStorage {
    /// A BVH built by, and only used by, this shape.
    Owned(OptimizedBvh),
    /// A BVH shared with other shapes using the same mesh. It is copied before being modified.
    Shared(Arc<OptimizedBvh>),
}

impl BvhStorage {
    fn get(&self) -> &OptimizedBvh {
        match self {
            BvhStorage::Owned(bvh) => bvh,
            BvhStorage::Shared(bvh) => bvh,
        }
    }

    fn get_mut(&mut self) -> &mut OptimizedBvh {
        match self {
            BvhStorage::Owned(bvh) => bvh,
            BvhStorage::Shared(bvh) => Arc::make_mut(bvh),
        }
    }
}

/// A static triangle mesh accelerated by a bounding volume hierarchy.
///
/// The BVH is built over the scaled triangles. It is rebuilt whenever the local scaling
/// changes, and must be refitted with [`Self::refit_tree`] or [`Self::partial_refit_tree`]
/// after the vertices of the mesh are moved.
#[derive(Debug)]
pub struct BvhTriangleMeshShape {
    mesh: TriangleMeshShape,
    bvh: Option<BvhStorage>,
}

impl BvhTriangleMeshShape {
    /// Creates a mesh shape reading its triangles from `mesh`.
    ///
    /// If `build_bvh` is `false`, no BVH is built and triangle queries fall back to a scan
    /// of the whole mesh until one is set with [`Self::set_optimized_bvh`].
    pub fn new(
        mesh: impl StridingMeshInterface + 'static,
        build_bvh: bool,
    ) -> Result<Self, ShapeError> {
        Self::from_boxed(Box::new(mesh), build_bvh)
    }

    /// Creates a mesh shape reading its triangles from an already boxed `mesh`.
    pub fn from_boxed(
        mesh: Box<dyn StridingMeshInterface>,
        build_bvh: bool,
    ) -> Result<Self, ShapeError> {
        let mesh = TriangleMeshShape::from_boxed(mesh)?;
        let bvh = if build_bvh {
            Some(BvhStorage::Owned(OptimizedBvh::build(mesh.mesh_interface())?))
        } else {
            None
        };

        Ok(Self { mesh, bvh })
    }

    /// The mesh this shape reads its triangles from.
    #[inline]
    pub fn mesh_interface(&self) -> &dyn StridingMeshInterface {
        self.mesh.mesh_interface()
    }

    /// Mutable access to the mesh this shape reads its triangles from.
    ///
    /// Call [`Self::refit_tree`] after moving vertices.
    #[inline]
    pub fn mesh_interface_mut(&mut self) -> &mut dyn StridingMeshInterface {
        self.mesh.mesh_interface_mut()
    }

    /// The local AABB of the mesh, margin included.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        self.mesh.local_aabb()
    }

    /// The BVH of this shape, if any.
    #[inline]
    pub fn optimized_bvh(&self) -> Option<&OptimizedBvh> {
        self.bvh.as_ref().map(BvhStorage::get)
    }

    /// Was the BVH of this shape built by this shape, rather than shared?
    #[inline]
    pub fn owns_bvh(&self) -> bool {
        matches!(self.bvh, Some(BvhStorage::Owned(_)))
    }

    /// Replaces the BVH of this shape by a shared one built over the same mesh with the given
    /// scaling.
    ///
    /// The scaling of this shape is set to `scaling` without triggering a rebuild.
    pub fn set_optimized_bvh(
        &mut self,
        bvh: Arc<OptimizedBvh>,
        scaling: &Vector<Real>,
    ) -> Result<(), ShapeError> {
        self.mesh.set_local_scaling(scaling)?;
        self.bvh = Some(BvhStorage::Shared(bvh));
        Ok(())
    }

    /// Recomputes the local AABB and every BVH node from the current mesh vertices.
    ///
    /// A BVH is built if this shape has none.
    pub fn refit_tree(&mut self) -> Result<(), ShapeError> {
        self.mesh.recalc_local_aabb()?;
        let mesh = self.mesh.mesh_interface();

        if let Some(storage) = &mut self.bvh {
            storage.get_mut().refit(mesh)?;
        } else {
            self.bvh = Some(BvhStorage::Owned(OptimizedBvh::build(mesh)?));
        }

        Ok(())
    }

    /// Grows the BVH nodes of the triangles intersecting `aabb` to enclose their current
    /// vertices. The local AABB of the shape is grown accordingly, never shrunk.
    pub fn partial_refit_tree(&mut self, aabb: &Aabb) -> Result<(), ShapeError> {
        if self.bvh.is_none() {
            self.rebuild_bvh()?;
        }

        let mesh = self.mesh.mesh_interface();
        let mut root = None;

        if let Some(storage) = &mut self.bvh {
            let bvh = storage.get_mut();
            bvh.partial_refit(mesh, aabb)?;
            root = bvh.root_aabb().copied();
        }

        if let Some(root) = root {
            self.mesh.grow_local_aabb(&root);
        }

        Ok(())
    }

    fn rebuild_bvh(&mut self) -> Result<(), ShapeError> {
        let bvh = OptimizedBvh::build(self.mesh.mesh_interface())?;
        self.bvh = Some(BvhStorage::Owned(bvh));
        Ok(())
    }
}

impl Shape for BvhTriangleMeshShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::BvhTriangleMesh
    }

    fn name(&self) -> &'static str {
        "BVHTRIANGLEMESH"
    }

    fn compute_aabb(&self, pos: &Isometry<Real>) -> Result<Aabb, ShapeError> {
        self.mesh.compute_aabb(pos)
    }

    /// The inertia of the local AABB.
    fn calculate_local_inertia(&self, mass: Real) -> Result<Vector<Real>, ShapeError> {
        self.mesh.calculate_local_inertia(mass)
    }

    fn margin(&self) -> Real {
        self.mesh.margin()
    }

    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.mesh.set_margin(margin)
    }

    fn local_scaling(&self) -> Result<Vector<Real>, ShapeError> {
        self.mesh.local_scaling()
    }

    /// Sets the scaling of the mesh and rebuilds the BVH if the scaling actually changed.
    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let old = self.mesh.local_scaling()?;
        self.mesh.set_local_scaling(scaling)?;
        let new = self.mesh.local_scaling()?;

        if (old - new).norm_squared() > DEFAULT_EPSILON {
            log::debug!(
                "Rebuilding the BVH of a triangle mesh after a scaling change from {:?} to {:?}.",
                old,
                new
            );
            self.rebuild_bvh()?;
        }

        Ok(())
    }

    fn as_concave(&self) -> Option<&dyn ConcaveShape> {
        Some(self)
    }
}

impl ConcaveShape for BvhTriangleMeshShape {
    fn process_all_triangles(
        &self,
        callback: &mut dyn TriangleCallback,
        aabb: &Aabb,
    ) -> Result<(), ShapeError> {
        let Some(bvh) = self.optimized_bvh() else {
            return self.mesh.process_all_triangles(callback, aabb);
        };

        let mesh = self.mesh.mesh_interface();
        let scaling = mesh.scaling();
        let mut current: Option<(usize, _)> = None;
        let mut result = Ok(());

        bvh.report_aabb_overlapping_nodes(aabb, |part, triangle| {
            if result.is_err() {
                return;
            }

            let (part, triangle) = (part as usize, triangle as usize);

            // Consecutive leaves usually share their sub-part: keep it locked.
            if current.as_ref().map(|(p, _)| *p) != Some(part) {
                current = None;
                match mesh.lock_read_only(part) {
                    Ok(guard) => current = Some((part, guard)),
                    Err(e) => {
                        result = Err(e);
                        return;
                    }
                }
            }

            if let Some((_, guard)) = &current {
                if triangle >= guard.num_triangles {
                    result = Err(MeshError::TriangleOutOfBounds {
                        triangle,
                        num_triangles: guard.num_triangles,
                    });
                    return;
                }

                let tri: [Point<Real>; 3] = guard.scaled_triangle(triangle, &scaling);
                if Aabb::from_points(&tri).intersects(aabb) {
                    callback.process_triangle(&tri, part, triangle);
                }
            }
        });

        drop(current);
        result.map_err(ShapeError::from)
    }
}
