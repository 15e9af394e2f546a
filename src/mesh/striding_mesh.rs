use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::mesh::{IndexType, MeshError, VertexType};
use crate::shape::TriangleCallback;
use core::ops::Deref;

/// Read-only access to the raw buffers of one mesh sub-part.
///
/// Vertices are returned unscaled; applying the mesh scaling is up to the caller.
#[derive(Copy, Clone, Debug)]
pub struct MeshPart<'a> {
    /// The raw vertex buffer.
    pub vertex_base: &'a [u8],
    /// The number of vertices.
    pub num_vertices: usize,
    /// The scalar type of each vertex component.
    pub vertex_type: VertexType,
    /// The distance between two consecutive vertices, in bytes.
    pub vertex_stride: usize,
    /// The raw index buffer.
    pub index_base: &'a [u8],
    /// The width of each index.
    pub index_type: IndexType,
    /// The distance between two consecutive index triplets, in bytes.
    pub index_stride: usize,
    /// The number of triangles.
    pub num_triangles: usize,
}

impl MeshPart<'_> {
    /// The `i`-th vertex of this sub-part.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point<Real> {
        let size = self.vertex_type.size();
        let start = i * self.vertex_stride;
        let component = |k: usize| -> Real {
            let offset = start + k * size;
            match self.vertex_type {
                VertexType::F32 => f32::from_le_bytes(read_bytes(self.vertex_base, offset)) as Real,
                VertexType::F64 => f64::from_le_bytes(read_bytes(self.vertex_base, offset)) as Real,
            }
        };

        Point::new(component(0), component(1), component(2))
    }

    /// The three vertex indices of the `t`-th triangle.
    #[inline]
    pub fn triangle_indices(&self, t: usize) -> [u32; 3] {
        let size = self.index_type.size();
        let start = t * self.index_stride;
        let index = |k: usize| -> u32 {
            let offset = start + k * size;
            match self.index_type {
                IndexType::U16 => u16::from_le_bytes(read_bytes(self.index_base, offset)) as u32,
                IndexType::U32 => u32::from_le_bytes(read_bytes(self.index_base, offset)),
            }
        };

        [index(0), index(1), index(2)]
    }

    /// The vertices of the `t`-th triangle, each scaled component-wise by `scaling`.
    #[inline]
    pub fn scaled_triangle(&self, t: usize, scaling: &Vector<Real>) -> [Point<Real>; 3] {
        self.triangle_indices(t)
            .map(|i| Point::from(self.vertex(i as usize).coords.component_mul(scaling)))
    }
}

#[inline]
fn read_bytes<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut result = [0; N];
    result.copy_from_slice(&bytes[offset..offset + N]);
    result
}

/// Uniform access to triangle meshes stored in raw, possibly shared, buffers.
///
/// Access to a sub-part is scoped: [`StridingMeshInterfaceExt::lock_read_only`] returns a
/// guard that releases the sub-part through [`Self::unlock_read_only_vertex_base`] when
/// dropped. Implementations backed by external resources (e.g., mapped GPU buffers) map and
/// unmap in these two methods.
pub trait StridingMeshInterface: Send + Sync {
    /// The number of sub-parts of this mesh.
    fn num_sub_parts(&self) -> usize;

    /// Acquires read access to the buffers of the given sub-part.
    ///
    /// Prefer [`StridingMeshInterfaceExt::lock_read_only`], which pairs this call with the
    /// matching unlock.
    fn locked_read_only_vertex_index_base(&self, subpart: usize)
        -> Result<MeshPart<'_>, MeshError>;

    /// Releases the access acquired by [`Self::locked_read_only_vertex_index_base`].
    fn unlock_read_only_vertex_base(&self, subpart: usize) {
        log::trace!("Unlocked mesh sub-part {}.", subpart);
    }

    /// The scaling applied to every vertex of this mesh.
    fn scaling(&self) -> Vector<Real>;

    /// Sets the scaling applied to every vertex of this mesh.
    fn set_scaling(&mut self, scaling: Vector<Real>);
}

/// A locked mesh sub-part, unlocked on drop.
pub struct MeshPartGuard<'a, M: ?Sized + StridingMeshInterface> {
    mesh: &'a M,
    subpart: usize,
    part: MeshPart<'a>,
}

impl<M: ?Sized + StridingMeshInterface> MeshPartGuard<'_, M> {
    /// The index of the locked sub-part.
    pub fn subpart(&self) -> usize {
        self.subpart
    }
}

impl<'a, M: ?Sized + StridingMeshInterface> Deref for MeshPartGuard<'a, M> {
    type Target = MeshPart<'a>;

    fn deref(&self) -> &MeshPart<'a> {
        &self.part
    }
}

impl<M: ?Sized + StridingMeshInterface> Drop for MeshPartGuard<'_, M> {
    fn drop(&mut self) {
        self.mesh.unlock_read_only_vertex_base(self.subpart);
    }
}

/// Operations derived from the [`StridingMeshInterface`] primitives.
pub trait StridingMeshInterfaceExt: StridingMeshInterface {
    /// Locks the given sub-part for reading until the returned guard is dropped.
    fn lock_read_only(&self, subpart: usize) -> Result<MeshPartGuard<'_, Self>, MeshError>;

    /// Calls `callback` on every triangle of every sub-part, with scaled vertices.
    ///
    /// No spatial filtering is performed. Each sub-part is locked while it is visited.
    fn internal_process_all_triangles(
        &self,
        callback: &mut dyn TriangleCallback,
    ) -> Result<(), MeshError>;

    /// The AABB of all the scaled vertices referenced by a triangle.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if the mesh has no triangles.
    fn calculate_aabb_brute_force(&self) -> Result<Aabb, MeshError>;

    /// The total number of triangles over all sub-parts.
    fn num_triangles(&self) -> Result<usize, MeshError>;
}

impl<M: ?Sized + StridingMeshInterface> StridingMeshInterfaceExt for M {
    fn lock_read_only(&self, subpart: usize) -> Result<MeshPartGuard<'_, Self>, MeshError> {
        let num_subparts = self.num_sub_parts();
        if subpart >= num_subparts {
            return Err(MeshError::SubPartOutOfBounds {
                subpart,
                num_subparts,
            });
        }

        let part = self.locked_read_only_vertex_index_base(subpart)?;
        log::trace!("Locked mesh sub-part {}.", subpart);
        Ok(MeshPartGuard {
            mesh: self,
            subpart,
            part,
        })
    }

    fn internal_process_all_triangles(
        &self,
        callback: &mut dyn TriangleCallback,
    ) -> Result<(), MeshError> {
        let scaling = self.scaling();

        for subpart in 0..self.num_sub_parts() {
            let part = self.lock_read_only(subpart)?;

            for t in 0..part.num_triangles {
                let triangle = part.scaled_triangle(t, &scaling);
                callback.process_triangle(&triangle, subpart, t);
            }
        }

        Ok(())
    }

    fn calculate_aabb_brute_force(&self) -> Result<Aabb, MeshError> {
        let mut aabb = Aabb::new_invalid();
        self.internal_process_all_triangles(&mut |tri: &[Point<Real>; 3], _: usize, _: usize| {
            aabb.merge(&Aabb::from_points(tri));
        })?;
        Ok(aabb)
    }

    fn num_triangles(&self) -> Result<usize, MeshError> {
        let mut total = 0;
        for subpart in 0..self.num_sub_parts() {
            total += self.lock_read_only(subpart)?.num_triangles;
        }
        Ok(total)
    }
}
