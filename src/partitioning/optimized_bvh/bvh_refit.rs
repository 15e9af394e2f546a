use super::{OptimizedBvh, OptimizedBvhNodeData};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::mesh::{MeshError, StridingMeshInterface, StridingMeshInterfaceExt};

impl OptimizedBvh {
    /// Recomputes every node AABB from the current triangles of `mesh`.
    ///
    /// The topology of the tree is kept: this is much cheaper than a rebuild but the tree
    /// degrades if the triangles moved a lot.
    pub fn refit<M>(&mut self, mesh: &M) -> Result<(), MeshError>
    where
        M: ?Sized + StridingMeshInterface,
    {
        self.refit_leaves(mesh, |_, fresh| *fresh)?;

        for i in (0..self.nodes.len()).rev() {
            if let OptimizedBvhNodeData::Internal { left, right } = self.nodes[i].data {
                self.nodes[i].aabb = self.nodes[left as usize]
                    .aabb
                    .merged(&self.nodes[right as usize].aabb);
            }
        }

        Ok(())
    }

    /// Grows the AABBs of the triangles intersecting `aabb`, and of their ancestors, so they
    /// enclose the current triangles of `mesh`.
    ///
    /// Node AABBs never shrink. Triangles outside of `aabb` are not read.
    pub fn partial_refit<M>(&mut self, mesh: &M, aabb: &Aabb) -> Result<(), MeshError>
    where
        M: ?Sized + StridingMeshInterface,
    {
        self.refit_leaves(mesh, |old, fresh| {
            if old.intersects(aabb) {
                old.merged(fresh)
            } else {
                *old
            }
        })?;

        for i in (0..self.nodes.len()).rev() {
            if let OptimizedBvhNodeData::Internal { left, right } = self.nodes[i].data {
                let children = self.nodes[left as usize]
                    .aabb
                    .merged(&self.nodes[right as usize].aabb);
                self.nodes[i].aabb.merge(&children);
            }
        }

        Ok(())
    }

    /// Replaces the AABB of each leaf by `update(old, fresh)`, `fresh` being the AABB of its
    /// triangle as currently stored in `mesh`. Each sub-part is locked once.
    fn refit_leaves<M>(
        &mut self,
        mesh: &M,
        mut update: impl FnMut(&Aabb, &Aabb) -> Aabb,
    ) -> Result<(), MeshError>
    where
        M: ?Sized + StridingMeshInterface,
    {
        let scaling = mesh.scaling();

        for subpart in 0..mesh.num_sub_parts() {
            let part = mesh.lock_read_only(subpart)?;

            for node in &mut self.nodes {
                if let OptimizedBvhNodeData::Leaf { part: p, triangle } = node.data {
                    if p as usize == subpart {
                        let triangle = triangle as usize;
                        if triangle >= part.num_triangles {
                            return Err(MeshError::TriangleOutOfBounds {
                                triangle,
                                num_triangles: part.num_triangles,
                            });
                        }

                        let fresh = Aabb::from_points(&part.scaled_triangle(triangle, &scaling));
                        node.aabb = update(&node.aabb, &fresh);
                    }
                }
            }
        }

        Ok(())
    }
}
