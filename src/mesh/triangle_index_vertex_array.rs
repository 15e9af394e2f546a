use crate::math::{Point, Real, Vector};
use crate::mesh::{IndexedMesh, MeshError, MeshPart, StridingMeshInterface};

/// A [`StridingMeshInterface`] over a list of owned [`IndexedMesh`] sub-parts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleIndexVertexArray {
    indexed_meshes: Vec<IndexedMesh>,
    scaling: Vector<Real>,
}

impl Default for TriangleIndexVertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleIndexVertexArray {
    /// An empty mesh with a unit scaling.
    pub fn new() -> Self {
        Self {
            indexed_meshes: Vec::new(),
            scaling: Vector::repeat(1.0),
        }
    }

    /// A mesh made of a single tightly packed sub-part with 32-bit indices.
    pub fn from_triangles(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Result<Self, MeshError> {
        let mut result = Self::new();
        result.add_indexed_mesh(IndexedMesh::from_triangles(vertices, indices)?);
        Ok(result)
    }

    /// Appends a sub-part.
    pub fn add_indexed_mesh(&mut self, mesh: IndexedMesh) {
        self.indexed_meshes.push(mesh);
    }

    /// The sub-parts of this mesh.
    pub fn indexed_meshes(&self) -> &[IndexedMesh] {
        &self.indexed_meshes
    }

    /// Mutable access to the sub-parts of this mesh.
    ///
    /// Shapes built on top of this mesh must refit their bounds after vertices are moved.
    pub fn indexed_meshes_mut(&mut self) -> &mut [IndexedMesh] {
        &mut self.indexed_meshes
    }
}

impl StridingMeshInterface for TriangleIndexVertexArray {
    fn num_sub_parts(&self) -> usize {
        self.indexed_meshes.len()
    }

    fn locked_read_only_vertex_index_base(
        &self,
        subpart: usize,
    ) -> Result<MeshPart<'_>, MeshError> {
        self.indexed_meshes
            .get(subpart)
            .map(IndexedMesh::part)
            .ok_or(MeshError::SubPartOutOfBounds {
                subpart,
                num_subparts: self.indexed_meshes.len(),
            })
    }

    fn scaling(&self) -> Vector<Real> {
        self.scaling
    }

    fn set_scaling(&mut self, scaling: Vector<Real>) {
        self.scaling = scaling;
    }
}
