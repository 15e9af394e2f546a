use crate::math::{Point, Real};
use crate::mesh::{MeshError, MeshPart};

/// The integer width of the triangle indices of a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum IndexType {
    /// 16-bit unsigned indices.
    U16,
    /// 32-bit unsigned indices.
    U32,
}

impl IndexType {
    /// The size of one index, in bytes.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// The scalar type of the vertex components of a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum VertexType {
    /// 32-bit floats.
    F32,
    /// 64-bit floats.
    F64,
}

impl VertexType {
    /// The size of one vertex component, in bytes.
    #[inline]
    pub fn size(self) -> usize {
        match self {
            VertexType::F32 => 4,
            VertexType::F64 => 8,
        }
    }

    /// The vertex type matching [`Real`].
    #[cfg(feature = "f32")]
    pub const REAL: VertexType = VertexType::F32;
    /// The vertex type matching [`Real`].
    #[cfg(feature = "f64")]
    pub const REAL: VertexType = VertexType::F64;
}

/// One sub-part of a striding mesh: a vertex buffer and an index buffer.
///
/// Both buffers are raw little-endian bytes with arbitrary strides, so the data can be
/// shared with external producers (e.g., interleaved render buffers). The layout is
/// validated once at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    num_triangles: usize,
    triangle_index_base: Vec<u8>,
    triangle_index_stride: usize,
    index_type: IndexType,
    num_vertices: usize,
    vertex_base: Vec<u8>,
    vertex_stride: usize,
    vertex_type: VertexType,
}

impl IndexedMesh {
    /// Builds a mesh sub-part from raw buffers.
    ///
    /// Strides are in bytes. Fails if a stride cannot hold three elements, if a buffer is
    /// too short for the declared counts, or if an index refers to a missing vertex.
    pub fn new(
        num_triangles: usize,
        triangle_index_base: Vec<u8>,
        triangle_index_stride: usize,
        index_type: IndexType,
        num_vertices: usize,
        vertex_base: Vec<u8>,
        vertex_stride: usize,
        vertex_type: VertexType,
    ) -> Result<Self, MeshError> {
        let index_row = 3 * index_type.size();
        if triangle_index_stride < index_row {
            return Err(MeshError::IndexStrideTooSmall {
                stride: triangle_index_stride,
                required: index_row,
            });
        }

        let vertex_row = 3 * vertex_type.size();
        if vertex_stride < vertex_row {
            return Err(MeshError::VertexStrideTooSmall {
                stride: vertex_stride,
                required: vertex_row,
            });
        }

        let required = required_len(num_triangles, triangle_index_stride, index_row)?;
        if triangle_index_base.len() < required {
            return Err(MeshError::IndexBufferTooShort {
                len: triangle_index_base.len(),
                required,
            });
        }

        let required = required_len(num_vertices, vertex_stride, vertex_row)?;
        if vertex_base.len() < required {
            return Err(MeshError::VertexBufferTooShort {
                len: vertex_base.len(),
                required,
            });
        }

        let result = Self {
            num_triangles,
            triangle_index_base,
            triangle_index_stride,
            index_type,
            num_vertices,
            vertex_base,
            vertex_stride,
            vertex_type,
        };

        let part = result.part();
        for triangle in 0..num_triangles {
            for index in part.triangle_indices(triangle) {
                if index as usize >= num_vertices {
                    return Err(MeshError::IndexOutOfBounds {
                        triangle,
                        index,
                        num_vertices,
                    });
                }
            }
        }

        Ok(result)
    }

    /// Builds a tightly packed mesh sub-part with 32-bit indices.
    pub fn from_triangles(
        vertices: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Result<Self, MeshError> {
        let index_base = indices
            .iter()
            .flatten()
            .flat_map(|i| i.to_le_bytes())
            .collect();
        Self::new(
            indices.len(),
            index_base,
            3 * IndexType::U32.size(),
            IndexType::U32,
            vertices.len(),
            encode_vertices(vertices),
            3 * VertexType::REAL.size(),
            VertexType::REAL,
        )
    }

    /// Builds a tightly packed mesh sub-part with 16-bit indices.
    pub fn from_triangles_u16(
        vertices: &[Point<Real>],
        indices: &[[u16; 3]],
    ) -> Result<Self, MeshError> {
        let index_base = indices
            .iter()
            .flatten()
            .flat_map(|i| i.to_le_bytes())
            .collect();
        Self::new(
            indices.len(),
            index_base,
            3 * IndexType::U16.size(),
            IndexType::U16,
            vertices.len(),
            encode_vertices(vertices),
            3 * VertexType::REAL.size(),
            VertexType::REAL,
        )
    }

    /// The number of triangles of this sub-part.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.num_triangles
    }

    /// The number of vertices of this sub-part.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// The width of the triangle indices.
    #[inline]
    pub fn index_type(&self) -> IndexType {
        self.index_type
    }

    /// The scalar type of the vertex components.
    #[inline]
    pub fn vertex_type(&self) -> VertexType {
        self.vertex_type
    }

    /// A read-only view of the raw buffers of this sub-part.
    pub fn part(&self) -> MeshPart<'_> {
        MeshPart {
            vertex_base: &self.vertex_base,
            num_vertices: self.num_vertices,
            vertex_type: self.vertex_type,
            vertex_stride: self.vertex_stride,
            index_base: &self.triangle_index_base,
            index_type: self.index_type,
            index_stride: self.triangle_index_stride,
            num_triangles: self.num_triangles,
        }
    }

    /// Overwrites the `i`-th vertex.
    ///
    /// Shapes built on top of this mesh must refit their bounds afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a valid vertex index.
    pub fn set_vertex(&mut self, i: usize, pt: &Point<Real>) {
        assert!(i < self.num_vertices, "Vertex index out of bounds.");
        let size = self.vertex_type.size();
        let start = i * self.vertex_stride;

        for k in 0..3 {
            let offset = start + k * size;
            let dst = &mut self.vertex_base[offset..offset + size];
            match self.vertex_type {
                VertexType::F32 => dst.copy_from_slice(&(pt[k] as f32).to_le_bytes()),
                VertexType::F64 => dst.copy_from_slice(&(pt[k] as f64).to_le_bytes()),
            }
        }
    }
}

fn required_len(count: usize, stride: usize, row: usize) -> Result<usize, MeshError> {
    if count == 0 {
        return Ok(0);
    }

    (count - 1)
        .checked_mul(stride)
        .and_then(|len| len.checked_add(row))
        .ok_or(MeshError::LayoutOverflow { count, stride })
}

fn encode_vertices(vertices: &[Point<Real>]) -> Vec<u8> {
    vertices
        .iter()
        .flat_map(|pt| [pt.x, pt.y, pt.z])
        .flat_map(|x| x.to_le_bytes())
        .collect()
}
