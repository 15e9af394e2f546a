/// Error indicating that raw mesh buffers do not describe a valid indexed triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The triangle index stride is smaller than three indices.
    #[error("the triangle index stride ({stride} bytes) is smaller than three indices ({required} bytes).")]
    IndexStrideTooSmall {
        /// The stride given, in bytes.
        stride: usize,
        /// The minimum stride for the index type, in bytes.
        required: usize,
    },
    /// The vertex stride is smaller than three vertex components.
    #[error("the vertex stride ({stride} bytes) is smaller than three components ({required} bytes).")]
    VertexStrideTooSmall {
        /// The stride given, in bytes.
        stride: usize,
        /// The minimum stride for the vertex type, in bytes.
        required: usize,
    },
    /// The index buffer is too short for the declared number of triangles.
    #[error("the index buffer holds {len} bytes but {required} bytes are needed.")]
    IndexBufferTooShort {
        /// The actual buffer length, in bytes.
        len: usize,
        /// The length needed, in bytes.
        required: usize,
    },
    /// The vertex buffer is too short for the declared number of vertices.
    #[error("the vertex buffer holds {len} bytes but {required} bytes are needed.")]
    VertexBufferTooShort {
        /// The actual buffer length, in bytes.
        len: usize,
        /// The length needed, in bytes.
        required: usize,
    },
    /// The declared count and stride describe a buffer larger than the address space.
    #[error("{count} elements with a stride of {stride} bytes overflow the addressable size.")]
    LayoutOverflow {
        /// The declared number of triangles or vertices.
        count: usize,
        /// The stride given, in bytes.
        stride: usize,
    },
    /// A triangle refers to a vertex that does not exist.
    #[error("the triangle {triangle} refers to the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: usize,
        /// The offending vertex index.
        index: u32,
        /// The number of vertices of the sub-part.
        num_vertices: usize,
    },
    /// The requested sub-part does not exist.
    #[error("the sub-part {subpart} does not exist, the mesh only has {num_subparts} sub-parts.")]
    SubPartOutOfBounds {
        /// The requested sub-part.
        subpart: usize,
        /// The number of sub-parts of the mesh.
        num_subparts: usize,
    },
    /// A triangle that is no longer part of the mesh was requested, e.g., by a BVH built
    /// before the mesh changed.
    #[error("the triangle {triangle} does not exist, the sub-part only has {num_triangles} triangles.")]
    TriangleOutOfBounds {
        /// The requested triangle.
        triangle: usize,
        /// The number of triangles of the sub-part.
        num_triangles: usize,
    },
}
