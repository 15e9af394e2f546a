//! Access to triangle meshes stored in raw vertex and index buffers.

pub use self::error::MeshError;
pub use self::indexed_mesh::{IndexType, IndexedMesh, VertexType};
pub use self::striding_mesh::{
    MeshPart, MeshPartGuard, StridingMeshInterface, StridingMeshInterfaceExt,
};
pub use self::triangle_index_vertex_array::TriangleIndexVertexArray;

mod error;
mod indexed_mesh;
mod striding_mesh;
mod triangle_index_vertex_array;
