use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::mesh::{MeshError, StridingMeshInterface, StridingMeshInterfaceExt};

/// A triangle of a mesh, identified by its sub-part and its index in that sub-part, together
/// with its AABB.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhLeaf {
    /// The AABB of the triangle.
    pub aabb: Aabb,
    /// The mesh sub-part containing the triangle.
    pub part: u32,
    /// The index of the triangle inside of its sub-part.
    pub triangle: u32,
}

/// What a BVH node points to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum OptimizedBvhNodeData {
    /// A single mesh triangle.
    Leaf {
        /// The mesh sub-part containing the triangle.
        part: u32,
        /// The index of the triangle inside of its sub-part.
        triangle: u32,
    },
    /// Two child nodes.
    Internal {
        /// Index of the left child.
        left: u32,
        /// Index of the right child.
        right: u32,
    },
}

/// A node of an [`OptimizedBvh`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OptimizedBvhNode {
    /// The AABB enclosing everything below this node.
    pub aabb: Aabb,
    /// The content of this node.
    pub data: OptimizedBvhNodeData,
}

/// A binary AABB tree over the triangles of a striding mesh.
///
/// The root is the node at index `0`. Children are always stored after their parent, so
/// iterating over the nodes in reverse order visits every child before its parent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OptimizedBvh {
    pub(super) nodes: Vec<OptimizedBvhNode>,
    pub(super) leaf_count: usize,
}

impl OptimizedBvh {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree over every triangle of `mesh`, with the scaling of the mesh applied.
    pub fn build<M>(mesh: &M) -> Result<Self, MeshError>
    where
        M: ?Sized + StridingMeshInterface,
    {
        let mut leaves = Vec::new();
        mesh.internal_process_all_triangles(
            &mut |tri: &[Point<Real>; 3], part: usize, triangle: usize| {
                leaves.push(BvhLeaf {
                    aabb: Aabb::from_points(tri),
                    part: part as u32,
                    triangle: triangle as u32,
                });
            },
        )?;

        Ok(Self::from_leaves(leaves))
    }

    /// Builds a tree over the given leaves.
    pub fn from_leaves(mut leaves: Vec<BvhLeaf>) -> Self {
        let mut result = Self {
            nodes: Vec::with_capacity(leaves.len() * 2),
            leaf_count: leaves.len(),
        };

        if !leaves.is_empty() {
            let _ = result.build_range_binned(&mut leaves);
        }

        log::trace!(
            "Built a BVH with {} leaves and {} nodes.",
            result.leaf_count,
            result.nodes.len()
        );
        result
    }

    /// Does this tree contain no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of triangles in this tree.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// All the nodes of this tree, root first.
    #[inline]
    pub fn nodes(&self) -> &[OptimizedBvhNode] {
        &self.nodes
    }

    /// The AABB enclosing the whole tree, if it is not empty.
    #[inline]
    pub fn root_aabb(&self) -> Option<&Aabb> {
        self.nodes.first().map(|node| &node.aabb)
    }
}
