use super::{OptimizedBvh, OptimizedBvhNodeData};
use crate::bounding_volume::BoundingVolume;

impl OptimizedBvh {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if every node is reachable exactly once from the root, children
    /// are stored after their parent, and the AABB of every internal node encloses the AABBs of
    /// its children.
    pub fn assert_well_formed(&self) {
        if self.nodes.is_empty() {
            assert_eq!(self.leaf_count, 0);
            return;
        }

        let mut visited = vec![false; self.nodes.len()];
        let leaves = self.assert_well_formed_recurse(0, &mut visited);

        assert_eq!(leaves, self.leaf_count, "Leaf count mismatch.");
        assert!(visited.iter().all(|v| *v), "Unreachable BVH node.");
    }

    fn assert_well_formed_recurse(&self, node_id: u32, visited: &mut [bool]) -> usize {
        assert!(!visited[node_id as usize], "BVH node visited twice.");
        visited[node_id as usize] = true;

        let node = &self.nodes[node_id as usize];

        match node.data {
            OptimizedBvhNodeData::Leaf { .. } => 1,
            OptimizedBvhNodeData::Internal { left, right } => {
                assert!(left > node_id && right > node_id);
                assert!(node.aabb.contains(&self.nodes[left as usize].aabb));
                assert!(node.aabb.contains(&self.nodes[right as usize].aabb));
                self.assert_well_formed_recurse(left, visited)
                    + self.assert_well_formed_recurse(right, visited)
            }
        }
    }
}
