use super::{OptimizedBvh, OptimizedBvhNodeData};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::utils;

impl OptimizedBvh {
    /// Calls `callback` with the sub-part and triangle index of every leaf whose AABB
    /// intersects `aabb`.
    ///
    /// Leaves are reported in depth-first order, left child first. The traversal stack comes
    /// from a thread-local pool, so `callback` may start other traversals.
    pub fn report_aabb_overlapping_nodes(
        &self,
        aabb: &Aabb,
        mut callback: impl FnMut(u32, u32),
    ) {
        if self.nodes.is_empty() {
            return;
        }

        utils::with_traversal_stack(|stack| {
            stack.push(0);

            while let Some(id) = stack.pop() {
                let node = &self.nodes[id as usize];

                if !node.aabb.intersects(aabb) {
                    continue;
                }

                match node.data {
                    OptimizedBvhNodeData::Leaf { part, triangle } => callback(part, triangle),
                    OptimizedBvhNodeData::Internal { left, right } => {
                        stack.push(right);
                        stack.push(left);
                    }
                }
            }
        })
    }

    /// The sub-part and triangle index of every leaf, in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.nodes.iter().filter_map(|node| match node.data {
            OptimizedBvhNodeData::Leaf { part, triangle } => Some((part, triangle)),
            OptimizedBvhNodeData::Internal { .. } => None,
        })
    }
}
